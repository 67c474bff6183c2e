use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::Config};

/// Number of random words asked for per request.
pub const NUM_WORDS: u32 = 1;

/// Source of randomness requests. The answer arrives later through
/// `fulfill_random_words` carrying the returned id.
pub trait RandomnessOracle {
    fn submit_request(&mut self) -> std::result::Result<u64, RaffleError>;
}

/// Event the off-chain oracle listens for
#[event]
pub struct RandomWordsRequested {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Correlation id expected back in the fulfillment
    pub request_id: u64,
    /// Round being closed
    pub round: u64,
    /// Number of random words requested
    pub num_words: u32,
}

/// Oracle backed by the config request counter. Submitting a request
/// allocates the next id and announces it through a program event.
pub struct EventOracle<'a> {
    config: &'a mut Config,
    raffle: Pubkey,
    round: u64,
}

impl<'a> EventOracle<'a> {
    pub fn new(config: &'a mut Config, raffle: Pubkey, round: u64) -> Self {
        Self {
            config,
            raffle,
            round,
        }
    }
}

impl RandomnessOracle for EventOracle<'_> {
    fn submit_request(&mut self) -> std::result::Result<u64, RaffleError> {
        let request_id = self
            .config
            .request_counter
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        self.config.request_counter = request_id;

        msg!("Requested {} random word(s), request id {}", NUM_WORDS, request_id);
        emit!(RandomWordsRequested {
            raffle: self.raffle,
            request_id,
            round: self.round,
            num_words: NUM_WORDS,
        });

        Ok(request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(request_counter: u64) -> Config {
        Config {
            management_authority: Pubkey::new_unique(),
            oracle_authority: Pubkey::new_unique(),
            request_counter,
            bump: 254,
        }
    }

    #[test]
    fn request_ids_are_sequential() {
        let mut config = config(0);
        let raffle = Pubkey::new_unique();

        let mut oracle = EventOracle::new(&mut config, raffle, 0);
        assert_eq!(oracle.submit_request().unwrap(), 1);
        assert_eq!(oracle.submit_request().unwrap(), 2);
        assert_eq!(config.request_counter, 2);
    }

    #[test]
    fn exhausted_counter_fails() {
        let mut config = config(u64::MAX);
        let mut oracle = EventOracle::new(&mut config, Pubkey::new_unique(), 3);

        assert!(matches!(
            oracle.submit_request(),
            Err(RaffleError::Overflow)
        ));
        assert_eq!(config.request_counter, u64::MAX);
    }
}
