use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize};

use crate::{
    error::RaffleError,
    oracle::RandomnessOracle,
    state::{Raffle, RaffleState},
};

// 8 request_id + 8 round
pub const PENDING_REQUEST_SIZE: usize = 8 + 8;

/// The single outstanding randomness request of a closed round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRandomnessRequest {
    pub request_id: u64,
    pub round: u64,
}

impl Raffle {
    /// Closes the current round and asks the oracle for a random word.
    ///
    /// Upkeep conditions are re-evaluated here rather than trusted from the
    /// keeper. The oracle is asked before any state changes, so an oracle
    /// failure leaves the round open.
    ///
    /// # Errors
    /// - `UpkeepNotNeeded` if `needs_upkeep(now)` is false, which includes a
    ///   round that is already closing
    pub fn request_close<O: RandomnessOracle>(
        &mut self,
        now: i64,
        oracle: &mut O,
    ) -> Result<u64, RaffleError> {
        if !self.needs_upkeep(now) {
            return Err(RaffleError::UpkeepNotNeeded);
        }

        let request_id = oracle.submit_request()?;

        self.raffle_state = RaffleState::Closing;
        self.pending_request = Some(PendingRandomnessRequest {
            request_id,
            round: self.round,
        });

        Ok(request_id)
    }
}
