use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize, Pubkey};

use crate::{
    error::RaffleError,
    payout::PayoutTransfer,
    state::{Raffle, RaffleState},
};

// 32 winner + 8 payout + 8 timestamp + 8 round
pub const WINNER_RECORD_SIZE: usize = 32 + 8 + 8 + 8;

/// Last resolved winner, kept until the next round resolves.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinnerRecord {
    pub winner: Pubkey,
    pub payout: u64,
    pub timestamp: i64,
    pub round: u64,
}

/// Maps a 32 byte random word, read as a big-endian unsigned integer, to
/// `word mod participant_count`.
pub fn winner_index(random_word: &[u8; 32], participant_count: u64) -> Result<u64, RaffleError> {
    if participant_count == 0 {
        return Err(RaffleError::IndexOutOfRange);
    }
    let modulus = u128::from(participant_count);
    let index = random_word
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | u128::from(*byte)) % modulus);
    Ok(index as u64)
}

impl Raffle {
    /// Settles the closing round with the oracle's random word.
    ///
    /// The winner is paid before any state changes. A rejected payout leaves
    /// the round closing with the same pending request, so the oracle can
    /// retry with the same id and word.
    ///
    /// # Errors
    /// - `UnknownRequest` if `request_id` is not the pending request
    /// - `PayoutFailed` if the transfer to the winner is rejected
    pub fn resolve<P: PayoutTransfer>(
        &mut self,
        request_id: u64,
        random_word: &[u8; 32],
        now: i64,
        payout: &mut P,
    ) -> Result<WinnerRecord, RaffleError> {
        let pending = self
            .pending_request
            .filter(|pending| pending.request_id == request_id)
            .ok_or(RaffleError::UnknownRequest)?;

        let index = winner_index(random_word, self.ledger.participant_count())?;
        let winner = self.ledger.participant_at(index)?;
        let amount = self.ledger.pooled_balance();
        let next_round = pending.round.checked_add(1).ok_or(RaffleError::Overflow)?;

        payout.transfer(&winner, amount)?;

        let record = WinnerRecord {
            winner,
            payout: amount,
            timestamp: now,
            round: pending.round,
        };
        self.recent_winner = Some(record);
        self.pending_request = None;
        self.ledger.reset();
        self.clock.restart(now);
        self.round = next_round;
        self.raffle_state = RaffleState::Open;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(value: u64) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        word
    }

    #[test]
    fn small_words_use_plain_modulo() {
        assert_eq!(winner_index(&word(2), 4).unwrap(), 2);
        assert_eq!(winner_index(&word(7), 4).unwrap(), 3);
        assert_eq!(winner_index(&word(0), 1).unwrap(), 0);
        assert_eq!(winner_index(&word(u64::MAX), 10).unwrap(), u64::MAX % 10);
    }

    #[test]
    fn full_width_word_is_reduced_exactly() {
        // 2^256 - 1 = 3 * 5 * 17 * 257 * ... so it is divisible by 5 and by 3
        let max = [0xffu8; 32];
        assert_eq!(winner_index(&max, 5).unwrap(), 0);
        assert_eq!(winner_index(&max, 3).unwrap(), 0);
        // 2^256 mod 7 = 2, so (2^256 - 1) mod 7 = 1
        assert_eq!(winner_index(&max, 7).unwrap(), 1);

        let mut high_bit = [0u8; 32];
        high_bit[0] = 1;
        // 2^248 mod 10 = 6
        assert_eq!(winner_index(&high_bit, 10).unwrap(), 6);
    }

    #[test]
    fn no_participants_has_no_index() {
        assert!(matches!(
            winner_index(&word(5), 0),
            Err(RaffleError::IndexOutOfRange)
        ));
    }
}
