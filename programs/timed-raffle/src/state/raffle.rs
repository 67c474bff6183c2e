use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    round::{
        EntryLedger, PendingRandomnessRequest, RoundClock, WinnerRecord, ENTRY_LEDGER_SIZE,
        PENDING_REQUEST_SIZE, ROUND_CLOCK_SIZE, WINNER_RECORD_SIZE,
    },
};

// Space calculation:
// 8 (discriminator) +
// 1 (raffle_state) +
// ENTRY_LEDGER_SIZE (entrance_fee, participants, pooled_balance) +
// ROUND_CLOCK_SIZE (last_timestamp, interval) +
// 1 + PENDING_REQUEST_SIZE (pending_request: Option) +
// 1 + WINNER_RECORD_SIZE (recent_winner: Option) +
// 8 (round) +
// 1 (bump)
pub const RAFFLE_ACCOUNT_SIZE: usize = 8
    + 1
    + ENTRY_LEDGER_SIZE
    + ROUND_CLOCK_SIZE
    + 1
    + PENDING_REQUEST_SIZE
    + 1
    + WINNER_RECORD_SIZE
    + 8
    + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    /// Accepting entries
    Open,
    /// Waiting for the oracle to fulfill the pending request
    Closing,
}

/// The raffle state machine. Cycles `Open -> Closing -> Open` forever:
/// `request_close` closes a round, `resolve` pays it out and opens the next.
#[account]
#[derive(Debug, PartialEq)]
pub struct Raffle {
    pub raffle_state: RaffleState,
    pub ledger: EntryLedger,
    pub clock: RoundClock,
    pub pending_request: Option<PendingRandomnessRequest>,
    pub recent_winner: Option<WinnerRecord>,
    /// Number of rounds resolved so far
    pub round: u64,
    pub bump: u8,
}

impl Raffle {
    pub fn new(entrance_fee: u64, interval: i64, started_at: i64, bump: u8) -> Self {
        Self {
            raffle_state: RaffleState::Open,
            ledger: EntryLedger::new(entrance_fee),
            clock: RoundClock::new(started_at, interval),
            pending_request: None,
            recent_winner: None,
            round: 0,
            bump,
        }
    }

    /// Buys one ticket for `player` with `amount` lamports.
    ///
    /// # Errors
    /// - `InsufficientPayment` if `amount` is below the entrance fee
    /// - `RoundNotOpen` while the round is closing
    /// - `RaffleFull` once the round holds `MAX_PARTICIPANTS` tickets
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> std::result::Result<(), RaffleError> {
        self.ledger.check_payment(amount)?;
        if self.raffle_state != RaffleState::Open {
            return Err(RaffleError::RoundNotOpen);
        }
        self.ledger.enter(player, amount)
    }

    pub fn entrance_fee(&self) -> u64 {
        self.ledger.entrance_fee
    }

    pub fn interval(&self) -> i64 {
        self.clock.interval
    }

    pub fn raffle_state(&self) -> RaffleState {
        self.raffle_state
    }

    pub fn num_players(&self) -> u64 {
        self.ledger.participant_count()
    }

    pub fn player(&self, index: u64) -> std::result::Result<Pubkey, RaffleError> {
        self.ledger.participant_at(index)
    }

    pub fn pooled_balance(&self) -> u64 {
        self.ledger.pooled_balance()
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner.map(|record| record.winner)
    }

    pub fn last_timestamp(&self) -> i64 {
        self.clock.last_timestamp
    }
}
