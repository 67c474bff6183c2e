use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize, Pubkey};

use crate::error::RaffleError;

/// Maximum tickets held by a single round. Bounds the raffle account size.
pub const MAX_PARTICIPANTS: usize = 200;

// 8 entrance_fee + 4 vec length + 32 * MAX_PARTICIPANTS + 8 pooled_balance
pub const ENTRY_LEDGER_SIZE: usize = 8 + 4 + 32 * MAX_PARTICIPANTS + 8;

/// Tickets and pooled lamports of the current round.
///
/// Every entry is one ticket, so a player entering three times appears three
/// times in `participants`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct EntryLedger {
    pub entrance_fee: u64,
    pub participants: Vec<Pubkey>,
    pub pooled_balance: u64,
}

impl EntryLedger {
    pub fn new(entrance_fee: u64) -> Self {
        Self {
            entrance_fee,
            participants: Vec::new(),
            pooled_balance: 0,
        }
    }

    pub fn check_payment(&self, amount: u64) -> Result<(), RaffleError> {
        if amount < self.entrance_fee {
            return Err(RaffleError::InsufficientPayment);
        }
        Ok(())
    }

    /// Records one ticket for `player` and credits the whole `amount` to the pool.
    /// Nothing is modified when any check fails.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<(), RaffleError> {
        self.check_payment(amount)?;
        if self.participants.len() >= MAX_PARTICIPANTS {
            return Err(RaffleError::RaffleFull);
        }
        let pooled_balance = self
            .pooled_balance
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;

        self.participants.push(player);
        self.pooled_balance = pooled_balance;
        Ok(())
    }

    pub fn participant_at(&self, index: u64) -> Result<Pubkey, RaffleError> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.participants.get(index))
            .copied()
            .ok_or(RaffleError::IndexOutOfRange)
    }

    pub fn participant_count(&self) -> u64 {
        self.participants.len() as u64
    }

    pub fn pooled_balance(&self) -> u64 {
        self.pooled_balance
    }

    pub(crate) fn reset(&mut self) {
        self.participants.clear();
        self.pooled_balance = 0;
    }
}
