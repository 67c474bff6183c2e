use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Moves the pool to a winner. Implementations either move all of `amount`
/// or nothing.
pub trait PayoutTransfer {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> std::result::Result<(), RaffleError>;
}

/// Pays out of the program-owned vault by moving lamports directly, which
/// works because the vault is a PDA owned by this program.
pub struct VaultPayout<'info> {
    vault: AccountInfo<'info>,
    winner: AccountInfo<'info>,
    rent_reserve: u64,
}

impl<'info> VaultPayout<'info> {
    /// `rent_reserve` lamports always stay in the vault.
    pub fn new(vault: AccountInfo<'info>, winner: AccountInfo<'info>, rent_reserve: u64) -> Self {
        Self {
            vault,
            winner,
            rent_reserve,
        }
    }
}

impl PayoutTransfer for VaultPayout<'_> {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> std::result::Result<(), RaffleError> {
        if self.winner.key != recipient {
            msg!("Winner account {} does not match drawn winner {}", self.winner.key, recipient);
            return Err(RaffleError::PayoutFailed);
        }
        if !self.winner.is_writable || self.winner.executable {
            msg!("Winner account {} cannot receive lamports", recipient);
            return Err(RaffleError::PayoutFailed);
        }

        let available = self.vault.lamports().saturating_sub(self.rent_reserve);
        if available < amount {
            msg!("Vault holds {} payable lamports, {} required", available, amount);
            return Err(RaffleError::PayoutFailed);
        }
        if self.winner.lamports().checked_add(amount).is_none() {
            return Err(RaffleError::PayoutFailed);
        }

        self.vault
            .sub_lamports(amount)
            .map_err(|_| RaffleError::PayoutFailed)?;
        self.winner
            .add_lamports(amount)
            .map_err(|_| RaffleError::PayoutFailed)?;

        msg!("Paid {} lamports to {}", amount, recipient);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVE: u64 = 1_000;

    struct TestAccount {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl TestAccount {
        fn new(lamports: u64) -> Self {
            Self {
                key: Pubkey::new_unique(),
                owner: crate::ID,
                lamports,
                data: vec![],
            }
        }

        fn info(&mut self, is_writable: bool) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                is_writable,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }
    }

    #[test]
    fn moves_pool_to_winner() {
        let mut vault = TestAccount::new(RESERVE + 400);
        let mut winner = TestAccount::new(5);
        let winner_key = winner.key;
        {
            let mut payout = VaultPayout::new(vault.info(true), winner.info(true), RESERVE);
            payout.transfer(&winner_key, 400).unwrap();
        }
        assert_eq!(vault.lamports, RESERVE);
        assert_eq!(winner.lamports, 405);
    }

    #[test]
    fn wrong_winner_account_moves_nothing() {
        let mut vault = TestAccount::new(RESERVE + 400);
        let mut other = TestAccount::new(5);
        {
            let mut payout = VaultPayout::new(vault.info(true), other.info(true), RESERVE);
            let err = payout.transfer(&Pubkey::new_unique(), 400).unwrap_err();
            assert!(matches!(err, RaffleError::PayoutFailed));
        }
        assert_eq!(vault.lamports, RESERVE + 400);
        assert_eq!(other.lamports, 5);
    }

    #[test]
    fn read_only_winner_is_rejected() {
        let mut vault = TestAccount::new(RESERVE + 400);
        let mut winner = TestAccount::new(5);
        let winner_key = winner.key;
        {
            let mut payout = VaultPayout::new(vault.info(true), winner.info(false), RESERVE);
            assert!(payout.transfer(&winner_key, 400).is_err());
        }
        assert_eq!(vault.lamports, RESERVE + 400);
    }

    #[test]
    fn rent_reserve_is_never_paid_out() {
        let mut vault = TestAccount::new(RESERVE + 399);
        let mut winner = TestAccount::new(0);
        let winner_key = winner.key;
        {
            let mut payout = VaultPayout::new(vault.info(true), winner.info(true), RESERVE);
            let err = payout.transfer(&winner_key, 400).unwrap_err();
            assert!(matches!(err, RaffleError::PayoutFailed));
        }
        assert_eq!(vault.lamports, RESERVE + 399);
        assert_eq!(winner.lamports, 0);
    }
}
