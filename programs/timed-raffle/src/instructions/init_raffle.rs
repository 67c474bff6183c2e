use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Config, Raffle, Vault, CONFIG_ACCOUNT_SIZE, RAFFLE_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE},
};

// Constants for validation
const MIN_ENTRANCE_FEE: u64 = 10_000_000; // 0.01 SOL
const MIN_INTERVAL: i64 = 30; // 30 seconds
const MAX_INTERVAL: i64 = 30 * 24 * 60 * 60; // 30 days in seconds

/// Event emitted when the raffle is initialized
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Price of one ticket in lamports
    pub entrance_fee: u64,
    /// Round length in seconds
    pub interval: i64,
    /// Key allowed to fulfill randomness requests
    pub oracle_authority: Pubkey,
    /// Start of the first round
    pub started_at: i64,
}

pub fn validate_raffle_params(
    entrance_fee: u64,
    interval: i64,
) -> std::result::Result<(), RaffleError> {
    if entrance_fee < MIN_ENTRANCE_FEE {
        return Err(RaffleError::EntranceFeeTooLow);
    }
    if interval < MIN_INTERVAL {
        return Err(RaffleError::IntervalTooShort);
    }
    if interval > MAX_INTERVAL {
        return Err(RaffleError::IntervalTooLong);
    }
    Ok(())
}

/// Instruction to create the raffle, its vault and the program configuration.
/// This should be called once during program deployment.
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `entrance_fee` - Price of one ticket in lamports (at least 0.01 SOL)
/// * `interval` - Minimum round length in seconds (30 seconds to 30 days)
///
/// # Account Validations
/// * Config - New PDA with seed "config" storing the authorities and request counter
/// * Raffle - New PDA with seed "raffle", opened at the current clock time
/// * Vault - New PDA with seeds ["vault", raffle_key] holding the pool
/// * Oracle Authority - Becomes the only key allowed to fulfill randomness
///
/// Entrance fee and interval cannot be changed afterwards.
pub fn init_raffle(ctx: Context<InitRaffle>, entrance_fee: u64, interval: i64) -> Result<()> {
    validate_raffle_params(entrance_fee, interval)?;

    let started_at = Clock::get()?.unix_timestamp;

    ctx.accounts.config.set_inner(Config {
        management_authority: ctx.accounts.management_authority.key(),
        oracle_authority: ctx.accounts.oracle_authority.key(),
        request_counter: 0,
        bump: ctx.bumps.config,
    });
    ctx.accounts
        .raffle
        .set_inner(Raffle::new(entrance_fee, interval, started_at, ctx.bumps.raffle));
    ctx.accounts.vault.raffle = ctx.accounts.raffle.key();
    ctx.accounts.vault.bump = ctx.bumps.vault;

    msg!(
        "Raffle initialized: entrance fee {} lamports, interval {}s",
        entrance_fee,
        interval
    );
    emit!(RaffleInitialized {
        raffle: ctx.accounts.raffle.key(),
        entrance_fee,
        interval,
        oracle_authority: ctx.accounts.oracle_authority.key(),
        started_at,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitRaffle<'info> {
    #[account(
        init,
        payer = management_authority,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = management_authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [b"raffle"],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = management_authority,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [
            b"vault",
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub management_authority: Signer<'info>,
    pub oracle_authority: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(validate_raffle_params(MIN_ENTRANCE_FEE, MIN_INTERVAL).is_ok());
        assert!(validate_raffle_params(MIN_ENTRANCE_FEE, MAX_INTERVAL).is_ok());
    }

    #[test]
    fn rejects_out_of_range_params() {
        assert!(matches!(
            validate_raffle_params(0, MIN_INTERVAL),
            Err(RaffleError::EntranceFeeTooLow)
        ));
        assert!(matches!(
            validate_raffle_params(MIN_ENTRANCE_FEE, MIN_INTERVAL - 1),
            Err(RaffleError::IntervalTooShort)
        ));
        assert!(matches!(
            validate_raffle_params(MIN_ENTRANCE_FEE, MAX_INTERVAL + 1),
            Err(RaffleError::IntervalTooLong)
        ));
    }
}
