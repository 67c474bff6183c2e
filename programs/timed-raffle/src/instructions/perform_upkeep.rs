use anchor_lang::prelude::*;

use crate::{
    oracle::EventOracle,
    state::{Config, Raffle},
};

/// Closes the current round and requests a random word from the oracle.
/// Anyone may call this; the upkeep conditions are re-checked on chain.
///
/// After execution:
/// - The raffle is `Closing` and rejects entries
/// - The request id is stored as the single pending request and returned
///
/// # Errors
/// - `UpkeepNotNeeded` if the round is not open, is empty, has no balance,
///   or its interval has not elapsed
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let raffle = &mut ctx.accounts.raffle;

    if !raffle.needs_upkeep(now) {
        msg!(
            "Upkeep not needed: state {:?}, players {}, balance {}",
            raffle.raffle_state,
            raffle.num_players(),
            raffle.pooled_balance()
        );
    }

    let mut oracle = EventOracle::new(&mut ctx.accounts.config, raffle_key, raffle.round);
    let request_id = raffle.request_close(now, &mut oracle)?;

    msg!(
        "Round {} closed by {}, request id {}",
        raffle.round,
        ctx.accounts.keeper.key(),
        request_id
    );

    Ok(request_id)
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [b"raffle"],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    pub keeper: Signer<'info>,
}
