use anchor_lang::prelude::*;

use crate::state::Raffle;

/// Read-only view polled by keepers. Returns whether `perform_upkeep` would
/// close the current round now.
pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let raffle = &ctx.accounts.raffle;
    let now = Clock::get()?.unix_timestamp;
    let upkeep_needed = raffle.needs_upkeep(now);

    msg!(
        "Upkeep needed: {} (state {:?}, players {}, balance {}, elapsed {}s)",
        upkeep_needed,
        raffle.raffle_state,
        raffle.num_players(),
        raffle.pooled_balance(),
        raffle.clock.time_since_round_start(now)
    );

    Ok(upkeep_needed)
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [b"raffle"],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
