use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    payout::VaultPayout,
    state::{Config, Raffle, Vault, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when a round is paid out
#[event]
pub struct WinnerPicked {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid to the winner
    pub payout: u64,
    /// The round that was resolved
    pub round: u64,
    /// The request this fulfillment answered
    pub request_id: u64,
}

/// Oracle callback resolving the closing round.
///
/// The winning ticket is `random_word mod num_players`, reading the word as a
/// big-endian 256 bit integer. The winner account passed in must be the owner
/// of that ticket.
///
/// After execution:
/// - The whole pool is moved from the vault to the winner
/// - The winner is recorded as the recent winner
/// - A new round opens with no players, starting at the current clock time
///
/// # Errors
/// - `NotOracleAuthority` if the signer is not the configured oracle
/// - `UnknownRequest` if `request_id` is not pending, including a replay
/// - `PayoutFailed` if the winner account cannot receive the pool; the round
///   stays closing so the same fulfillment can be retried
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_word: [u8; 32],
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let rent_reserve = Rent::get()?.minimum_balance(VAULT_ACCOUNT_SIZE);
    let raffle_key = ctx.accounts.raffle.key();

    let mut payout = VaultPayout::new(
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.winner.to_account_info(),
        rent_reserve,
    );
    let record = ctx
        .accounts
        .raffle
        .resolve(request_id, &random_word, now, &mut payout)?;

    msg!(
        "Round {} won by {} for {} lamports",
        record.round,
        record.winner,
        record.payout
    );
    emit!(WinnerPicked {
        raffle: raffle_key,
        winner: record.winner,
        payout: record.payout,
        round: record.round,
        request_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = oracle_authority @ RaffleError::NotOracleAuthority,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [b"raffle"],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            b"vault",
            raffle.key().as_ref(),
        ],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: Compared against the drawn winner before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    pub oracle_authority: Signer<'info>,
}
