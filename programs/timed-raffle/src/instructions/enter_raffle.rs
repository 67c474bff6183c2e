use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

use crate::state::{Raffle, Vault};

/// Event emitted when a player buys a ticket
#[event]
pub struct RaffleEntered {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The player's address
    pub player: Pubkey,
    /// Amount paid in lamports
    pub amount: u64,
    /// Index of the new ticket within the round
    pub ticket_index: u64,
}

/// Instruction to buy one ticket in the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports paid for the ticket, at least the entrance fee
///
/// # Account Validations
/// * Raffle - PDA with seed "raffle"; must be `Open` and below capacity
/// * Vault - PDA with seeds ["vault", raffle_key] receiving the payment
/// * Player - Signer paying `amount`
///
/// The whole `amount` is credited to the pool. The ticket is recorded before
/// the transfer and the transaction fails as a whole if the transfer fails.
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();

    ctx.accounts.raffle.enter(player, amount)?;
    let ticket_index = ctx.accounts.raffle.num_players() - 1;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Player {} entered with ticket {}", player, ticket_index);
    emit!(RaffleEntered {
        raffle: ctx.accounts.raffle.key(),
        player,
        amount,
        ticket_index,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [b"raffle"],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Holds the pooled entrance fees
    #[account(
        mut,
        seeds = [
            b"vault",
            raffle.key().as_ref(),
        ],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
