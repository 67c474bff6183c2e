use anchor_lang::prelude::*;
use instructions::*;

pub mod error;
pub mod instructions;
pub mod oracle;
pub mod payout;
pub mod round;
pub mod state;

declare_id!("Frc33i74K2XfP6eB1QAyZ4a8evHNa8E9NoQf5fAgruUF");

#[program]
pub mod timed_raffle {
    use super::*;

    pub fn init_raffle(ctx: Context<InitRaffle>, entrance_fee: u64, interval: i64) -> Result<()> {
        instructions::init_raffle::init_raffle(ctx, entrance_fee, interval)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        instructions::check_upkeep::check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<u64> {
        instructions::perform_upkeep::perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_word: [u8; 32],
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_word)
    }
}
