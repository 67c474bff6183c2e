use anchor_lang::prelude::*;

// 8 discriminator + 32 management_authority + 32 oracle_authority + 8 request_counter + 1 bump
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 1;

#[account]
pub struct Config {
    pub management_authority: Pubkey,
    pub oracle_authority: Pubkey,
    pub request_counter: u64,
    pub bump: u8,
}
