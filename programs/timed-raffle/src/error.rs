use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Send more to enter the raffle")]
    InsufficientPayment,
    #[msg("Raffle is not open")]
    RoundNotOpen,
    #[msg("Upkeep not needed")]
    UpkeepNotNeeded,
    #[msg("Participant index is out of range")]
    IndexOutOfRange,
    #[msg("Randomness request is unknown or already fulfilled")]
    UnknownRequest,
    #[msg("Transfer of the pool to the winner failed")]
    PayoutFailed,
    #[msg("All tickets for this round have been sold")]
    RaffleFull,
    #[msg("Entrance fee is below the minimum")]
    EntranceFeeTooLow,
    #[msg("Interval is below the minimum")]
    IntervalTooShort,
    #[msg("Interval exceeds the maximum")]
    IntervalTooLong,
    #[msg("Only the oracle authority can fulfill randomness")]
    NotOracleAuthority,
}
