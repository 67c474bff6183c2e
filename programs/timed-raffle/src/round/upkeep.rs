use crate::state::{Raffle, RaffleState};

impl Raffle {
    /// Whether the current round should be closed at `now`.
    ///
    /// All of these must hold:
    /// 1. The raffle is `Open`
    /// 2. At least one ticket was sold
    /// 3. The pool holds lamports
    /// 4. The round interval has elapsed
    ///
    /// Pure read, safe to call from keepers at any frequency.
    pub fn needs_upkeep(&self, now: i64) -> bool {
        let is_open = self.raffle_state == RaffleState::Open;
        let has_players = self.ledger.participant_count() > 0;
        let has_balance = self.ledger.pooled_balance() > 0;
        let time_passed = self.clock.interval_elapsed(now);

        is_open && has_players && has_balance && time_passed
    }
}

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use crate::state::{Raffle, RaffleState};

    const FEE: u64 = 100;
    const START: i64 = 10_000;
    const INTERVAL: i64 = 30;

    fn raffle() -> Raffle {
        Raffle::new(FEE, INTERVAL, START, 255)
    }

    #[test]
    fn empty_round_never_needs_upkeep() {
        let raffle = raffle();
        assert!(!raffle.needs_upkeep(START + INTERVAL));
        assert!(!raffle.needs_upkeep(START + 100 * INTERVAL));
    }

    #[test]
    fn needs_upkeep_once_interval_elapsed() {
        let mut raffle = raffle();
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();

        assert!(!raffle.needs_upkeep(START + INTERVAL - 1));
        assert!(raffle.needs_upkeep(START + INTERVAL));
    }

    #[test]
    fn closing_round_does_not_need_upkeep() {
        let mut raffle = raffle();
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();
        raffle.raffle_state = RaffleState::Closing;

        assert!(!raffle.needs_upkeep(START + INTERVAL));
    }

    #[test]
    fn zero_balance_does_not_need_upkeep() {
        let mut raffle = Raffle::new(0, INTERVAL, START, 255);
        raffle.enter(Pubkey::new_unique(), 0).unwrap();

        assert_eq!(raffle.num_players(), 1);
        assert!(!raffle.needs_upkeep(START + INTERVAL));
    }

    #[test]
    fn evaluation_has_no_side_effects() {
        let mut raffle = raffle();
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();
        let before = raffle.clone();

        for offset in 0..3 * INTERVAL {
            raffle.needs_upkeep(START + offset);
        }
        assert_eq!(raffle, before);
    }
}
