use anchor_lang::prelude::*;

// 8 last_timestamp + 8 interval
pub const ROUND_CLOCK_SIZE: usize = 8 + 8;

/// Start time of the current round and the configured round length, in seconds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RoundClock {
    pub last_timestamp: i64,
    pub interval: i64,
}

impl RoundClock {
    pub fn new(started_at: i64, interval: i64) -> Self {
        Self {
            last_timestamp: started_at,
            interval,
        }
    }

    /// Seconds since the round started. A clock reading earlier than the
    /// start counts as zero.
    pub fn time_since_round_start(&self, now: i64) -> i64 {
        now.saturating_sub(self.last_timestamp).max(0)
    }

    pub fn interval_elapsed(&self, now: i64) -> bool {
        self.time_since_round_start(now) >= self.interval
    }

    pub(crate) fn restart(&mut self, now: i64) {
        self.last_timestamp = now;
    }
}
