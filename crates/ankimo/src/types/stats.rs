//! Study statistics types.

use serde::{Deserialize, Serialize};

/// Cards studied and time spent today, as reported by `todayStats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayStats {
    /// Number of cards studied.
    pub cards: i64,
    /// Study time in seconds.
    pub time: i64,
}

impl TodayStats {
    /// Study time in whole minutes.
    pub fn minutes(&self) -> i64 {
        self.time / 60
    }
}
