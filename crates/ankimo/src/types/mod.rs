//! Domain types for AnkiConnect.

mod card;
mod stats;

pub use card::{BACK_FIELD, CardField, CardInfo, FRONT_FIELD};
pub use stats::TodayStats;
