//! AnkiConnect action groups.
//!
//! Each group borrows the [`AnkiClient`](crate::AnkiClient) and exposes
//! one method per AnkiConnect action.

mod cards;
mod decks;
mod misc;
mod notes;
mod statistics;

pub use cards::CardActions;
pub use decks::DeckActions;
pub use misc::MiscActions;
pub use notes::NoteActions;
pub use statistics::StatisticsActions;
