//! Card-related types.

use std::collections::HashMap;

use serde::Deserialize;

/// Name of the front field on the basic note types.
pub const FRONT_FIELD: &str = "Front";

/// Name of the back field on the basic note types.
pub const BACK_FIELD: &str = "Back";

/// A snapshot of one card, as returned by `cardsInfo`.
///
/// Only the fields are read by callers; the remaining metadata is carried
/// along untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// The card ID, or 0 when AnkiConnect no longer knows the card and
    /// answered with an empty object.
    #[serde(default)]
    pub card_id: i64,
    /// The note ID this card was generated from, or 0 if not reported.
    #[serde(default, alias = "note", alias = "nid")]
    pub note_id: i64,
    /// The deck this card belongs to.
    #[serde(default)]
    pub deck_name: String,
    /// The note type (model) name.
    #[serde(default)]
    pub model_name: String,
    /// The card's question side (HTML).
    #[serde(default)]
    pub question: String,
    /// The card's answer side (HTML).
    #[serde(default)]
    pub answer: String,
    /// Ordinal of the field shown on the question side.
    #[serde(default)]
    pub field_order: i32,
    /// The note type's style sheet.
    #[serde(default)]
    pub css: String,
    /// Current interval in days.
    #[serde(default)]
    pub interval: i64,
    /// Field values from the note.
    #[serde(default)]
    pub fields: HashMap<String, CardField>,
}

impl CardInfo {
    /// Whether this entry stands for a card that does not exist.
    pub fn is_missing(&self) -> bool {
        self.card_id == 0
    }

    /// The value of a named field, if the note has it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|f| f.value.as_str())
    }

    /// The front field value.
    pub fn front(&self) -> Option<&str> {
        self.field(FRONT_FIELD)
    }

    /// The back field value.
    pub fn back(&self) -> Option<&str> {
        self.field(BACK_FIELD)
    }
}

/// A field value with its display position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardField {
    /// The field value (HTML).
    pub value: String,
    /// The field's position in the note type.
    #[serde(default)]
    pub order: i32,
}
