//! Phonetic annotation of card front fields.
//!
//! For every card in a deck, the whitespace-separated words of the front
//! field are looked up in a [`PhoneticDictionary`] and the matching
//! transcriptions are appended below the original text:
//!
//! ```text
//! the cat sat  ->  the cat sat<br><br>kæt sæt
//! ```
//!
//! The back field and all other note data are left alone.
//!
//! # Example
//!
//! ```no_run
//! use ankimo_engine::Engine;
//! use ankimo_engine::annotate::AnnotateOptions;
//!
//! # async fn example() -> ankimo_engine::Result<()> {
//! let engine = Engine::new();
//!
//! let report = engine
//!     .annotate()
//!     .deck("English", "phonetics.tsv", &AnnotateOptions::default())
//!     .await?;
//! println!("Updated: {}, Failed: {}", report.updated, report.failed);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use ankimo::{AnkiClient, BACK_FIELD, CardInfo, FRONT_FIELD};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::dictionary::PhoneticDictionary;
use crate::{Error, Result};

/// Inserted between the original front text and its annotation.
pub const SEPARATOR: &str = "<br><br>";

/// Compute the phonetic annotation for a piece of text.
///
/// The text is split on single spaces and each token is looked up
/// exactly. Transcriptions of matching tokens are joined with a space, in
/// the order the tokens appear; unknown tokens are dropped.
///
/// # Errors
///
/// Returns [`Error::NoMatch`] when no token is in the dictionary.
///
/// # Example
///
/// ```
/// use ankimo_engine::annotate::annotate;
/// use ankimo_engine::PhoneticDictionary;
///
/// let dict: PhoneticDictionary = [("cat", "kæt"), ("sat", "sæt")].into_iter().collect();
/// assert_eq!(annotate(&dict, "the cat sat").unwrap(), "kæt sæt");
/// assert!(annotate(&dict, "dog run").is_err());
/// ```
pub fn annotate(dict: &PhoneticDictionary, text: &str) -> Result<String> {
    let matched: Vec<&str> = text.split(' ').filter_map(|token| dict.get(token)).collect();

    if matched.is_empty() {
        return Err(Error::NoMatch);
    }
    Ok(matched.join(" "))
}

/// Join a front text and its annotation with [`SEPARATOR`].
pub fn annotated_front(front: &str, annotation: &str) -> String {
    format!("{}{}{}", front, SEPARATOR, annotation)
}

/// Whether `front` already ends with the annotation block this dictionary
/// would produce for the text before it.
pub fn is_annotated(dict: &PhoneticDictionary, front: &str) -> bool {
    match front.rsplit_once(SEPARATOR) {
        Some((base, tail)) => annotate(dict, base).unwrap_or_default() == tail,
        None => false,
    }
}

/// Options for an annotation run.
#[derive(Debug, Clone, Default)]
pub struct AnnotateOptions {
    /// Leave cards alone whose front already carries the annotation block.
    ///
    /// Off by default, in which case every run appends a new block.
    pub skip_annotated: bool,
}

/// Outcome of annotating one deck.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnnotationReport {
    /// Cards fetched from the deck.
    pub total: usize,
    /// Cards whose note was updated.
    pub updated: usize,
    /// Cards left alone because they were already annotated.
    pub skipped: usize,
    /// Updated cards whose front had no known word (an empty block was
    /// appended).
    pub no_match: usize,
    /// Cards that could not be updated.
    pub failed: usize,
    /// Details about failed cards.
    pub failures: Vec<AnnotationFailure>,
}

impl AnnotationReport {
    /// Whether every card was handled without error.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    fn record_failure(&mut self, card_id: i64, note_id: i64, error: String) {
        warn!(
            card_id,
            note_id,
            error = %error,
            "updating the front of the card failed"
        );
        self.failed += 1;
        self.failures.push(AnnotationFailure {
            card_id,
            note_id,
            error,
        });
    }
}

/// Details about a card that could not be annotated.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationFailure {
    /// The card ID.
    pub card_id: i64,
    /// The note the update was addressed to.
    pub note_id: i64,
    /// The error message.
    pub error: String,
}

/// Annotation workflow engine.
#[derive(Debug)]
pub struct AnnotateEngine<'a> {
    client: &'a AnkiClient,
}

impl<'a> AnnotateEngine<'a> {
    pub(crate) fn new(client: &'a AnkiClient) -> Self {
        Self { client }
    }

    /// Load the dictionary at `dictionary` and annotate every card in `deck`.
    ///
    /// Failing to load the dictionary, find the cards, or fetch their
    /// fields aborts the run before any note is touched. After that, each
    /// card is handled on its own: a failed update is logged and recorded in
    /// the report, and the remaining cards are still processed.
    pub async fn deck(
        &self,
        deck: &str,
        dictionary: impl AsRef<Path>,
        options: &AnnotateOptions,
    ) -> Result<AnnotationReport> {
        info!("reading phonetic symbols");
        let dict = PhoneticDictionary::load(dictionary)?;
        self.deck_with(deck, &dict, options).await
    }

    /// Annotate every card in `deck` with an already loaded dictionary.
    pub async fn deck_with(
        &self,
        deck: &str,
        dict: &PhoneticDictionary,
        options: &AnnotateOptions,
    ) -> Result<AnnotationReport> {
        info!(deck = %deck, "finding card ids in the deck");
        let card_ids = self.client.cards().find_in_deck(deck).await?;
        info!(cards = card_ids.len(), "cards found");

        let cards = self.client.cards().info(&card_ids).await?;

        let mut report = AnnotationReport {
            total: cards.len(),
            ..Default::default()
        };

        for (idx, card) in cards.iter().enumerate() {
            if card.is_missing() {
                // cardsInfo answers in request order, with `{}` for unknown ids.
                let card_id = card_ids.get(idx).copied().unwrap_or_default();
                report.record_failure(card_id, 0, "card no longer exists".to_string());
                continue;
            }
            self.annotate_card(card, dict, options, &mut report).await;
        }

        info!(
            deck = %deck,
            total = report.total,
            updated = report.updated,
            skipped = report.skipped,
            no_match = report.no_match,
            failed = report.failed,
            "annotation finished"
        );
        Ok(report)
    }

    async fn annotate_card(
        &self,
        card: &CardInfo,
        dict: &PhoneticDictionary,
        options: &AnnotateOptions,
        report: &mut AnnotationReport,
    ) {
        if card.note_id == 0 {
            report.record_failure(card.card_id, 0, "card has no note id".to_string());
            return;
        }

        let (Some(front), Some(back)) = (card.front(), card.back()) else {
            report.record_failure(
                card.card_id,
                card.note_id,
                format!(
                    "note type '{}' has no {}/{} fields",
                    card.model_name, FRONT_FIELD, BACK_FIELD
                ),
            );
            return;
        };

        if options.skip_annotated && is_annotated(dict, front) {
            debug!(card_id = card.card_id, "card already annotated, skipping");
            report.skipped += 1;
            return;
        }

        debug!(card_id = card.card_id, "updating the front of the card");
        let (annotation, matched) = match annotate(dict, front) {
            Ok(annotation) => (annotation, true),
            Err(e) => {
                warn!(card_id = card.card_id, error = %e, "no phonetics for card");
                (String::new(), false)
            }
        };

        let new_front = annotated_front(front, &annotation);
        match self
            .client
            .notes()
            .update_front(card.note_id, &new_front, back)
            .await
        {
            Ok(()) => {
                report.updated += 1;
                if !matched {
                    report.no_match += 1;
                }
            }
            Err(e) => report.record_failure(card.card_id, card.note_id, e.to_string()),
        }
    }
}
