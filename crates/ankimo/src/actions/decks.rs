//! Deck-related AnkiConnect actions.

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to deck-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

impl<'a> DeckActions<'a> {
    /// Get all deck names, in the order AnkiConnect reports them.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankimo::AnkiClient;
    /// # async fn example() -> ankimo::Result<()> {
    /// let client = AnkiClient::new();
    /// for name in client.decks().names().await? {
    ///     println!("{}", name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("deckNames").await
    }
}
