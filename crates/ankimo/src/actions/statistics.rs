//! Statistics-related AnkiConnect actions.

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::TodayStats;

/// Provides access to statistics-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::statistics()`].
#[derive(Debug)]
pub struct StatisticsActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

impl<'a> StatisticsActions<'a> {
    /// Get the number of cards studied and the time spent today.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankimo::AnkiClient;
    /// # async fn example() -> ankimo::Result<()> {
    /// let client = AnkiClient::new();
    /// let stats = client.statistics().today().await?;
    /// println!("{} cards in {} minutes", stats.cards, stats.minutes());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn today(&self) -> Result<TodayStats> {
        self.client.invoke_without_params("todayStats").await
    }
}
