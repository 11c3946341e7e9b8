//! Study summary notifications.
//!
//! Posts a one-line summary of the day's study to a webhook as
//! `{"value1": "<message>"}`, the body format IFTTT webhooks expect.

use ankimo::TodayStats;
use serde::Serialize;
use tracing::info;

use crate::{Error, Result};

/// Default minimum number of cards for a day to count as a good one.
pub const DEFAULT_LEAST_CARDS: i64 = 230;

#[derive(Serialize)]
struct WebhookBody<'a> {
    value1: &'a str,
}

/// Sends study summaries to a webhook.
#[derive(Debug, Clone)]
pub struct Notifier {
    http_client: reqwest::Client,
    webhook_url: String,
    least_cards: i64,
}

impl Notifier {
    /// Create a notifier posting to `webhook_url`.
    pub fn new(webhook_url: impl Into<String>) -> Result<Self> {
        let webhook_url = webhook_url.into();
        if webhook_url.trim().is_empty() {
            return Err(Error::Webhook("webhook URL is empty".to_string()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(ankimo::DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| Error::Webhook(e.to_string()))?;

        Ok(Self {
            http_client,
            webhook_url,
            least_cards: DEFAULT_LEAST_CARDS,
        })
    }

    /// Set the card count below which the summary nags.
    pub fn least_cards(mut self, least_cards: i64) -> Self {
        self.least_cards = least_cards;
        self
    }

    /// Compose the summary message for a day's statistics.
    pub fn message(&self, stats: &TodayStats) -> String {
        if stats.cards < self.least_cards {
            format!(
                "Only {} cards studied today, in {} minutes. Time to catch up!",
                stats.cards,
                stats.minutes()
            )
        } else {
            format!(
                "{} cards studied today, in {} minutes.",
                stats.cards,
                stats.minutes()
            )
        }
    }

    /// Post the summary for `stats`, returning the message sent.
    pub async fn notify(&self, stats: &TodayStats) -> Result<String> {
        let message = self.message(stats);
        info!(message = %message, "posting study summary");

        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(&WebhookBody { value1: &message })
            .send()
            .await
            .map_err(|e| Error::Webhook(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Webhook(format!("webhook responded with {}", status)));
        }
        Ok(message)
    }
}
