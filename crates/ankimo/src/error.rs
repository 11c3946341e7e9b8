//! Error types for the ankimo crate.
//!
//! Failures fall into two families:
//!
//! - **Transport**: AnkiConnect could not be reached or answered with a
//!   non-success HTTP status ([`Error::Http`], [`Error::ConnectionRefused`],
//!   [`Error::Status`]).
//! - **Decode**: the response body was not the envelope we expected
//!   ([`Error::Json`], [`Error::EmptyResponse`]).
//!
//! AnkiConnect itself may also reject an action, reported as
//! [`Error::AnkiConnect`] with its message.
//!
//! # Example
//!
//! ```no_run
//! use ankimo::{AnkiClient, Error};
//!
//! # async fn example() {
//! let client = AnkiClient::new();
//!
//! match client.decks().names().await {
//!     Ok(decks) => println!("Found {} decks", decks.len()),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("Please start Anki with AnkiConnect installed");
//!     }
//!     Err(e) if e.is_decode() => eprintln!("Unexpected response: {}", e),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Covers timeouts and any other failure while sending the request
    /// or reading the body. For refused connections, see
    /// [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection refused - Anki is likely not running.
    #[error("Could not connect to Anki. Is Anki running with AnkiConnect installed?")]
    ConnectionRefused,

    /// AnkiConnect answered with a non-success HTTP status.
    #[error("AnkiConnect responded with HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// AnkiConnect returned an error message.
    ///
    /// Common messages include "deck was not found" and
    /// "cannot create note because it is a duplicate".
    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),

    /// Response was empty (no result or error).
    #[error("AnkiConnect returned empty response")]
    EmptyResponse,

    /// Permission denied by AnkiConnect.
    ///
    /// An API key is required but missing or wrong, or the request
    /// needs approval in the Anki UI.
    #[error("Permission denied. Request permission first or check API key.")]
    PermissionDenied,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error means AnkiConnect could not be reached or
    /// answered at the HTTP level.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::ConnectionRefused | Error::Status(_)
        )
    }

    /// Whether this error means the response body was malformed.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Json(_) | Error::EmptyResponse)
    }
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
