//! Error types for ankimo-engine.
//!
//! Errors from engine workflows fall into two categories:
//!
//! 1. **Client errors**: Wrapped from the underlying [`ankimo::Error`] type
//! 2. **Workflow errors**: Specific to engine operations (e.g. a malformed
//!    dictionary line)
//!
//! # Example
//!
//! ```no_run
//! use ankimo_engine::{Engine, Error};
//! use ankimo_engine::annotate::AnnotateOptions;
//!
//! # async fn example() {
//! let engine = Engine::new();
//!
//! match engine.annotate().deck("English", "phonetics.tsv", &AnnotateOptions::default()).await {
//!     Ok(report) => println!("Updated {} cards", report.updated),
//!     Err(Error::Format { line, .. }) => eprintln!("bad dictionary line {}", line),
//!     Err(Error::Client(ankimo::Error::ConnectionRefused)) => eprintln!("Is Anki running?"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use std::fmt;

/// Result type for ankimo-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during engine operations.
#[derive(Debug)]
pub enum Error {
    /// An error from the underlying ankimo client.
    Client(ankimo::Error),

    /// An I/O error occurred.
    Io(std::io::Error),

    /// A dictionary line did not hold exactly two tab-separated fields.
    Format {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// No token of a card's front field is in the dictionary.
    NoMatch,

    /// Study statistics could not be read.
    Stats(String),

    /// The notification webhook failed.
    Webhook(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Client(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Client(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Format { line, content } => write!(
                f,
                "invalid dictionary format at line {}: expected `token<TAB>phonetic`, got {:?}",
                line, content
            ),
            Error::NoMatch => write!(f, "the card has no phonetics data"),
            Error::Stats(msg) => write!(f, "stats error: {}", msg),
            Error::Webhook(msg) => write!(f, "webhook error: {}", msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ankimo::Error> for Error {
    fn from(err: ankimo::Error) -> Self {
        Error::Client(err)
    }
}
