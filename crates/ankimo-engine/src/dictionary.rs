//! Phonetic dictionary loading.
//!
//! The dictionary is a tab-separated text file with one entry per line:
//!
//! ```text
//! cat	kæt
//! sat	sæt
//! ```
//!
//! Loading is strict: a single malformed line rejects the whole file.
//! Empty lines are ignored. When a token appears more than once, the last
//! entry wins.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::{Error, Result};

/// An immutable token to phonetic-transcription mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneticDictionary {
    entries: HashMap<String, String>,
}

impl PhoneticDictionary {
    /// Load a dictionary from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Format`]
    /// on the first line that is not `token<TAB>phonetic`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dict = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), entries = dict.len(), "loaded phonetic dictionary");
        Ok(dict)
    }

    /// Parse a dictionary from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.is_empty() {
                continue;
            }

            let (token, phonetic) = parse_line(line).ok_or_else(|| Error::Format {
                line: idx + 1,
                content: line.to_string(),
            })?;
            entries.insert(token.to_string(), phonetic.to_string());
        }

        Ok(Self { entries })
    }

    /// Look up the transcription of a token. Matching is exact.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for PhoneticDictionary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PhoneticDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split('\t');
    let token = fields.next()?;
    let phonetic = fields.next()?;
    if fields.next().is_some() || token.is_empty() || phonetic.is_empty() {
        return None;
    }
    Some((token, phonetic))
}
