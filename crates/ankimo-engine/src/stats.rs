//! Daily study statistics.
//!
//! Statistics come either from AnkiConnect (optionally syncing first, so
//! reviews done on other devices are included) or from a JSON line such as
//! `{"cards": 250, "time": 1830}` piped in by another tool.

use std::io::BufRead;

use ankimo::{AnkiClient, TodayStats};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::{Error, Result};

/// One day's study statistics, keyed by local date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyRecord {
    /// The day, formatted `YYYY-MM-DD`.
    pub date: String,
    /// Number of cards studied.
    pub cards: i64,
    /// Study time in seconds.
    pub time: i64,
}

impl StudyRecord {
    /// Create a record for a given day.
    pub fn new(date: NaiveDate, stats: TodayStats) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            cards: stats.cards,
            time: stats.time,
        }
    }

    /// Create a record for the current local day.
    pub fn today(stats: TodayStats) -> Self {
        Self::new(chrono::Local::now().date_naive(), stats)
    }
}

/// Read today's statistics from the first line of `reader`.
pub fn read_today_stats<R: BufRead>(mut reader: R) -> Result<TodayStats> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 || line.trim().is_empty() {
        return Err(Error::Stats("no statistics on input".to_string()));
    }
    serde_json::from_str(line.trim()).map_err(|e| Error::Stats(e.to_string()))
}

/// Statistics workflow engine.
#[derive(Debug)]
pub struct StatsEngine<'a> {
    client: &'a AnkiClient,
}

impl<'a> StatsEngine<'a> {
    pub(crate) fn new(client: &'a AnkiClient) -> Self {
        Self { client }
    }

    /// Fetch today's statistics from Anki, syncing with AnkiWeb first when
    /// `sync` is set.
    pub async fn today(&self, sync: bool) -> Result<TodayStats> {
        if sync {
            info!("syncing with AnkiWeb");
            self.client.misc().sync().await?;
        }

        let stats = self.client.statistics().today().await?;
        info!(cards = stats.cards, time = stats.time, "got a study record from Anki");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_today_stats() {
        let stats = read_today_stats("{\"cards\": 12, \"time\": 600}\n".as_bytes()).unwrap();
        assert_eq!(stats, TodayStats { cards: 12, time: 600 });
    }

    #[test]
    fn test_read_today_stats_only_first_line() {
        let input = "{\"cards\": 1, \"time\": 60}\n{\"cards\": 2, \"time\": 120}\n";
        let stats = read_today_stats(input.as_bytes()).unwrap();
        assert_eq!(stats.cards, 1);
    }

    #[test]
    fn test_read_today_stats_empty() {
        assert!(matches!(read_today_stats("".as_bytes()), Err(Error::Stats(_))));
        assert!(matches!(read_today_stats("\n".as_bytes()), Err(Error::Stats(_))));
    }

    #[test]
    fn test_read_today_stats_malformed() {
        assert!(matches!(
            read_today_stats("{\"cards\": \"many\"}".as_bytes()),
            Err(Error::Stats(_))
        ));
    }

    #[test]
    fn test_study_record_date_key() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let record = StudyRecord::new(date, TodayStats { cards: 5, time: 300 });
        assert_eq!(record.date, "2024-03-09");
        assert_eq!(record.cards, 5);
        assert_eq!(record.time, 300);
    }
}
