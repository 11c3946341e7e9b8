//! Command-line tool for Anki maintenance via AnkiConnect.
//!
//! Appends phonetic transcriptions to the cards of a deck, reports the
//! day's study statistics, and posts a study summary to a webhook.

use std::path::PathBuf;
use std::time::Duration;

use ankimo_engine::annotate::AnnotateOptions;
use ankimo_engine::notify::{DEFAULT_LEAST_CARDS, Notifier};
use ankimo_engine::stats::{StudyRecord, read_today_stats};
use ankimo_engine::{ClientBuilder, Engine, TodayStats};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Arguments
// ============================================================================

/// Anki maintenance via AnkiConnect.
#[derive(Parser, Debug)]
#[command(name = "ankimo")]
#[command(version, about, long_about = None)]
struct Args {
    /// AnkiConnect URL
    #[arg(short = 'a', long, global = true, default_value = ankimo_engine::DEFAULT_URL, env = "ANKIMO_URL")]
    url: String,

    /// AnkiConnect API key, if one is configured
    #[arg(long, global = true, env = "ANKIMO_API_KEY")]
    api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List deck names
    Decks,

    /// Append phonetic symbols to the front of every card in a deck
    #[command(name = "phonetic_symbols", alias = "phonetics")]
    Phonetics {
        /// Deck to annotate
        #[arg(long)]
        deck: String,

        /// Tab-separated dictionary file (`token<TAB>phonetic` per line)
        #[arg(long)]
        tsv: PathBuf,

        /// Skip cards whose front already ends with their annotation
        #[arg(long, default_value_t = false)]
        skip_annotated: bool,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print today's study record as JSON
    Stats {
        #[command(flatten)]
        source: StatsSource,
    },

    /// Post today's study summary to a webhook
    Notify {
        #[command(flatten)]
        source: StatsSource,

        /// Webhook URL
        #[arg(long, env = "ANKIMO_WEBHOOK")]
        webhook: String,

        /// Card count below which the summary nags
        #[arg(long, default_value_t = DEFAULT_LEAST_CARDS, env = "ANKIMO_LEAST_CARDS")]
        least_cards: i64,
    },
}

impl Command {
    /// The subcommand name, safe to log (the webhook URL carries its key).
    fn name(&self) -> &'static str {
        match self {
            Command::Decks => "decks",
            Command::Phonetics { .. } => "phonetic_symbols",
            Command::Stats { .. } => "stats",
            Command::Notify { .. } => "notify",
        }
    }
}

/// Where today's statistics come from.
#[derive(ClapArgs, Debug)]
struct StatsSource {
    /// Read a `{"cards": N, "time": SECONDS}` line from stdin instead of
    /// asking Anki
    #[arg(short = 's', long, default_value_t = false)]
    stdin: bool,

    /// Do not sync with AnkiWeb before reading statistics
    #[arg(long, default_value_t = false)]
    no_sync: bool,
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Serialize)]
struct Summary<'a> {
    deck: &'a str,
    #[serde(flatten)]
    report: &'a ankimo_engine::annotate::AnnotationReport,
}

async fn today_stats(engine: &Engine, source: &StatsSource) -> ankimo_engine::Result<TodayStats> {
    if source.stdin {
        debug!("reading study record from stdin");
        read_today_stats(std::io::stdin().lock())
    } else {
        engine.stats().today(!source.no_sync).await
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = ClientBuilder::new()
        .url(&args.url)
        .timeout(Duration::from_secs(args.timeout));
    if let Some(key) = &args.api_key {
        builder = builder.api_key(key);
    }
    let engine = Engine::from_client(builder.build()?);

    match args.command {
        Command::Decks => {
            for name in engine.client().decks().names().await? {
                println!("{}", name);
            }
        }
        Command::Phonetics {
            deck,
            tsv,
            skip_annotated,
            json,
        } => {
            let options = AnnotateOptions { skip_annotated };
            let report = engine.annotate().deck(&deck, &tsv, &options).await?;

            if json {
                let summary = Summary {
                    deck: &deck,
                    report: &report,
                };
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{}: {} card(s), {} updated, {} without phonetics, {} skipped, {} failed",
                    deck,
                    report.total,
                    report.updated,
                    report.no_match,
                    report.skipped,
                    report.failed
                );
                for failure in &report.failures {
                    println!("  card {}: {}", failure.card_id, failure.error);
                }
            }
        }
        Command::Stats { source } => {
            let stats = today_stats(&engine, &source).await?;
            let record = StudyRecord::today(stats);
            println!("{}", serde_json::to_string(&record)?);
        }
        Command::Notify {
            source,
            webhook,
            least_cards,
        } => {
            let stats = today_stats(&engine, &source).await?;
            let notifier = Notifier::new(webhook)?.least_cards(least_cards);
            let message = notifier.notify(&stats).await?;
            info!(message = %message, "notification sent");
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    info!(anki_url = %args.url, command = args.command.name(), "starting ankimo");

    if let Err(e) = run(args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
