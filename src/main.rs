//! Sentiment Journal CLI
//!
//! Command-line front-end for the journal backend:
//! - Write an entry and see its sentiment
//! - Run an interactive journaling session
//! - Browse recent entries, search them, and view the weekly profile

use anyhow::Context;
use clap::{Parser, Subcommand};
use sentiment_journal::backend::{
    JournalClient, JournalEntry, JournalRecord, SearchHit, WeeklyProfile,
};
use sentiment_journal::config::{self, Config};
use sentiment_journal::logging;
use sentiment_journal::widget::{run_session, JournalView, JournalWidget, TerminalView};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "journal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Write journal entries and see how they feel")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Journal backend URL (overrides config)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit one entry and show its sentiment
    Write {
        /// Entry text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Interactive session: each line is an entry, :clear resets, :quit exits
    Interactive,

    /// Show recent entries
    Recent {
        /// Number of entries
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Find entries similar to a text
    Search {
        /// Query text
        #[arg(required = true)]
        text: Vec<String>,
        /// Number of hits
        #[arg(short = 'k', long, default_value = "3")]
        top_k: usize,
    },

    /// Show the emotional profile for recent days
    Weekly {
        /// Days to look back
        #[arg(short, long, default_value = "7")]
        days: u32,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.backend_url {
        config.backend.url = url;
    }

    logging::init(&config.logging)?;
    tracing::debug!(
        backend = %config.backend.url,
        "Sentiment journal v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = Arc::new(
        JournalClient::new(config.backend.clone()).context("Failed to build HTTP client")?,
    );
    let json = cli.format == "json";

    match cli.command {
        Commands::Write { text } => {
            // In json mode stdout carries only the result
            let out: Box<dyn Write + Send> = if json {
                Box::new(std::io::stderr())
            } else {
                Box::new(std::io::stdout())
            };
            let mut widget = JournalWidget::new(client, TerminalView::new(out), config.widget);
            widget.view_mut().set_input_text(&text.join(" "));

            match widget.handle_submit().await {
                Ok(sentiment) if json => {
                    println!("{}", serde_json::to_string_pretty(&sentiment)?);
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "Entry not saved");
                    std::process::exit(1);
                }
            }
        }

        Commands::Interactive => {
            println!("Write an entry and press Enter. :clear resets, :quit exits.");

            let view = TerminalView::new(std::io::stdout());
            let mut widget = JournalWidget::new(client, view, config.widget);
            let input = tokio::io::BufReader::new(tokio::io::stdin());

            let summary = run_session(&mut widget, input).await?;
            tracing::info!(
                shown = summary.shown,
                failed = summary.failed,
                rejected = summary.rejected,
                "Session ended"
            );
        }

        Commands::Recent { limit } => {
            let records = client
                .recent_entries(limit)
                .await
                .with_context(|| backend_unreachable(&config.backend.url))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print_records(&records);
            }
        }

        Commands::Search { text, top_k } => {
            let Some(query) = JournalEntry::from_input(&text.join(" ")) else {
                anyhow::bail!("Search text is empty");
            };

            let hits = client
                .semantic_search(&query, top_k)
                .await
                .with_context(|| backend_unreachable(&config.backend.url))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print_hits(&hits);
            }
        }

        Commands::Weekly { days } => {
            let profile = client
                .weekly_profile(days)
                .await
                .with_context(|| backend_unreachable(&config.backend.url))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_profile(&profile);
            }
        }

        Commands::Config { output } => {
            write_default_config(output.as_deref())?;
        }
    }

    Ok(())
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let content = config::generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &content)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }

    Ok(())
}

fn backend_unreachable(url: &str) -> String {
    format!("Cannot reach journal backend at {}", url)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}

fn print_records(records: &[JournalRecord]) {
    if records.is_empty() {
        println!("No entries yet.");
        println!();
        println!("Write your first one with:");
        println!("  journal write \"Today was...\"");
        return;
    }

    println!(
        "{:<17} {:<10} {:<6} {:<12} {}",
        "Date", "Label", "Score", "Intent", "Entry"
    );
    println!("{}", "-".repeat(80));

    for record in records {
        let date = record
            .recorded_at()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<17} {:<10} {:<6} {:<12} {}",
            date,
            record.sentiment.label,
            record.sentiment.score_display(),
            record.intent.as_deref().unwrap_or("-"),
            truncate(record.content.as_deref().unwrap_or(""), 40)
        );
    }
}

fn print_hits(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No matching entries.");
        return;
    }

    println!("{:<10} {:<12} {}", "Distance", "Date", "Entry");
    println!("{}", "-".repeat(70));

    for hit in hits {
        let date = hit.timestamp.get(..10).unwrap_or(&hit.timestamp);
        println!(
            "{:<10.3} {:<12} {}",
            hit.score,
            date,
            truncate(&hit.content, 46)
        );
    }
}

fn print_profile(profile: &WeeklyProfile) {
    match profile {
        WeeklyProfile::Insufficient { message, .. } => {
            println!("{}", message);
        }
        WeeklyProfile::Ready(summary) => {
            let stability = &summary.emotional_stability;

            println!("Period: {}", summary.period.replace('_', " "));
            println!("Entries: {}", summary.entry_count);
            println!();
            println!("Positive: {:.0}%", stability.positive * 100.0);
            println!("Negative: {:.0}%", stability.negative * 100.0);
            println!("Volatility: {}", stability.volatility);
            if !summary.dominant_intents.is_empty() {
                println!("Dominant intents: {}", summary.dominant_intents.join(", "));
            }
            println!();
            println!("Confidence: {:.2}", summary.confidence);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_write_joins_words() {
        let cli = Cli::parse_from(["journal", "write", "I", "had", "a", "great", "day"]);
        match cli.command {
            Commands::Write { text } => assert_eq!(text.join(" "), "I had a great day"),
            _ => panic!("expected write command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "journal",
            "recent",
            "--limit",
            "10",
            "--backend-url",
            "http://localhost:9000",
            "--format",
            "json",
        ]);
        assert_eq!(cli.backend_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.format, "json");
        assert!(matches!(cli.command, Commands::Recent { limit: 10 }));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a fairly long journal entry", 10), "a fairl...");
    }
}
