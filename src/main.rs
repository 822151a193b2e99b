// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `quarter`: report quarter-turn factorizations of boundary words.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use quarter_turn::search::{AnchorRoles, ArcRole, SearchConfig};
use quarter_turn::{has_quarter_turn_factorization_with, FactorizationReport, Word};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "quarter", version, about)]
struct Cli {
    /// Boundary words over u, d, l, r (case-insensitive, at least 4 letters)
    #[arg(required = true)]
    words: Vec<String>,

    /// Stop at the first witness of each word
    #[arg(long)]
    first: bool,

    /// Refuse words longer than this
    #[arg(long, value_name = "N")]
    max_length: Option<usize>,

    /// Arc roles allowed to anchor the search (default: all)
    #[arg(long = "anchor", value_enum, value_name = "ROLE")]
    anchors: Vec<Role>,

    /// Print search counters
    #[arg(long)]
    stats: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// More logging on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Role {
    Palindrome,
    FirstDrome,
    SecondDrome,
}

impl From<Role> for ArcRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Palindrome => ArcRole::Palindrome,
            Role::FirstDrome => ArcRole::FirstDrome,
            Role::SecondDrome => ArcRole::SecondDrome,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        let anchors = if self.anchors.is_empty() {
            AnchorRoles::all()
        } else {
            self.anchors.iter().copied().map(ArcRole::from).collect()
        };
        SearchConfig::default()
            .with_anchors(anchors)
            .stop_at_first(self.first)
            .with_max_length(self.max_length)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_text(word: &Word, report: &FactorizationReport, stats: bool) {
    if report.found() {
        println!("{}: {} witness(es)", word, report.witnesses().len());
        for witness in report.witnesses() {
            println!("  {}", witness);
        }
    } else {
        println!("{}: no quarter-turn factorization", word);
    }
    if stats {
        for (name, value) in report.statistics().counters() {
            println!("  {:<20} {}", name, value);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    let mut results = Vec::new();
    for text in &cli.words {
        let word: Word = text
            .parse()
            .with_context(|| format!("invalid boundary word {:?}", text))?;
        let report = has_quarter_turn_factorization_with(&word, &config)
            .with_context(|| format!("cannot search {}", word))?;
        info!(word = %word, found = report.found(), "searched");

        match cli.format {
            Format::Text => print_text(&word, &report, cli.stats),
            Format::Json => {
                let mut entry = json!({
                    "word": word.to_string(),
                    "found": report.found(),
                    "witnesses": report.witnesses(),
                });
                if cli.stats {
                    entry["statistics"] = serde_json::to_value(report.statistics())?;
                }
                results.push(entry);
            }
        }
    }

    if cli.format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }
    Ok(())
}
