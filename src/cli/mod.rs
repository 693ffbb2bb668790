//! Command-line front end that runs the suggestion engine over JSON exports.

pub mod output;
pub mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::config::{ConfigManager, EngineConfig};
use crate::core::services::{MappingService, ReviewService, SortKey, SuggestionFilter};
use crate::core::SuggestionEngine;
use crate::domain::{ConfidenceBucket, SuggestionType};
use crate::errors::{MappingError, MappingResult};
use crate::io::SuggestionInput;

#[derive(Debug, Parser)]
#[command(name = "finup_mapping_cli", version, about = "Suggest chart-of-accounts mappings for imported accounts")]
pub struct Cli {
    /// Directory holding config.json (defaults to the user config dir).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print suggestions for every unmapped imported account.
    Suggest {
        input: PathBuf,
        #[arg(long, value_enum)]
        bucket: Option<BucketArg>,
        #[arg(long = "type", value_enum)]
        kind: Option<TypeArg>,
        #[arg(long, value_enum, default_value_t = SortArg::Confidence)]
        sort: SortArg,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Accept suggestions and append the resulting mappings to the document.
    Apply {
        input: PathBuf,
        /// Suggestion ids to accept.
        #[arg(long, num_args = 1..)]
        accept: Vec<String>,
        /// Accept every suggestion at or above this confidence.
        #[arg(long)]
        min_confidence: Option<u8>,
        #[arg(long)]
        user: Option<String>,
        /// Write here instead of overwriting the input.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show the effective engine configuration.
    Config {
        /// Write the default configuration file.
        #[arg(long)]
        init: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BucketArg {
    High,
    Medium,
    Low,
}

impl From<BucketArg> for ConfidenceBucket {
    fn from(value: BucketArg) -> Self {
        match value {
            BucketArg::High => ConfidenceBucket::High,
            BucketArg::Medium => ConfidenceBucket::Medium,
            BucketArg::Low => ConfidenceBucket::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypeArg {
    Exact,
    Similar,
    Pattern,
    Rule,
}

impl From<TypeArg> for SuggestionType {
    fn from(value: TypeArg) -> Self {
        match value {
            TypeArg::Exact => SuggestionType::Exact,
            TypeArg::Similar => SuggestionType::Similar,
            TypeArg::Pattern => SuggestionType::Pattern,
            TypeArg::Rule => SuggestionType::Rule,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Confidence,
    Type,
    Name,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Confidence => SortKey::Confidence,
            SortArg::Type => SortKey::Type,
            SortArg::Name => SortKey::ImportedName,
        }
    }
}

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> MappingResult<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> MappingResult<()> {
    let manager = match cli.config_dir {
        Some(dir) => ConfigManager::with_base_dir(dir),
        None => ConfigManager::new(),
    };
    let config = manager.load()?;
    debug!(path = %manager.path().display(), "loaded engine config");

    match cli.command {
        Command::Suggest {
            input,
            bucket,
            kind,
            sort,
            json,
        } => {
            let engine = SuggestionEngine::new(config.settings()?);
            let document = SuggestionInput::load(&input)?;
            let suggestions = document.suggest(&engine);
            let filter = SuggestionFilter {
                bucket: bucket.map(Into::into),
                suggestion_type: kind.map(Into::into),
            };
            let view = ReviewService::view(&suggestions, &filter, sort.into());
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }
            if view.is_empty() {
                output::warning("No suggestions for the current filters.");
                return Ok(());
            }
            output::section("Suggestions");
            println!("{}", table::suggestion_table(view.iter().copied()).render());
            let stats = ReviewService::stats(&suggestions);
            output::info(format!(
                "{} suggestion(s) for {} account(s): {} high, {} medium, {} low",
                stats.total, stats.covered_accounts, stats.high, stats.medium, stats.low
            ));
            Ok(())
        }
        Command::Apply {
            input,
            accept,
            min_confidence,
            user,
            output: destination,
        } => {
            let engine = SuggestionEngine::new(config.settings()?);
            let mut document = SuggestionInput::load(&input)?;
            let suggestions = document.suggest(&engine);
            let accepted = match (accept.is_empty(), min_confidence) {
                (false, _) => accept,
                (true, Some(threshold)) => MappingService::minimum_confidence(&suggestions, threshold),
                (true, None) => {
                    return Err(MappingError::InvalidInput(
                        "pass --accept <id>... or --min-confidence <n>".into(),
                    ))
                }
            };
            let mapped_by = resolve_user(user, &config);
            let before = document.existing_mappings.len();
            document.existing_mappings = MappingService::bulk_apply(
                &document.existing_mappings,
                &suggestions,
                &accepted,
                &mapped_by,
            )?;
            let applied = document.existing_mappings.len() - before;
            let target = destination.unwrap_or(input);
            document.save(&target)?;
            output::success(format!(
                "Applied {applied} mapping(s) to {}",
                target.display()
            ));
            Ok(())
        }
        Command::Config { init } => {
            if init {
                manager.save(&EngineConfig::default())?;
                output::success(format!("Wrote default config to {}", manager.path().display()));
                return Ok(());
            }
            output::info(format!("Config path: {}", manager.path().display()));
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn resolve_user(explicit: Option<String>, config: &EngineConfig) -> String {
    explicit
        .or_else(|| config.default_user.clone())
        .or_else(|| std::env::var("USER").ok())
        .filter(|user| !user.trim().is_empty())
        .unwrap_or_else(|| "cli".to_string())
}
