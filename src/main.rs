//! Feedback marker CLI application.
//!
//! Command-line front end for the feedback_linker library: detect markers,
//! annotate or linkify them, and build links for single identifiers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use feedback_linker::{count_annotated, detect, is_valid_id, Config, RewriteMode};

/// Feedback Link Replacer
///
/// Finds feedback:<id> markers in text, annotates them as
/// "feedback: mevlana: <id>" or turns them into links.
#[derive(Parser)]
#[command(name = "feedback-linker")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML config file (link_base, mode)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every marker with its byte span and identifier
    Detect {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Rewrite every marker in the input
    Rewrite {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output text file (defaults to stdout)
        #[arg(short, long, value_name = "FILE", conflicts_with = "check")]
        output: Option<PathBuf>,

        /// Rewrite mode: annotate or linkify
        #[arg(short, long, value_name = "MODE")]
        mode: Option<RewriteMode>,

        /// Only report whether anything would be rewritten (exit 1 if so)
        #[arg(long)]
        check: bool,
    },

    /// Print the link for an identifier
    Link {
        /// Digit-only identifier
        id: String,
    },

    /// Check whether an identifier is well-formed (exit 1 if not)
    Validate {
        /// Candidate identifier
        id: String,
    },

    /// Summarize pending and already-annotated markers
    Scan {
        /// Input text file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

/// Command handler holding the resolved configuration.
struct MarkerHandler {
    config: Config,
    verbose: bool,
}

impl MarkerHandler {
    /// Creates a handler, loading `config_path` when given.
    fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file does not exist: {}", path.display());
                }
                Config::load_from_path(path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?
                    .unwrap_or_default()
            }
            None => Config::default(),
        };
        Ok(Self { config, verbose })
    }

    fn detect(&self, input: Option<&Path>) -> Result<ExitCode> {
        let text = read_input(input)?;
        for m in detect(&text) {
            println!(
                "{}..{}\t{}\t{}",
                m.start,
                m.end,
                m.numeric_id,
                m.original_text.escape_debug()
            );
        }
        Ok(ExitCode::SUCCESS)
    }

    fn rewrite(
        &self,
        input: Option<&Path>,
        output: Option<&Path>,
        mode: Option<RewriteMode>,
        check: bool,
    ) -> Result<ExitCode> {
        let text = read_input(input)?;
        let service = self
            .config
            .rewrite_service(mode)
            .with_context(|| "Invalid link configuration")?;

        if check {
            let pending = detect(&text).len();
            if service.has_replaceable(&text) {
                eprintln!("⚠ {} marker(s) would be rewritten", pending);
                return Ok(ExitCode::FAILURE);
            }
            eprintln!("✓ Nothing to rewrite");
            return Ok(ExitCode::SUCCESS);
        }

        if self.verbose {
            eprintln!("Mode: {}", service.strategy_name());
        }

        let result = service.rewrite(&text);

        if let Some(output_path) = output {
            std::fs::write(output_path, &result.text)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
        } else {
            print!("{}", result.text);
        }

        if result.has_rewrites() {
            eprintln!("✓ Rewrote {} marker(s)", result.count);
        } else {
            eprintln!("⚠ No markers found to rewrite");
        }

        Ok(ExitCode::SUCCESS)
    }

    fn link(&self, id: &str) -> Result<ExitCode> {
        let link = self
            .config
            .link_builder()
            .with_context(|| "Invalid link configuration")?
            .build(id)?;
        println!("{}", link);
        Ok(ExitCode::SUCCESS)
    }

    fn validate(&self, id: &str) -> Result<ExitCode> {
        if is_valid_id(id) {
            println!("valid");
            Ok(ExitCode::SUCCESS)
        } else {
            println!("invalid");
            Ok(ExitCode::FAILURE)
        }
    }

    fn scan(&self, input: Option<&Path>) -> Result<ExitCode> {
        let text = read_input(input)?;
        println!("pending: {}", detect(&text).len());
        println!("annotated: {}", count_annotated(&text));
        Ok(ExitCode::SUCCESS)
    }
}

/// Reads the whole input, from `path` or stdin.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file does not exist: {}", path.display());
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .with_context(|| "Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "feedback_linker=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let handler = MarkerHandler::new(cli.config.as_deref(), cli.verbose)?;

    match &cli.command {
        Commands::Detect { input } => handler.detect(input.as_deref()),
        Commands::Rewrite {
            input,
            output,
            mode,
            check,
        } => handler.rewrite(input.as_deref(), output.as_deref(), *mode, *check),
        Commands::Link { id } => handler.link(id),
        Commands::Validate { id } => handler.validate(id),
        Commands::Scan { input } => handler.scan(input.as_deref()),
    }
}
