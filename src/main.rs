//! cosmoprompt CLI: compile catalog objects into image-generation prompts.
//!
//! Thin wrapper over the library. Results go to stdout as JSON, logs to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use cosmoprompt_lib::config::{self, CompilerConfig};
use cosmoprompt_lib::models::{load_catalog, ObjectRecord};
use cosmoprompt_lib::pipeline::spectral::parse_spectral_type;
use cosmoprompt_lib::pipeline::{BatchOrchestrator, BatchReport, LogSummary, PromptCompiler};
use cosmoprompt_lib::{init_tracing, CompileError};

/// Compile astronomical catalog objects into photorealistic image prompts.
#[derive(Parser, Debug)]
#[command(name = "cosmoprompt")]
#[command(version = config::APP_VERSION)]
#[command(about = "Compile astronomical catalog objects into photorealistic image prompts.")]
#[command(after_help = "Examples:
  cosmoprompt compile betelgeuse.json
  cosmoprompt batch catalog.json --log-summary
  cosmoprompt classify M2Iab
")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile one catalog object (JSON file) into a prompt.
    Compile {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Compile a JSON array of catalog objects and report statistics.
    Batch {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Append the generation log summary to the report.
        #[arg(long = "log-summary")]
        log_summary: bool,
    },
    /// Parse a spectral classification code.
    Classify {
        #[arg(value_name = "CODE")]
        code: String,
    },
}

#[derive(Serialize)]
struct BatchOutput {
    #[serde(flatten)]
    report: BatchReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_summary: Option<LogSummary>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CompileError> {
    let config = CompilerConfig::from_env()?;

    match command {
        Command::Compile { file } => {
            let record = single_record(&file)?;
            let compiled = PromptCompiler::new(config).compile_and_log(&record)?;
            print_json(&compiled)
        }
        Command::Batch { file, log_summary } => {
            let objects = load_catalog(&file)?;
            let orchestrator = BatchOrchestrator::new(PromptCompiler::new(config));
            let report = orchestrator.run_catalog(objects);
            let log_summary = match (log_summary, orchestrator.compiler().log()) {
                (true, Some(log)) => Some(log.summary()?),
                _ => None,
            };
            print_json(&BatchOutput {
                report,
                log_summary,
            })
        }
        Command::Classify { code } => {
            let parsed = parse_spectral_type(&code);
            print_json(&serde_json::json!({
                "code": code,
                "parsed": parsed,
                "canonical": parsed.as_ref().map(ToString::to_string),
                "temperature_range_k": parsed.as_ref().map(|p| p.class.temperature_range_k()),
            }))
        }
    }
}

fn single_record(path: &Path) -> Result<ObjectRecord, CompileError> {
    let mut objects = load_catalog(path)?;
    if objects.len() != 1 {
        return Err(CompileError::InvalidRecord(format!(
            "expected exactly one object in {}, found {}",
            path.display(),
            objects.len()
        )));
    }
    ObjectRecord::try_from(objects.remove(0))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CompileError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
