// docsieve/src/cli.rs
//! This file defines the command-line interface (CLI) for the docsieve application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use docsieve_core::{Classification, FilterMode};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "docsieve",
    author = "Obscura Tech",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract work tables from documents and redact sensitive records",
    long_about = "Docsieve separates real work content (task sheets, schedules, registers) from manuals and prose in extracted documents, then classifies, validates and masks every record before it leaves the system.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Policy configuration merged over the built-in defaults.
    #[arg(long = "config", value_name = "NAME_OR_FILE", global = true, help = "Path or name of a policy configuration (YAML) merged over the defaults.")]
    pub config: Option<String>,

    /// Directory receiving record artifacts and reports.
    #[arg(long = "output-dir", value_name = "DIR", global = true, default_value = "output", help = "Directory for written artifacts.")]
    pub output_dir: PathBuf,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `docsieve` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs a content filter over a document dump, then the record policy.
    #[command(about = "Extracts work records from a document dump and applies the record policy.")]
    Extract(ExtractCommand),

    /// Applies the record policy to a JSON array of records.
    #[command(about = "Classifies, validates and redacts a JSON array of records.")]
    Process(ProcessCommand),

    /// Runs a one-shot batch job.
    #[command(about = "Runs a one-shot batch job selected by name or JOB_TYPE.")]
    Run(RunCommand),

    /// Answers a single request through the gated request API.
    #[command(about = "Answers a JSON request through the gated request API.")]
    Call(CallCommand),

    /// Checks whether a requester clearance may read data at a target level.
    #[command(about = "Checks whether a requester clearance may access a classification level.")]
    Authorize {
        /// Classification of the data.
        #[arg(value_name = "TARGET", help = "Classification of the data (public, internal, confidential, restricted).")]
        target: Classification,
        /// Clearance of the requester.
        #[arg(value_name = "REQUESTER", help = "Clearance of the requester.")]
        requester: Classification,
    },
}

/// Arguments for the `extract` command.
#[derive(Parser, Debug)]
pub struct ExtractCommand {
    /// Document dump produced by a document reader (JSON).
    #[arg(long, short = 'i', value_name = "FILE", help = "Document dump (JSON pages with text and tables).")]
    pub input: PathBuf,

    /// Which filter strategy to run.
    #[arg(long = "mode", short = 'm', value_enum, default_value = "strict", help = "Filter strategy: 'strict' (quality-first) or 'permissive' (smart filter).")]
    pub mode: ModeChoice,

    /// Keep the source document even when nothing is extracted.
    #[arg(long = "keep-source", help = "Do not delete a source document that yields no records.")]
    pub keep_source: bool,

    /// Suppress the batch summary.
    #[arg(long = "no-summary", help = "Suppress the batch summary table.")]
    pub no_summary: bool,
}

/// Arguments for the `process` command.
#[derive(Parser, Debug)]
pub struct ProcessCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read records from a file instead of stdin.")]
    pub input: Option<PathBuf>,

    /// Write the sanitized records to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Suppress the batch summary.
    #[arg(long = "no-summary", help = "Suppress the batch summary table.")]
    pub no_summary: bool,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunCommand {
    /// Job name. Falls back to `JOB_TYPE`, then `process_excel`.
    #[arg(long = "job", short = 'j', env = "JOB_TYPE", default_value = "process_excel", help = "Job to run: process_excel, process_pdf, extract_strict or extract_smart.")]
    pub job: String,

    /// Input consumed by the job.
    #[arg(long, short = 'i', value_name = "FILE", help = "Input file for the job.")]
    pub input: Option<PathBuf>,

    /// Classification stamped on `process_pdf` reports.
    #[arg(long = "classification", short = 'c', default_value = "internal", help = "Classification for generated reports.")]
    pub classification: Classification,

    /// Keep the source document even when nothing is extracted.
    #[arg(long = "keep-source", help = "Do not delete a source document that yields no records.")]
    pub keep_source: bool,
}

/// Arguments for the `call` command.
#[derive(Parser, Debug)]
pub struct CallCommand {
    /// Request document (reads from stdin if not provided).
    #[arg(long, short = 'r', value_name = "FILE", help = "Read the JSON request from a file instead of stdin.")]
    pub request: Option<PathBuf>,

    /// Secret the gate accepts.
    #[arg(long = "service-key", env = "SERVICE_API_KEY", hide_env_values = true, help = "Shared secret accepted by the API gate.")]
    pub service_key: Option<String>,
}

/// Filter strategy selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum ModeChoice {
    /// Anchors plus a detected table are required.
    #[value(alias = "quality")]
    Strict,
    /// Tables, or raw text that looks tabular.
    #[value(alias = "smart")]
    Permissive,
}

impl From<ModeChoice> for FilterMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Strict => FilterMode::Strict,
            ModeChoice::Permissive => FilterMode::Permissive,
        }
    }
}
