// docsieve/src/main.rs
//! Docsieve entry point.
//!
//! Loads `.env`, initializes logging and the theme, resolves the policy
//! configuration and dispatches the chosen subcommand. Unknown job types exit
//! with status 2, every other failure with status 1.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::process::ExitCode;

use docsieve::cli::{Cli, Commands};
use docsieve::commands::{self, call, extract, process, run};
use docsieve::logger;
use docsieve::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use docsieve_core::{authorize_access, load_config_by_name, DocsieveError, SieveConfig};

const EXIT_FAILURE: u8 = 1;
const EXIT_UNKNOWN_JOB: u8 = 2;

fn load_config(name_or_path: Option<&str>) -> Result<SieveConfig> {
    match name_or_path {
        Some(name) => load_config_by_name(name).with_context(|| format!("Failed to load configuration '{}'", name)),
        None => SieveConfig::load_default(),
    }
}

fn dispatch(args: &Cli, theme: &ThemeMap) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match &args.command {
        Commands::Extract(cmd) => extract::run_extract(cmd, &config, &args.output_dir, args.quiet, theme),
        Commands::Process(cmd) => process::run_process(cmd, &config, args.quiet, theme),
        Commands::Run(cmd) => run::run_batch_job(cmd, &config, &args.output_dir, args.quiet, theme),
        Commands::Call(cmd) => call::run_call(cmd, &config, &args.output_dir),
        Commands::Authorize { target, requester } => {
            let verdict = if authorize_access(*target, *requester) { "granted" } else { "denied" };
            println!("{}", verdict);
            Ok(())
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DocsieveError>() {
        Some(DocsieveError::UnknownJobType(_)) => EXIT_UNKNOWN_JOB,
        _ => EXIT_FAILURE,
    }
}

fn main() -> ExitCode {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let args = Cli::parse();

    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));
    debug!("Environment file loaded: {}", dotenv_loaded);

    let theme = match build_theme_map(args.theme.as_deref()) {
        Ok(theme) => theme,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            commands::warn_msg(format!("{:#}; using the default theme.", e), &fallback);
            fallback
        }
    };

    match dispatch(&args, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::error_msg(format!("{:#}", e), &theme);
            ExitCode::from(exit_code_for(&e))
        }
    }
}
