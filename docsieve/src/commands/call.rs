// docsieve/src/commands/call.rs
//! `call` command: one request through the gated request API.

use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};
use std::path::Path;

use docsieve_core::{ApiKeyGate, ApiRequest, RequestHandler, SieveConfig};

use crate::cli::CallCommand;
use crate::commands::read_input;

pub fn run_call(cmd: &CallCommand, config: &SieveConfig, output_dir: &Path) -> Result<()> {
    let text = read_input(cmd.request.as_deref())?;
    let request: ApiRequest = serde_json::from_str(&text).context("Request must be a JSON object with a 'route' field")?;
    debug!("Handling '{}' request.", request.route.name());

    let gate = ApiKeyGate::new(cmd.service_key.as_deref().unwrap_or_default());
    let handler = RequestHandler::new(gate, config.clone(), output_dir);
    let response = handler.handle(&request);

    let json = serde_json::to_string_pretty(&response).context("Failed to serialize response")?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "{}", json)?;
    Ok(())
}
