//! Command dispatch and handlers.

pub mod decode;
pub mod encode;
pub mod list;
pub mod show;

use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::{Config, OutputFormat};

/// Dispatch a parsed command line to its handler.
///
/// Flags on the command line override the environment configuration.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let mut config = Config::from_env()?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(pretty) = cli.pretty_override() {
        config.pretty = pretty;
    }
    debug!(command = ?cli.command, ?config, "dispatching");

    let output = dispatch_with_config(&cli.command, config)?;
    println!("{output}");
    Ok(())
}

/// Run a command and return the text it prints.
fn dispatch_with_config(command: &Command, config: Config) -> Result<String, String> {
    match command {
        Command::List => list::run(config),
        Command::Show { name } => show::run(name, config),
        Command::Encode { name } => encode::run(name),
        Command::Decode { json } => decode::run(json, config),
    }
}

/// Serialize a value in the configured output format.
pub(crate) fn render<T: Serialize>(value: &T, config: Config) -> Result<String, String> {
    let rendered = match config.format {
        OutputFormat::Json if config.pretty => {
            serde_json::to_string_pretty(value).map_err(|e| e.to_string())
        }
        OutputFormat::Json => serde_json::to_string(value).map_err(|e| e.to_string()),
        // serde_yaml terminates documents with a newline; println adds its own.
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| e.to_string()),
    };
    rendered.map_err(|e| format!("Failed to serialize output: {e}"))
}
