//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Top-level CLI parser for `testenum`.
#[derive(Debug, Parser)]
#[command(name = "testenum", version, about = "Inspect and round-trip TestEnum variants")]
pub struct Cli {
    /// Output format; overrides `TESTENUM_FORMAT`.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Indent JSON output; overrides `TESTENUM_PRETTY`.
    #[arg(long, global = true, overrides_with = "no_pretty")]
    pub pretty: bool,

    /// Print compact JSON output; overrides `TESTENUM_PRETTY`.
    #[arg(long, global = true, overrides_with = "pretty")]
    pub no_pretty: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The pretty-printing choice made on the command line, if any.
    ///
    /// When both `--pretty` and `--no-pretty` are given, the last one wins.
    #[must_use]
    pub fn pretty_override(&self) -> Option<bool> {
        match (self.pretty, self.no_pretty) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every variant in declaration order.
    List,
    /// Show the name and attribute of one variant.
    Show {
        /// Declared variant name, e.g. `TEST_1`.
        name: String,
    },
    /// Print the JSON literal for a variant.
    Encode {
        /// Declared variant name, e.g. `TEST_1`.
        name: String,
    },
    /// Decode a variant from JSON text.
    Decode {
        /// JSON text, e.g. `"TEST_1"`.
        json: String,
    },
}
