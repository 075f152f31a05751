//! Environment-driven output configuration.
//!
//! Values come from the process environment, after an optional `.env` file
//! in the working directory has been loaded. Command-line flags take
//! precedence over anything set here.

use clap::ValueEnum;

/// Environment variable selecting the output format.
pub const FORMAT_VAR: &str = "TESTENUM_FORMAT";
/// Environment variable enabling pretty-printed output.
pub const PRETTY_VAR: &str = "TESTENUM_PRETTY";

/// Serialization used for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON output.
    #[default]
    Json,
    /// YAML output.
    Yaml,
}

/// Output settings resolved from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Serialization used for records.
    pub format: OutputFormat,
    /// Whether JSON output is indented.
    pub pretty: bool,
}

impl Config {
    /// Loads `.env` if present, then reads settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error string when `.env` exists but cannot be read or
    /// parsed, or when a variable holds an unsupported value.
    pub fn from_env() -> Result<Self, String> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(format!("Failed to load .env: {err}")),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns an error string when a variable holds an unsupported value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(FORMAT_VAR) {
            config.format = OutputFormat::from_str(raw.trim(), true).map_err(|_| {
                format!("Unsupported {FORMAT_VAR} value '{raw}' (expected json or yaml)")
            })?;
        }
        if let Some(raw) = lookup(PRETTY_VAR) {
            config.pretty = parse_bool(raw.trim()).ok_or_else(|| {
                format!("Unsupported {PRETTY_VAR} value '{raw}' (expected true, false, 1 or 0)")
            })?;
        }
        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(
            config,
            Config {
                format: OutputFormat::Json,
                pretty: false,
            }
        );
    }

    #[test]
    fn reads_format_and_pretty() {
        let config = config_from(&[(FORMAT_VAR, "YAML"), (PRETTY_VAR, "1")]).unwrap();
        assert_eq!(config.format, OutputFormat::Yaml);
        assert!(config.pretty);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = config_from(&[(FORMAT_VAR, "xml")]).unwrap_err();
        assert!(err.contains(FORMAT_VAR));
    }

    #[test]
    fn rejects_unparseable_pretty() {
        assert!(config_from(&[(PRETTY_VAR, "sometimes")]).is_err());
    }

    #[test]
    fn pretty_accepts_only_true_false_one_zero() {
        assert!(config_from(&[(PRETTY_VAR, "TRUE")]).unwrap().pretty);
        assert!(!config_from(&[(PRETTY_VAR, "0")]).unwrap().pretty);
        for raw in ["yes", "no", "on", ""] {
            let err = config_from(&[(PRETTY_VAR, raw)]).unwrap_err();
            assert!(err.contains(PRETTY_VAR), "{raw} should be rejected");
        }
    }
}
