//! `testenum decode` command.

use crate::codec::{describe, from_json_str};
use crate::commands::render;
use crate::config::Config;

/// Execute the `decode` command on JSON text.
///
/// # Errors
///
/// Returns an error string prefixed with the decode message key when the
/// text does not decode to a variant.
pub fn run(json: &str, config: Config) -> Result<String, String> {
    let variant =
        from_json_str(json).map_err(|e| format!("{}: {e}", e.message_key()))?;
    render(&describe(variant), config)
}
