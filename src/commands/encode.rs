//! `testenum encode` command.

use crate::codec::to_json_string;
use crate::variant::TestEnum;

/// Execute the `encode` command, returning the JSON literal for `name`.
///
/// # Errors
///
/// Returns an error string if no variant has this name.
pub fn run(name: &str) -> Result<String, String> {
    let variant = TestEnum::lookup(name).map_err(|e| e.to_string())?;
    Ok(to_json_string(variant))
}
