//! `testenum show` command.

use crate::codec::describe;
use crate::commands::render;
use crate::config::Config;
use crate::variant::TestEnum;

/// Execute the `show` command for the variant called `name`.
///
/// # Errors
///
/// Returns an error string if no variant has this name.
pub fn run(name: &str, config: Config) -> Result<String, String> {
    let variant = TestEnum::lookup(name).map_err(|e| e.to_string())?;
    render(&describe(variant), config)
}
