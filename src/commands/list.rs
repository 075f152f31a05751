//! `testenum list` command.

use crate::codec::{describe, VariantRecord};
use crate::commands::render;
use crate::config::Config;
use crate::variant::TestEnum;

/// Execute the `list` command, rendering every variant record in declaration order.
///
/// # Errors
///
/// Returns an error string if serialization fails.
pub fn run(config: Config) -> Result<String, String> {
    let records: Vec<VariantRecord> = TestEnum::iter().map(describe).collect();
    render(&records, config)
}
