//! JSON export of conversion reports

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize a report (or a list of reports) as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize conversion report")
}
