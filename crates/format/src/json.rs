//! JSON pretty-printing.

use crate::{Error, Result};
use serde_json::Value;

/// Pretty-print raw JSON bytes with two-space indentation per nesting level.
///
/// Object key order is preserved. The output carries no trailing newline;
/// presentation is the caller's concern.
///
/// # Errors
///
/// Returns [`Error::InvalidJson`] if the input is not syntactically valid
/// JSON.
pub fn format_json(input: &[u8]) -> Result<Vec<u8>> {
    let value: Value = serde_json::from_slice(input).map_err(Error::InvalidJson)?;
    serde_json::to_vec_pretty(&value).map_err(Error::Serialize)
}
