//! Output formatting for command results.

use serde_json::Value;
use std::io::Write;

use crate::utils::DeepClawError;

/// Write a JSON value pretty-printed with two-space indentation, then a newline
pub fn write_json<W: Write>(writer: &mut W, value: &Value) -> Result<(), DeepClawError> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(DeepClawError::EncodeError)?;
    writeln!(writer)?;
    Ok(())
}
