//! Location text for a single frame.

use crate::error::{StackTraceError, StackTraceResult};
use crate::file_name::FileNameFormatter;
use core_types::FrameRecord;

const ANONYMOUS: &str = "<anonymous>";

/// Renders `file:line:col`, `native`, or an eval/anonymous location.
#[derive(Clone, Copy)]
pub struct LocationFormatter<'a> {
    file_names: FileNameFormatter<'a>,
}

impl<'a> LocationFormatter<'a> {
    /// Creates a location formatter on top of a file name formatter.
    pub fn new(file_names: FileNameFormatter<'a>) -> Self {
        Self { file_names }
    }

    /// Formats the location of `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`StackTraceError::AssertionViolation`] for an eval frame
    /// without a file name and without an eval origin.
    pub fn format(&self, frame: &FrameRecord) -> StackTraceResult<String> {
        if frame.is_native {
            return Ok("native".to_string());
        }

        let mut result = match frame.file_name.as_deref().filter(|f| !f.is_empty()) {
            Some(file_name) => self.file_names.format(file_name),
            None if frame.is_eval => {
                let eval_origin = frame.eval_origin.as_deref().ok_or_else(|| {
                    StackTraceError::AssertionViolation(
                        "eval frame is missing its eval origin".to_string(),
                    )
                })?;
                format!("{eval_origin}, {ANONYMOUS}")
            }
            None => ANONYMOUS.to_string(),
        };

        if let Some(line_number) = frame.line_number {
            result.push_str(&format!(":{line_number}"));
            if let Some(column_number) = frame.column_number {
                result.push_str(&format!(":{column_number}"));
            }
        }
        Ok(result)
    }
}
