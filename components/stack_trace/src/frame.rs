//! Human-readable frame descriptions.
//!
//! Follows the V8 call-site grammar: async and `Promise.all` prefixes,
//! method calls qualified by receiver type, constructor calls, and plain
//! calls. The location is appended in parentheses except where the frame
//! is described by its location alone.

use crate::error::StackTraceResult;
use crate::location::LocationFormatter;
use core_types::FrameRecord;

const ANONYMOUS: &str = "<anonymous>";

/// Renders the text that follows `"    at "` in a stack trace line.
#[derive(Clone, Copy)]
pub struct FrameDescriptionFormatter<'a> {
    locations: LocationFormatter<'a>,
}

impl<'a> FrameDescriptionFormatter<'a> {
    /// Creates a frame formatter on top of a location formatter.
    pub fn new(locations: LocationFormatter<'a>) -> Self {
        Self { locations }
    }

    /// Formats `frame`.
    ///
    /// # Errors
    ///
    /// Propagates the location formatter's assertion failure for eval
    /// frames without an origin.
    pub fn format(&self, frame: &FrameRecord) -> StackTraceResult<String> {
        let mut result = String::new();
        if frame.is_async {
            result.push_str("async ");
        }
        if frame.is_promise_all {
            result.push_str(&format!(
                "Promise.all (index {})",
                frame.promise_index.unwrap_or_default()
            ));
            return Ok(result);
        }

        let is_method_call = !(frame.is_toplevel || frame.is_constructor);
        if is_method_call {
            result.push_str(&format_method_call(frame));
        } else if frame.is_constructor {
            result.push_str("new ");
            result.push_str(frame.function_name.as_deref().unwrap_or(ANONYMOUS));
        } else if let Some(function_name) = &frame.function_name {
            result.push_str(function_name);
        } else {
            result.push_str(&self.locations.format(frame)?);
            return Ok(result);
        }

        result.push_str(&format!(" ({})", self.locations.format(frame)?));
        Ok(result)
    }
}

fn format_method_call(frame: &FrameRecord) -> String {
    let mut method = String::new();
    let type_name = frame.type_name.as_deref();
    match frame.function_name.as_deref() {
        Some(function_name) => {
            if let Some(type_name) = type_name {
                // "Foo.bar" already carries its receiver type
                if !function_name.starts_with(type_name) {
                    method.push_str(type_name);
                    method.push('.');
                }
            }
            method.push_str(function_name);
            if let Some(method_name) = frame.method_name.as_deref() {
                if !function_name.ends_with(method_name) {
                    method.push_str(&format!(" [as {method_name}]"));
                }
            }
        }
        None => {
            if let Some(type_name) = type_name {
                method.push_str(type_name);
                method.push('.');
            }
            method.push_str(frame.method_name.as_deref().unwrap_or(ANONYMOUS));
        }
    }
    method
}
