//! Captured execution frames.
//!
//! A [`FrameRecord`] is built fresh for every formatting pass from the
//! engine's raw call site, updated once when its position is remapped, and
//! then handed to the call-site sink.

use crate::{ObjectHandle, Position};
use serde::{Deserialize, Serialize};

/// One frame of a raised error's execution history.
///
/// The serialized form uses the camelCase keys of V8 call sites, including
/// V8's `isToplevel` spelling. The receiver and function handles are never
/// serialized.
///
/// # Examples
///
/// ```
/// use core_types::FrameRecord;
///
/// let frame = FrameRecord {
///     function_name: Some("run".to_string()),
///     file_name: Some("file:///x.ts".to_string()),
///     line_number: Some(1),
///     column_number: Some(2),
///     ..Default::default()
/// };
///
/// assert!(frame.position().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameRecord {
    /// The `this` value of the activation
    #[serde(skip)]
    pub receiver: Option<ObjectHandle>,
    /// Constructor name of the receiver
    pub type_name: Option<String>,
    /// The function being executed
    #[serde(skip)]
    pub function: Option<ObjectHandle>,
    /// Name of the function being executed
    pub function_name: Option<String>,
    /// Property name the function was invoked through
    pub method_name: Option<String>,
    /// Script name or URL
    pub file_name: Option<String>,
    /// 1-based line number
    pub line_number: Option<u32>,
    /// 1-based column number
    pub column_number: Option<u32>,
    /// Description of the `eval` call that produced the code
    pub eval_origin: Option<String>,
    /// Whether the receiver is the global object or absent
    #[serde(rename = "isToplevel")]
    pub is_toplevel: bool,
    /// Whether the code came from `eval`
    pub is_eval: bool,
    /// Whether the frame is native engine code
    pub is_native: bool,
    /// Whether the function was invoked with `new`
    pub is_constructor: bool,
    /// Whether the frame is an async continuation
    pub is_async: bool,
    /// Whether the frame is a `Promise.all` element
    pub is_promise_all: bool,
    /// Element index for `Promise.all` frames
    pub promise_index: Option<u32>,
}

impl FrameRecord {
    /// Creates a frame that only carries a location.
    pub fn from_location(
        file_name: Option<String>,
        line_number: Option<u32>,
        column_number: Option<u32>,
    ) -> Self {
        Self {
            file_name,
            line_number,
            column_number,
            ..Default::default()
        }
    }

    /// Returns the line and column when both are known.
    pub fn position(&self) -> Option<Position> {
        Some(Position::new(self.line_number?, self.column_number?))
    }

    /// Overwrites the line and column.
    pub fn set_position(&mut self, position: Position) {
        self.line_number = Some(position.line);
        self.column_number = Some(position.column);
    }
}
