//! Identity of a raised error.
//!
//! The formatter only ever reads the `name` and `message` of an error, plus
//! an optional handle used by sinks to attach the resolved frames back to
//! the error object.

use crate::ObjectHandle;
use serde::{Deserialize, Serialize};

const DEFAULT_ERROR_NAME: &str = "Error";

fn default_name() -> String {
    DEFAULT_ERROR_NAME.to_string()
}

/// The name and message of an error whose stack is being formatted.
///
/// # Examples
///
/// ```
/// use core_types::ErrorIdentity;
///
/// let identity = ErrorIdentity::new(Some("RangeError".to_string()), Some("too big".to_string()));
/// assert_eq!(identity.header(), "RangeError: too big");
///
/// let identity = ErrorIdentity::new(None, None);
/// assert_eq!(identity.name, "Error");
/// assert_eq!(identity.message, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorIdentity {
    /// Error name, `"Error"` when the error object has none
    #[serde(default = "default_name")]
    pub name: String,
    /// Error message, empty when the error object has none
    #[serde(default)]
    pub message: String,
    /// Handle to the error object in the engine heap
    #[serde(skip)]
    pub handle: Option<ObjectHandle>,
}

impl ErrorIdentity {
    /// Creates an identity, substituting the defaults for absent fields.
    pub fn new(name: Option<String>, message: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(default_name),
            message: message.unwrap_or_default(),
            handle: None,
        }
    }

    /// Attaches the handle of the error object.
    pub fn with_handle(mut self, handle: ObjectHandle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Returns the first line of the stack text.
    ///
    /// `"Name: message"` when both are non-empty, whichever one is non-empty
    /// otherwise, and an empty string when neither is.
    pub fn header(&self) -> String {
        match (self.name.is_empty(), self.message.is_empty()) {
            (false, false) => format!("{}: {}", self.name, self.message),
            (false, true) => self.name.clone(),
            (true, false) => self.message.clone(),
            (true, true) => String::new(),
        }
    }
}

impl Default for ErrorIdentity {
    fn default() -> Self {
        Self::new(None, None)
    }
}
