//! Source positions for frame locations.

use serde::{Deserialize, Serialize};

/// A line and column pair within a script.
///
/// Both values are 1-based, as reported by the engine for call sites.
///
/// # Examples
///
/// ```
/// use core_types::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.line, 10);
/// assert_eq!(pos.column, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number
    pub line: u32,
    /// Column number
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl From<[u32; 2]> for Position {
    fn from(slots: [u32; 2]) -> Self {
        Self::new(slots[0], slots[1])
    }
}
