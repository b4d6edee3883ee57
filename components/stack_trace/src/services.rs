//! Reference implementations of the external collaborators.
//!
//! Hosts embed their own source map registry and error storage; these
//! implementations back the CLI and the tests.

use crate::assembler::CallSiteSink;
use crate::error::StackTraceResult;
use crate::file_name::FileNameAbbreviator;
use crate::remap::{MappingResult, SourceMapper};
use core_types::{ErrorIdentity, FrameRecord, ObjectHandle, Position};
use log::warn;
use parking_lot::Mutex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

const ABBREV_EDGE_LEN: usize = 20;

/// Abbreviates data URLs to their media type plus the first and last 20
/// bytes of the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlAbbreviator;

impl FileNameAbbreviator for DataUrlAbbreviator {
    fn abbreviate(&self, file_name: &str) -> String {
        abbreviate_data_url(file_name).unwrap_or_else(|| file_name.to_string())
    }
}

fn abbreviate_data_url(file_name: &str) -> Option<String> {
    let url = Url::parse(file_name).ok()?;
    let (head, tail) = url.path().split_once(',')?;
    let start = tail.get(..ABBREV_EDGE_LEN)?;
    let end = tail.get(tail.len().checked_sub(ABBREV_EDGE_LEN)?..)?;
    Some(format!("{}:{},{}......{}", url.scheme(), head, start, end))
}

/// A mapper that never finds a mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSourceMapper;

impl SourceMapper for NoopSourceMapper {
    fn query_position_mapping(
        &mut self,
        _file_name: &str,
        _line: u32,
        _column: u32,
        _out: &mut [u32; 2],
    ) -> MappingResult {
        MappingResult::Unchanged
    }

    fn fetch_remapped_file_name(&mut self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MappedLocation {
    position: Position,
    file_name: Option<String>,
}

/// One row of a JSON source map table.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MappingEntry {
    file_name: String,
    line: u32,
    column: u32,
    original_line: u32,
    original_column: u32,
    #[serde(default)]
    original_file_name: Option<String>,
}

/// An in-memory position table keyed by exact compiled location.
///
/// # Examples
///
/// ```
/// use core_types::Position;
/// use stack_trace::{MappingResult, SourceMapTable, SourceMapper};
///
/// let mut table = SourceMapTable::new();
/// table.insert("file:///out.js", Position::new(1, 2), Position::new(10, 4), None);
///
/// let mut buf = [0; 2];
/// let result = table.query_position_mapping("file:///out.js", 1, 2, &mut buf);
/// assert_eq!(result, MappingResult::Position);
/// assert_eq!(buf, [10, 4]);
/// ```
#[derive(Debug, Default)]
pub struct SourceMapTable {
    entries: HashMap<(String, Position), MappedLocation>,
    pending_file_name: Option<String>,
}

impl SourceMapTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a table from a JSON array of
    /// `{fileName, line, column, originalLine, originalColumn, originalFileName?}`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StackTraceError::InvalidSourceMapTable`] when the
    /// JSON does not have that shape.
    pub fn from_json(json: &str) -> StackTraceResult<Self> {
        let entries: Vec<MappingEntry> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for entry in entries {
            table.insert(
                &entry.file_name,
                Position::new(entry.line, entry.column),
                Position::new(entry.original_line, entry.original_column),
                entry.original_file_name,
            );
        }
        Ok(table)
    }

    /// Maps `generated` in `file_name` to `original`, optionally in another file.
    pub fn insert(
        &mut self,
        file_name: &str,
        generated: Position,
        original: Position,
        original_file_name: Option<String>,
    ) {
        // A mapping back into the same file only moves the position
        let original_file_name = original_file_name.filter(|f| f != file_name);
        self.entries.insert(
            (file_name.to_string(), generated),
            MappedLocation {
                position: original,
                file_name: original_file_name,
            },
        );
    }

    /// Number of mappings in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no mappings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SourceMapper for SourceMapTable {
    fn query_position_mapping(
        &mut self,
        file_name: &str,
        line: u32,
        column: u32,
        out: &mut [u32; 2],
    ) -> MappingResult {
        self.pending_file_name = None;
        let key = (file_name.to_string(), Position::new(line, column));
        let Some(mapped) = self.entries.get(&key) else {
            return MappingResult::Unchanged;
        };
        *out = [mapped.position.line, mapped.position.column];
        match &mapped.file_name {
            Some(file_name) => {
                self.pending_file_name = Some(file_name.clone());
                MappingResult::PositionAndFileName
            }
            None => MappingResult::Position,
        }
    }

    fn fetch_remapped_file_name(&mut self) -> Option<String> {
        self.pending_file_name.take()
    }
}

/// A sink that drops every resolved frame list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardCallSites;

impl CallSiteSink for DiscardCallSites {
    fn persist(&mut self, _identity: &ErrorIdentity, _frames: Vec<FrameRecord>) {}
}

/// Thread-safe storage of resolved frames keyed by error object.
///
/// Share it with the assembler through an `Arc` and read back the frames
/// with [`CallSiteStore::get`].
#[derive(Debug, Default)]
pub struct CallSiteStore {
    frames: Mutex<HashMap<ObjectHandle, Vec<FrameRecord>>>,
}

impl CallSiteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the frames persisted for `error`.
    pub fn get(&self, error: ObjectHandle) -> Option<Vec<FrameRecord>> {
        self.frames.lock().get(&error).cloned()
    }

    /// Removes and returns the frames persisted for `error`.
    pub fn remove(&self, error: ObjectHandle) -> Option<Vec<FrameRecord>> {
        self.frames.lock().remove(&error)
    }

    /// Number of errors with persisted frames.
    pub fn len(&self) -> usize {
        self.frames.lock().len()
    }

    /// Whether nothing has been persisted.
    pub fn is_empty(&self) -> bool {
        self.frames.lock().is_empty()
    }

    fn insert(&self, identity: &ErrorIdentity, frames: Vec<FrameRecord>) {
        match identity.handle {
            Some(handle) => {
                self.frames.lock().insert(handle, frames);
            }
            None => warn!(
                "dropping {} call sites for {:?}: error has no handle",
                frames.len(),
                identity.name
            ),
        }
    }
}

impl CallSiteSink for Arc<CallSiteStore> {
    fn persist(&mut self, identity: &ErrorIdentity, frames: Vec<FrameRecord>) {
        self.insert(identity, frames);
    }
}
