//! Runner orchestration for stack trace formatting
//!
//! The Runner wires together the pieces a host would normally provide:
//! - Error snapshot loading (identity plus raw call sites)
//! - An optional source map table for position remapping
//! - A call-site store receiving the resolved frames
//! - Text or JSON rendering of the result

use crate::error::CliResult;
use core_types::{ErrorIdentity, FrameRecord, ObjectHandle};
use log::debug;
use serde::{Deserialize, Serialize};
use stack_trace::{CallSiteStore, RawCallSite, SourceMapTable, StackTraceAssembler};
use std::fs;
use std::sync::Arc;

/// Handle under which the snapshot's error is persisted
const SNAPSHOT_ERROR: ObjectHandle = ObjectHandle::new(1);

/// A captured error: its identity and the call sites recorded when it was
/// raised.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorSnapshot {
    /// Name and message of the error
    #[serde(default)]
    pub error: ErrorIdentity,
    /// Raw call sites, innermost first
    #[serde(default)]
    pub frames: Vec<RawCallSite>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    stack: &'a str,
    call_site_evals: &'a [FrameRecord],
}

/// Formats error snapshots
#[derive(Debug, Default)]
pub struct Runner {
    /// Whether to render JSON instead of the stack text
    json: bool,
    /// Path of the source map table to remap with
    source_map: Option<String>,
}

impl Runner {
    /// Create a new runner printing plain stack text
    ///
    /// # Example
    /// ```
    /// use trace_cli::Runner;
    ///
    /// let runner = Runner::new();
    /// assert!(!runner.is_json_enabled());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the stack and resolved call sites as JSON
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Remap positions with the source map table at `path`
    pub fn with_source_map(mut self, path: Option<String>) -> Self {
        self.source_map = path;
        self
    }

    /// Check if JSON output is enabled
    pub fn is_json_enabled(&self) -> bool {
        self.json
    }

    /// Format the snapshot stored in a file
    ///
    /// # Errors
    /// Returns `CliError` if a file cannot be read or formatting fails
    pub fn execute_file(&self, path: &str) -> CliResult<String> {
        let snapshot = fs::read_to_string(path)?;
        self.execute_string(&snapshot)
    }

    /// Format a JSON snapshot
    ///
    /// # Errors
    /// Returns `CliError` if the snapshot or source map table is malformed,
    /// or if the stack trace engine rejects a frame
    ///
    /// # Example
    /// ```
    /// use trace_cli::Runner;
    ///
    /// let runner = Runner::new();
    /// let output = runner
    ///     .execute_string(r#"{"error":{"name":"TypeError","message":"boom"},"frames":[]}"#)
    ///     .unwrap();
    /// assert_eq!(output, "TypeError: boom");
    /// ```
    pub fn execute_string(&self, snapshot: &str) -> CliResult<String> {
        let snapshot: ErrorSnapshot = serde_json::from_str(snapshot)?;

        let store = Arc::new(CallSiteStore::new());
        let mut assembler = StackTraceAssembler::new().with_sink(Arc::clone(&store));
        if let Some(path) = &self.source_map {
            let table = SourceMapTable::from_json(&fs::read_to_string(path)?)?;
            debug!("loaded {} mappings from {path}", table.len());
            assembler = assembler.with_source_mapper(table);
        }

        debug!("formatting {} call sites", snapshot.frames.len());
        let identity = snapshot.error.with_handle(SNAPSHOT_ERROR);
        let stack = assembler.format_stack_trace(&identity, &snapshot.frames)?;
        if !self.json {
            return Ok(stack);
        }

        let frames = store.remove(SNAPSHOT_ERROR).unwrap_or_default();
        let report = Report {
            stack: &stack,
            call_site_evals: &frames,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
