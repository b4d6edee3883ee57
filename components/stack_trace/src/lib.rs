//! Stack trace formatting and source position remapping.
//!
//! This crate turns a raised error and its captured call sites into the
//! V8-style stack text shown to users, remapping compiled positions to
//! original source positions along the way, and hands the resolved frames
//! to a sink for programmatic access.
//!
//! # Overview
//!
//! - [`StackTraceAssembler`] - Builds the stack text and resolved frames
//! - [`FrameDescriptionFormatter`] - Renders one frame line
//! - [`LocationFormatter`] - Renders `file:line:col` locations
//! - [`FileNameFormatter`] - Abbreviates long data URLs
//! - [`PositionRemapper`] - Applies a [`SourceMapper`] to frames
//! - [`install_prepare_stack_trace`] / [`prepare_stack_trace`] - The
//!   process-wide hook
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorIdentity, Position};
//! use stack_trace::{RawCallSite, SourceMapTable, StackTraceAssembler};
//!
//! let mut table = SourceMapTable::new();
//! table.insert("file:///out.js", Position::new(3, 7), Position::new(12, 1), Some("/src/app.ts".to_string()));
//!
//! let mut assembler = StackTraceAssembler::new().with_source_mapper(table);
//! let site = RawCallSite {
//!     function_name: Some("main".to_string()),
//!     file_name: Some("file:///out.js".to_string()),
//!     line_number: Some(3),
//!     column_number: Some(7),
//!     is_toplevel: true,
//!     ..Default::default()
//! };
//!
//! let text = assembler
//!     .format_stack_trace(&ErrorIdentity::new(None, Some("failed".to_string())), &[site])
//!     .unwrap();
//! assert_eq!(text, "Error: failed\n    at main (file:///src/app.ts:12:1)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod assembler;
pub mod call_site;
pub mod error;
pub mod file_name;
pub mod frame;
pub mod hook;
pub mod location;
pub mod remap;
pub mod services;

pub use assembler::{CallSiteSink, PreparedStackTrace, StackTraceAssembler};
pub use call_site::{record_from_call_site, CallSite, RawCallSite};
pub use error::{StackTraceError, StackTraceResult};
pub use file_name::{FileNameAbbreviator, FileNameFormatter, DATA_URL_ABBREV_THRESHOLD};
pub use frame::FrameDescriptionFormatter;
pub use hook::{install_prepare_stack_trace, prepare_stack_trace, StackTraceHook};
pub use location::LocationFormatter;
pub use remap::{to_file_url, MappingResult, PositionRemapper, SourceMapper};
pub use services::{
    CallSiteStore, DataUrlAbbreviator, DiscardCallSites, NoopSourceMapper, SourceMapTable,
};
