//! Stack trace assembly.
//!
//! The assembler builds the header line from the error identity, snapshots
//! and remaps every call site, renders one `"    at "` line per frame and,
//! once the whole text is built, hands the resolved frames to the
//! [`CallSiteSink`].

use crate::call_site::{record_from_call_site, CallSite};
use crate::error::StackTraceResult;
use crate::file_name::{FileNameAbbreviator, FileNameFormatter};
use crate::frame::FrameDescriptionFormatter;
use crate::location::LocationFormatter;
use crate::remap::{PositionRemapper, SourceMapper};
use crate::services::{DataUrlAbbreviator, DiscardCallSites, NoopSourceMapper};
use core_types::{ErrorIdentity, FrameRecord};
use log::trace;

const FRAME_SEPARATOR: &str = "\n    at ";

/// Receives the resolved frames of each formatted error.
pub trait CallSiteSink: Send {
    /// Attaches `frames` to the error described by `identity`.
    fn persist(&mut self, identity: &ErrorIdentity, frames: Vec<FrameRecord>);
}

/// Output of [`StackTraceAssembler::prepare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedStackTrace {
    /// The full stack text, header line first
    pub text: String,
    /// The resolved frames, in call-site order
    pub frames: Vec<FrameRecord>,
}

/// Turns an error identity and its call sites into stack text.
///
/// # Examples
///
/// ```
/// use core_types::ErrorIdentity;
/// use stack_trace::{RawCallSite, StackTraceAssembler};
///
/// let mut assembler = StackTraceAssembler::new();
/// let identity = ErrorIdentity::new(Some("TypeError".to_string()), Some("boom".to_string()));
/// let site = RawCallSite {
///     function_name: Some("run".to_string()),
///     file_name: Some("file:///x.ts".to_string()),
///     line_number: Some(1),
///     column_number: Some(2),
///     ..Default::default()
/// };
///
/// let text = assembler.format_stack_trace(&identity, &[site]).unwrap();
/// assert_eq!(text, "TypeError: boom\n    at run (file:///x.ts:1:2)");
/// ```
pub struct StackTraceAssembler {
    remapper: PositionRemapper,
    abbreviator: Box<dyn FileNameAbbreviator>,
    sink: Box<dyn CallSiteSink>,
}

impl StackTraceAssembler {
    /// Creates an assembler with no source maps, the data URL abbreviator
    /// and a sink that discards resolved frames.
    pub fn new() -> Self {
        Self {
            remapper: PositionRemapper::new(Box::new(NoopSourceMapper)),
            abbreviator: Box::new(DataUrlAbbreviator),
            sink: Box::new(DiscardCallSites),
        }
    }

    /// Remap positions through `mapper`
    pub fn with_source_mapper(mut self, mapper: impl SourceMapper + 'static) -> Self {
        self.remapper = PositionRemapper::new(Box::new(mapper));
        self
    }

    /// Abbreviate long data URLs with `abbreviator`
    pub fn with_abbreviator(mut self, abbreviator: impl FileNameAbbreviator + 'static) -> Self {
        self.abbreviator = Box::new(abbreviator);
        self
    }

    /// Persist resolved frames to `sink`
    pub fn with_sink(mut self, sink: impl CallSiteSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Formats the stack of `identity` and persists the resolved frames.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::StackTraceError::AssertionViolation`] when an
    /// eval frame carries no eval origin. Nothing is persisted in that case.
    pub fn prepare<S: CallSite>(
        &mut self,
        identity: &ErrorIdentity,
        call_sites: &[S],
    ) -> StackTraceResult<PreparedStackTrace> {
        let formatter = FrameDescriptionFormatter::new(LocationFormatter::new(
            FileNameFormatter::new(&*self.abbreviator),
        ));

        let mut text = identity.header();
        let mut frames = Vec::with_capacity(call_sites.len());
        for site in call_sites {
            let mut frame = record_from_call_site(site);
            self.remapper.remap(&mut frame);
            let line = formatter.format(&frame)?;
            trace!("at {line}");
            text.push_str(FRAME_SEPARATOR);
            text.push_str(&line);
            frames.push(frame);
        }

        self.sink.persist(identity, frames.clone());
        Ok(PreparedStackTrace { text, frames })
    }

    /// Like [`StackTraceAssembler::prepare`], returning only the text.
    pub fn format_stack_trace<S: CallSite>(
        &mut self,
        identity: &ErrorIdentity,
        call_sites: &[S],
    ) -> StackTraceResult<String> {
        self.prepare(identity, call_sites).map(|prepared| prepared.text)
    }
}

impl Default for StackTraceAssembler {
    fn default() -> Self {
        Self::new()
    }
}
