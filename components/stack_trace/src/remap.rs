//! Source position remapping.
//!
//! Frames are remapped through a [`SourceMapper`] using a two-step
//! handshake: the position query writes the remapped line and column into
//! a caller-owned buffer and reports whether the file name changed too.
//! Only in that case is the file name fetched, so the string cost is paid
//! only when needed.

use core_types::{FrameRecord, Position};
use log::{debug, warn};

const FILE_URL_PREFIX: &str = "file://";

/// Outcome of a position query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MappingResult {
    /// No mapping found; the frame is left as is
    Unchanged = 0,
    /// The buffer holds the remapped line and column
    Position = 1,
    /// The buffer holds the remapped line and column and the file name
    /// changed; fetch it with [`SourceMapper::fetch_remapped_file_name`]
    PositionAndFileName = 2,
}

impl MappingResult {
    /// Decodes the wire code used by mapping services.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unchanged),
            1 => Some(Self::Position),
            2 => Some(Self::PositionAndFileName),
            _ => None,
        }
    }
}

/// A service translating compiled positions into original positions.
pub trait SourceMapper: Send {
    /// Looks up the original position of `line:column` in `file_name`.
    ///
    /// On [`MappingResult::Position`] and
    /// [`MappingResult::PositionAndFileName`], `out[0]` holds the line and
    /// `out[1]` the column.
    fn query_position_mapping(
        &mut self,
        file_name: &str,
        line: u32,
        column: u32,
        out: &mut [u32; 2],
    ) -> MappingResult;

    /// Returns the file name produced by the last query that reported
    /// [`MappingResult::PositionAndFileName`].
    fn fetch_remapped_file_name(&mut self) -> Option<String>;
}

/// Applies a [`SourceMapper`] to frames.
///
/// Owns the reusable two-slot buffer handed to the mapper, so remapping
/// requires exclusive access.
pub struct PositionRemapper {
    mapper: Box<dyn SourceMapper>,
    buf: [u32; 2],
}

impl PositionRemapper {
    /// Creates a remapper backed by `mapper`.
    pub fn new(mapper: Box<dyn SourceMapper>) -> Self {
        Self { mapper, buf: [0; 2] }
    }

    /// Remaps the frame's position, file name and eval origin in place.
    ///
    /// Frames without a file name, line and column keep their position.
    pub fn remap(&mut self, frame: &mut FrameRecord) {
        let remapped = match (frame.file_name.as_deref(), frame.position()) {
            (Some(file_name), Some(position)) => self.apply(file_name, position),
            _ => None,
        };
        if let Some((position, file_name)) = remapped {
            debug!(
                "remapped {}:{}:{} to {}:{}:{}",
                frame.file_name.as_deref().unwrap_or_default(),
                frame.line_number.unwrap_or_default(),
                frame.column_number.unwrap_or_default(),
                file_name.as_deref().or(frame.file_name.as_deref()).unwrap_or_default(),
                position.line,
                position.column,
            );
            frame.set_position(position);
            if let Some(file_name) = file_name {
                frame.file_name = Some(file_name);
            }
        }

        if let Some(origin) = frame.eval_origin.as_deref() {
            if let Some(remapped) = self.remap_eval_origin(origin) {
                frame.eval_origin = Some(remapped);
            }
        }
    }

    /// Queries the mapper, returning the new position and, when it
    /// changed, the new file name.
    fn apply(&mut self, file_name: &str, position: Position) -> Option<(Position, Option<String>)> {
        let result = self.mapper.query_position_mapping(
            file_name,
            position.line,
            position.column,
            &mut self.buf,
        );
        match result {
            MappingResult::Unchanged => None,
            MappingResult::Position => Some((Position::from(self.buf), None)),
            MappingResult::PositionAndFileName => {
                let remapped = self.mapper.fetch_remapped_file_name();
                if remapped.is_none() {
                    warn!("source mapper reported a new file name for {file_name} but returned none");
                }
                Some((Position::from(self.buf), remapped.map(to_file_url)))
            }
        }
    }

    fn remap_eval_origin(&mut self, origin: &str) -> Option<String> {
        let parts = parse_eval_origin(origin)?;
        let (position, file_name) = self.apply(parts.file_name, parts.position)?;
        Some(format!(
            "{}{}:{}:{}{}",
            parts.before,
            file_name.as_deref().unwrap_or(parts.file_name),
            position.line,
            position.column,
            parts.after
        ))
    }
}

/// Prefixes root-relative paths with `file://`.
///
/// Mapping services may return bare paths or URLs; downstream consumers
/// always see URL-shaped names.
pub fn to_file_url(file_name: String) -> String {
    if file_name.starts_with(['/', '\\', '.']) {
        format!("{FILE_URL_PREFIX}{file_name}")
    } else {
        file_name
    }
}

/// An eval origin split around its innermost location.
#[derive(Debug, PartialEq, Eq)]
struct EvalOriginParts<'a> {
    before: &'a str,
    file_name: &'a str,
    position: Position,
    after: &'a str,
}

/// Splits `eval at fn (file:line:col)` style origins. Only the innermost
/// `eval at` of a nested origin carries a location.
fn parse_eval_origin(origin: &str) -> Option<EvalOriginParts<'_>> {
    const EVAL_AT: &str = "eval at ";

    let mut start = origin.rfind(EVAL_AT)? + EVAL_AT.len();
    start += origin[start..].find('(')? + 1;
    if start >= origin.len() {
        return None;
    }

    let rest = &origin[start..];
    let column_colon = rest.rfind(':')?;
    let column_text = &rest[column_colon + 1..];
    let column_len = column_text.find(')')?;
    let column = column_text[..column_len].parse().ok()?;

    let head = &rest[..column_colon];
    let line_colon = head.rfind(':')?;
    let line = head[line_colon + 1..].parse().ok()?;

    let end = start + column_colon + 1 + column_len;
    Some(EvalOriginParts {
        before: &origin[..start],
        file_name: &head[..line_colon],
        position: Position::new(line, column),
        after: &origin[end..],
    })
}
