//! Core data types shared by the stack trace engine.
//!
//! This crate provides the records that flow through stack trace
//! formatting: the error being described, the frames captured when it was
//! raised, and the opaque handles that point back into the engine heap.
//!
//! # Overview
//!
//! - [`ErrorIdentity`] - Name and message of a raised error
//! - [`FrameRecord`] - One captured execution frame
//! - [`Position`] - Line and column pair
//! - [`ObjectHandle`] - Opaque reference to an engine object
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorIdentity, FrameRecord};
//!
//! let identity = ErrorIdentity::new(Some("TypeError".to_string()), None);
//! assert_eq!(identity.header(), "TypeError");
//!
//! let frame = FrameRecord::from_location(Some("file:///a.ts".to_string()), Some(1), Some(2));
//! assert_eq!(frame.line_number, Some(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod frame;
mod handle;
mod source;

pub use error::ErrorIdentity;
pub use frame::FrameRecord;
pub use handle::ObjectHandle;
pub use source::Position;
