//! Conversion of engine call sites into frame records.
//!
//! The engine exposes each captured frame through the V8 call-site
//! accessors. Numbers arrive as signed engine integers; anything that does
//! not fit a `u32` (including negative sentinels) is treated as absent, and
//! a line or column whose partner is absent is dropped as well.

use core_types::{FrameRecord, ObjectHandle};
use serde::Deserialize;

/// Accessors of a raw engine call site.
pub trait CallSite {
    /// The receiver of the call
    fn get_this(&self) -> Option<ObjectHandle>;
    /// Constructor name of the receiver
    fn get_type_name(&self) -> Option<String>;
    /// The function being executed
    fn get_function(&self) -> Option<ObjectHandle>;
    /// Name of the function being executed
    fn get_function_name(&self) -> Option<String>;
    /// Property name the function was invoked through
    fn get_method_name(&self) -> Option<String>;
    /// Script name or URL
    fn get_file_name(&self) -> Option<String>;
    /// 1-based line number
    fn get_line_number(&self) -> Option<i64>;
    /// 1-based column number
    fn get_column_number(&self) -> Option<i64>;
    /// Description of the `eval` call that produced the code
    fn get_eval_origin(&self) -> Option<String>;
    /// Whether the receiver is the global object or absent
    fn is_toplevel(&self) -> bool;
    /// Whether the code came from `eval`
    fn is_eval(&self) -> bool;
    /// Whether the frame is native engine code
    fn is_native(&self) -> bool;
    /// Whether the function was invoked with `new`
    fn is_constructor(&self) -> bool;
    /// Whether the frame is an async continuation
    fn is_async(&self) -> bool;
    /// Whether the frame is a `Promise.all` element
    fn is_promise_all(&self) -> bool;
    /// Element index for `Promise.all` frames
    fn get_promise_index(&self) -> Option<i64>;
}

fn small_int(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

/// Line and column travel together: a frame never keeps one without the other.
fn line_and_column(line: Option<i64>, column: Option<i64>) -> (Option<u32>, Option<u32>) {
    match (small_int(line), small_int(column)) {
        (Some(line), Some(column)) => (Some(line), Some(column)),
        _ => (None, None),
    }
}

/// Takes a snapshot of `site` as a [`FrameRecord`].
pub fn record_from_call_site<S: CallSite + ?Sized>(site: &S) -> FrameRecord {
    let (line_number, column_number) =
        line_and_column(site.get_line_number(), site.get_column_number());
    FrameRecord {
        receiver: site.get_this(),
        type_name: site.get_type_name(),
        function: site.get_function(),
        function_name: site.get_function_name(),
        method_name: site.get_method_name(),
        file_name: site.get_file_name().filter(|f| !f.is_empty()),
        line_number,
        column_number,
        eval_origin: site.get_eval_origin(),
        is_toplevel: site.is_toplevel(),
        is_eval: site.is_eval(),
        is_native: site.is_native(),
        is_constructor: site.is_constructor(),
        is_async: site.is_async(),
        is_promise_all: site.is_promise_all(),
        promise_index: small_int(site.get_promise_index()),
    }
}

/// A call site captured outside the engine, e.g. read from a JSON snapshot.
///
/// # Examples
///
/// ```
/// use stack_trace::{record_from_call_site, RawCallSite};
///
/// let site: RawCallSite = serde_json::from_str(
///     r#"{"functionName":"run","fileName":"file:///x.ts","lineNumber":1,"columnNumber":2}"#,
/// ).unwrap();
/// let frame = record_from_call_site(&site);
/// assert_eq!(frame.function_name.as_deref(), Some("run"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCallSite {
    /// Engine id of the receiver
    pub this: Option<u64>,
    /// Constructor name of the receiver
    pub type_name: Option<String>,
    /// Engine id of the function
    pub function: Option<u64>,
    /// Name of the function
    pub function_name: Option<String>,
    /// Property name the function was invoked through
    pub method_name: Option<String>,
    /// Script name or URL
    pub file_name: Option<String>,
    /// Line number as reported by the engine
    pub line_number: Option<i64>,
    /// Column number as reported by the engine
    pub column_number: Option<i64>,
    /// Eval origin description
    pub eval_origin: Option<String>,
    /// Toplevel flag
    #[serde(rename = "isToplevel")]
    pub is_toplevel: bool,
    /// Eval flag
    pub is_eval: bool,
    /// Native flag
    pub is_native: bool,
    /// Constructor flag
    pub is_constructor: bool,
    /// Async flag
    pub is_async: bool,
    /// `Promise.all` flag
    pub is_promise_all: bool,
    /// `Promise.all` element index
    pub promise_index: Option<i64>,
}

impl CallSite for RawCallSite {
    fn get_this(&self) -> Option<ObjectHandle> {
        self.this.map(ObjectHandle::new)
    }

    fn get_type_name(&self) -> Option<String> {
        self.type_name.clone()
    }

    fn get_function(&self) -> Option<ObjectHandle> {
        self.function.map(ObjectHandle::new)
    }

    fn get_function_name(&self) -> Option<String> {
        self.function_name.clone()
    }

    fn get_method_name(&self) -> Option<String> {
        self.method_name.clone()
    }

    fn get_file_name(&self) -> Option<String> {
        self.file_name.clone()
    }

    fn get_line_number(&self) -> Option<i64> {
        self.line_number
    }

    fn get_column_number(&self) -> Option<i64> {
        self.column_number
    }

    fn get_eval_origin(&self) -> Option<String> {
        self.eval_origin.clone()
    }

    fn is_toplevel(&self) -> bool {
        self.is_toplevel
    }

    fn is_eval(&self) -> bool {
        self.is_eval
    }

    fn is_native(&self) -> bool {
        self.is_native
    }

    fn is_constructor(&self) -> bool {
        self.is_constructor
    }

    fn is_async(&self) -> bool {
        self.is_async
    }

    fn is_promise_all(&self) -> bool {
        self.is_promise_all
    }

    fn get_promise_index(&self) -> Option<i64> {
        self.promise_index
    }
}
