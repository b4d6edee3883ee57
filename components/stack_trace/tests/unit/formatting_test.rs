//! Unit tests for the file name, location and frame formatters

use core_types::FrameRecord;
use stack_trace::{
    DataUrlAbbreviator, FileNameAbbreviator, FileNameFormatter, FrameDescriptionFormatter,
    LocationFormatter, StackTraceError, DATA_URL_ABBREV_THRESHOLD,
};

struct Recording;

impl FileNameAbbreviator for Recording {
    fn abbreviate(&self, file_name: &str) -> String {
        format!("abbrev({})", file_name.len())
    }
}

fn describe(frame: &FrameRecord) -> String {
    let locations = LocationFormatter::new(FileNameFormatter::new(&DataUrlAbbreviator));
    FrameDescriptionFormatter::new(locations).format(frame).unwrap()
}

fn at(file_name: &str, line: u32, column: u32) -> FrameRecord {
    FrameRecord::from_location(Some(file_name.to_string()), Some(line), Some(column))
}

// ============================================================================
// FileNameFormatter
// ============================================================================

#[test]
fn data_url_over_threshold_is_delegated() {
    let formatter = FileNameFormatter::new(&Recording);
    let name = format!("data:,{}", "x".repeat(DATA_URL_ABBREV_THRESHOLD));
    assert_eq!(formatter.format(&name), format!("abbrev({})", name.len()));
}

#[test]
fn regular_file_name_is_unchanged() {
    let formatter = FileNameFormatter::new(&Recording);
    assert_eq!(formatter.format("file:///foo/bar.ts"), "file:///foo/bar.ts");
}

#[test]
fn data_url_abbreviation_in_location() {
    let payload = "b".repeat(200);
    let frame = at(&format!("data:application/javascript,{payload}"), 1, 1);
    let locations = LocationFormatter::new(FileNameFormatter::new(&DataUrlAbbreviator));
    assert_eq!(
        locations.format(&frame).unwrap(),
        format!(
            "data:application/javascript,{}......{}:1:1",
            "b".repeat(20),
            "b".repeat(20)
        )
    );
}

// ============================================================================
// LocationFormatter
// ============================================================================

#[test]
fn native_frames_ignore_other_fields() {
    let frames = [
        FrameRecord {
            is_native: true,
            ..Default::default()
        },
        FrameRecord {
            is_native: true,
            is_eval: true,
            ..at("file:///a.ts", 3, 4)
        },
        FrameRecord {
            is_native: true,
            function_name: Some("push".to_string()),
            ..at("data:,x", 1, 1)
        },
    ];
    let locations = LocationFormatter::new(FileNameFormatter::new(&DataUrlAbbreviator));
    for frame in &frames {
        assert_eq!(locations.format(frame).unwrap(), "native");
    }
}

#[test]
fn anonymous_without_file_name() {
    let locations = LocationFormatter::new(FileNameFormatter::new(&DataUrlAbbreviator));
    let frame = FrameRecord::from_location(None, Some(7), Some(8));
    assert_eq!(locations.format(&frame).unwrap(), "<anonymous>:7:8");
}

#[test]
fn eval_without_origin_is_assertion_violation() {
    let locations = LocationFormatter::new(FileNameFormatter::new(&DataUrlAbbreviator));
    let frame = FrameRecord {
        is_eval: true,
        ..FrameRecord::from_location(None, Some(1), Some(1))
    };
    let err = locations.format(&frame).unwrap_err();
    assert!(matches!(err, StackTraceError::AssertionViolation(_)));
    assert!(err.to_string().starts_with("assertion failed"));
}

// ============================================================================
// FrameDescriptionFormatter
// ============================================================================

#[test]
fn promise_all_without_async() {
    let frame = FrameRecord {
        is_promise_all: true,
        promise_index: Some(0),
        ..Default::default()
    };
    assert_eq!(describe(&frame), "Promise.all (index 0)");
}

#[test]
fn qualified_function_name_not_duplicated() {
    let frame = FrameRecord {
        type_name: Some("Foo".to_string()),
        function_name: Some("Foo.bar".to_string()),
        method_name: Some("bar".to_string()),
        ..at("file:///a.ts", 1, 1)
    };
    assert_eq!(describe(&frame), "Foo.bar (file:///a.ts:1:1)");
}

#[test]
fn method_alias_shown_when_names_differ() {
    let frame = FrameRecord {
        type_name: Some("Object".to_string()),
        function_name: Some("handler".to_string()),
        method_name: Some("onload".to_string()),
        ..at("file:///a.ts", 2, 3)
    };
    assert_eq!(
        describe(&frame),
        "Object.handler [as onload] (file:///a.ts:2:3)"
    );
}

#[test]
fn anonymous_method_without_type() {
    let frame = at("file:///a.ts", 2, 3);
    assert_eq!(describe(&frame), "<anonymous> (file:///a.ts:2:3)");
}

#[test]
fn constructor_takes_precedence_over_method() {
    let frame = FrameRecord {
        is_constructor: true,
        type_name: Some("Widget".to_string()),
        function_name: Some("Widget".to_string()),
        method_name: Some("other".to_string()),
        ..at("file:///w.ts", 9, 1)
    };
    assert_eq!(describe(&frame), "new Widget (file:///w.ts:9:1)");
}

#[test]
fn async_constructor() {
    let frame = FrameRecord {
        is_async: true,
        is_constructor: true,
        ..at("file:///w.ts", 9, 1)
    };
    assert_eq!(describe(&frame), "async new <anonymous> (file:///w.ts:9:1)");
}

#[test]
fn toplevel_eval_frame_is_location_only() {
    let frame = FrameRecord {
        is_toplevel: true,
        is_eval: true,
        eval_origin: Some("eval at <anonymous> (file:///m.ts:1:1)".to_string()),
        ..FrameRecord::from_location(None, Some(1), Some(5))
    };
    assert_eq!(
        describe(&frame),
        "eval at <anonymous> (file:///m.ts:1:1), <anonymous>:1:5"
    );
}
