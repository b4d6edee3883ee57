//! Unit tests for the process-wide hook

use core_types::ErrorIdentity;
use stack_trace::{
    install_prepare_stack_trace, prepare_stack_trace, RawCallSite, StackTraceAssembler,
    StackTraceError,
};

// The global hook can only be installed once per process, so everything
// touching it lives in this single test.
#[test]
fn global_hook_lifecycle() {
    let identity = ErrorIdentity::new(Some("Error".to_string()), Some("late".to_string()));
    assert!(matches!(
        prepare_stack_trace::<RawCallSite>(&identity, &[]),
        Err(StackTraceError::HookNotInstalled)
    ));

    install_prepare_stack_trace(StackTraceAssembler::new()).unwrap();
    assert!(matches!(
        install_prepare_stack_trace(StackTraceAssembler::new()),
        Err(StackTraceError::HookAlreadyInstalled)
    ));

    let site = RawCallSite {
        function_name: Some("tick".to_string()),
        file_name: Some("file:///loop.ts".to_string()),
        line_number: Some(4),
        column_number: Some(1),
        is_toplevel: true,
        ..Default::default()
    };
    assert_eq!(
        prepare_stack_trace(&identity, &[site]).unwrap(),
        "Error: late\n    at tick (file:///loop.ts:4:1)"
    );
}
