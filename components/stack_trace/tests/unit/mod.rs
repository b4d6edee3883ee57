//! Unit tests for stack trace components

mod formatting_test;
mod hook_test;
