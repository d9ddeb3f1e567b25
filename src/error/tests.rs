//! Error type tests
//!
//! Tests for UnistackError enum and its conversions.

#![allow(clippy::expect_used)]

use std::path::Path;

use miette::Diagnostic;

use crate::error::UnistackError;
use crate::error::config::{context_missing, invalid, parse_failed, unknown_value};
use crate::error::fs::{read_failed, write_failed};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

test_error_contains!(
    test_context_missing_display,
    context_missing("certificateArn"),
    "certificateArn"
);
test_error_contains!(
    test_parse_failed_display,
    parse_failed("unistack.yaml", "bad"),
    "unistack.yaml"
);
test_error_contains!(
    test_invalid_display,
    invalid("stack name is empty"),
    "stack name is empty"
);
test_error_contains!(
    test_read_failed_display,
    read_failed(Path::new("/tmp/x"), "denied"),
    "/tmp/x"
);
test_error_contains!(
    test_write_failed_display,
    write_failed(Path::new("out/t.json"), "full"),
    "out/t.json"
);
test_error_contains!(
    test_capacity_display,
    UnistackError::InvalidCapacity { min: 3, desired: 2, max: 1 },
    "min 3",
    "desired 2",
    "max 1",
);

#[test]
fn test_unknown_value_lists_expected() {
    let err = unknown_value("target", "edge", &["static-site", "compute", "all"]);
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(err.to_string().contains("edge"));
    assert!(help.contains("static-site, compute, all"));
}

#[test]
fn test_context_missing_help_mentions_flag() {
    let err = context_missing("domain");
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("-c domain=<value>"));
}

#[test]
fn test_diagnostic_codes() {
    let err = context_missing("env");
    let code = err.code().map(|c| c.to_string()).unwrap_or_default();
    assert_eq!(code, "unistack::context::missing");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: UnistackError = io.into();
    assert!(matches!(err, UnistackError::IoError { .. }));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").expect_err("must fail");
    let err: UnistackError = json_err.into();
    assert!(matches!(err, UnistackError::RenderFailed { .. }));
}
