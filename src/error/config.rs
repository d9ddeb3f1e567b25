//! Configuration and context errors

use super::UnistackError;

/// Creates a missing context value error
pub fn context_missing(key: impl Into<String>) -> UnistackError {
    UnistackError::ContextMissing { key: key.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> UnistackError {
    UnistackError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> UnistackError {
    UnistackError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an unknown enumerated value error
pub fn unknown_value(
    kind: impl Into<String>,
    value: impl Into<String>,
    expected: &[&str],
) -> UnistackError {
    UnistackError::UnknownValue {
        kind: kind.into(),
        value: value.into(),
        expected: expected.join(", "),
    }
}
