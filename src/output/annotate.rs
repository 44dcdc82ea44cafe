//! CI log annotations
//!
//! Downstream CI tooling scans console output for these prefixed lines, so
//! their exact shape is part of the reporting contract.

/// Warning annotation, e.g. emitted when a rerun recovered all failures
pub fn warning(msg: impl AsRef<str>) -> String {
    format!("::warning:: {}", msg.as_ref())
}

/// Error annotation, e.g. emitted on session setup/release exceptions
pub fn error(msg: impl AsRef<str>) -> String {
    format!("::error::{}", msg.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_marker() {
        assert_eq!(
            warning("Number of failed tests: 2. All tests passed in rerun!"),
            "::warning:: Number of failed tests: 2. All tests passed in rerun!"
        );
    }

    #[test]
    fn test_error_marker() {
        assert_eq!(
            error("Exception: session not created"),
            "::error::Exception: session not created"
        );
    }
}
