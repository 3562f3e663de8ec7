//! Error types shared across the workspace.

use thiserror::Error;

/// Errors raised by the shared validation and rendering code.
#[derive(Error, Debug)]
pub enum Error {
    #[error("submission text is empty")]
    EmptyText,

    #[error("highlight matcher error: {0}")]
    Matcher(String),
}

/// Result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_text() {
        let error = Error::EmptyText;
        let display = format!("{}", error);
        assert_eq!(display, "submission text is empty");
    }

    #[test]
    fn test_error_display_matcher() {
        let error = Error::Matcher("regex parse error".to_string());
        let display = format!("{}", error);
        assert!(display.contains("highlight matcher error"));
        assert!(display.contains("regex parse error"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Matcher("too large".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Matcher"));
        assert!(debug.contains("too large"));
    }
}
