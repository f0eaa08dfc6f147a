//! Library error types.

use thiserror::Error;

/// Failures when navigating to a named page section.
///
/// The lookup is guarded on purpose: asking for a section that does not
/// exist is reported as a value, never a panic mid-animation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrollError {
    /// No section registered under this name.
    #[error("unknown page section: {0}")]
    UnknownSection(String),

    /// The section widget exists but is not laid out yet, so it has no
    /// position to scroll to.
    #[error("page section not realized yet: {0}")]
    NotRealized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_section() {
        let err = ScrollError::UnknownSection("careers".to_string());
        assert_eq!(err.to_string(), "unknown page section: careers");
    }
}
