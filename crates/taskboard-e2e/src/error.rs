// Error types for the suite.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure conditions surfaced by the page-object layer.
///
/// Low-level primitives never swallow these; each page object decides per
/// operation whether absence is an error or a valid negative result.
#[derive(Debug, Error)]
pub enum Error {
    /// No alternative in a selector group matched a live element.
    ///
    /// Carries every selector that was tried, in the order it was tried.
    #[error("no selector for '{group}' matched; tried {tried:?}")]
    ElementNotFound { group: String, tried: Vec<String> },

    /// A bounded wait elapsed before the awaited condition held.
    #[error("timed out after {timeout:?} waiting for {what}")]
    Timeout { what: String, timeout: Duration },

    /// The target element exists but is not actionable (hidden or disabled).
    #[error("element for '{group}' found via '{selector}' but not actionable")]
    Interaction { group: String, selector: String },

    /// Browser engine failure, passed through unchanged.
    #[error("engine error: {0}")]
    Engine(#[from] playwright_rs::Error),

    /// The configured base URL or a joined route is not a valid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn timeout(what: impl Into<String>, timeout: Duration) -> Self {
        Error::Timeout {
            what: what.into(),
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_not_found_lists_every_tried_selector() {
        let err = Error::ElementNotFound {
            group: "search input".to_string(),
            tried: vec!["#a".to_string(), ".b".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("search input"));
        assert!(message.contains("#a"));
        assert!(message.contains(".b"));
    }

    #[test]
    fn timeout_reports_bound_and_subject() {
        let err = Error::timeout("create modal to appear", Duration::from_secs(10));
        assert_eq!(
            err.to_string(),
            "timed out after 10s waiting for create modal to appear"
        );
    }
}
