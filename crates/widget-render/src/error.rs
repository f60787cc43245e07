//! Error types for template composition and helper calls.
//!
//! This module provides [`RenderError`], the error type for every rendering
//! operation, and [`HelperError`], the typed failure a helper function reports.
//! Engine errors are wrapped rather than re-exported as the public variant shape,
//! so callers match on what failed (parsing a source, executing a region) and
//! reach the underlying cause through [`std::error::Error::source`].

use thiserror::Error;

use crate::helpers::ArgKind;

/// Error type for template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Malformed template syntax in a supplied source.
    ///
    /// Fatal for the render call. `source_id` names the offending source
    /// document (or the region name for regions defined directly).
    #[error("failed to parse template source `{source_id}`: {message}")]
    TemplateParse {
        source_id: String,
        message: String,
        #[source]
        cause: Option<minijinja::Error>,
    },

    /// A region failed while executing, usually because a helper returned an error.
    #[error("failed to execute region `{region}`: {cause}")]
    TemplateExecution {
        region: String,
        #[source]
        cause: minijinja::Error,
    },

    /// The data payload could not be serialized for binding.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Composer configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Builds a structural parse error that has no engine cause.
    pub(crate) fn parse(source_id: impl Into<String>, message: impl Into<String>) -> Self {
        RenderError::TemplateParse {
            source_id: source_id.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Wraps an engine syntax error for the given source.
    pub(crate) fn syntax(source_id: impl Into<String>, cause: minijinja::Error) -> Self {
        RenderError::TemplateParse {
            source_id: source_id.into(),
            message: cause
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| cause.to_string()),
            cause: Some(cause),
        }
    }

    /// Returns the helper failure that aborted execution, if there was one.
    ///
    /// The helper error sits somewhere in the engine error's source chain; it
    /// may be wrapped again when the failing call happened inside an included
    /// region.
    pub fn helper_error(&self) -> Option<&HelperError> {
        let RenderError::TemplateExecution { cause, .. } = self else {
            return None;
        };
        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(cause);
        while let Some(err) = current {
            if let Some(helper) = err.downcast_ref::<HelperError>() {
                return Some(helper);
            }
            current = err.source();
        }
        None
    }

    /// Returns true for [`RenderError::TemplateParse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, RenderError::TemplateParse { .. })
    }

    /// Returns true for [`RenderError::TemplateExecution`].
    pub fn is_execution(&self) -> bool {
        matches!(self, RenderError::TemplateExecution { .. })
    }
}

/// Failure reported by a helper function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelperError {
    /// Wrong number of arguments for the helper's signature.
    #[error("`{helper}` expects {expected} argument(s), got {actual}")]
    Arity {
        helper: String,
        expected: String,
        actual: usize,
    },

    /// An argument did not match the declared kind.
    #[error("argument {index} of `{helper}` must be {expected}, got {actual}")]
    ArgumentType {
        helper: String,
        index: usize,
        expected: ArgKind,
        actual: &'static str,
    },

    /// The helper ran and rejected its input.
    #[error("`{helper}` failed: {message}")]
    Failed { helper: String, message: String },

    /// No helper is registered under the name.
    #[error("no helper named `{0}`")]
    Unknown(String),
}

impl HelperError {
    /// Shorthand for [`HelperError::Failed`].
    pub fn failed(helper: impl Into<String>, message: impl Into<String>) -> Self {
        HelperError::Failed {
            helper: helper.into(),
            message: message.into(),
        }
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_names_source() {
        let err = RenderError::parse("layout.html", "unterminated define block");
        assert!(err.to_string().contains("layout.html"));
        assert!(err.to_string().contains("unterminated"));
        assert!(err.is_parse());
        assert!(!err.is_execution());
    }

    #[test]
    fn test_syntax_error_keeps_engine_cause() {
        let cause = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
        let err = RenderError::syntax("head.html", cause);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("unexpected end"));
    }

    #[test]
    fn test_helper_error_found_in_source_chain() {
        let helper = HelperError::failed("clothings", "bad input");
        let cause = minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, "helper failed")
            .with_source(helper.clone());
        let err = RenderError::TemplateExecution {
            region: "content".into(),
            cause,
        };
        assert_eq!(err.helper_error(), Some(&helper));
    }

    #[test]
    fn test_helper_error_absent_for_parse_errors() {
        let err = RenderError::parse("x", "nope");
        assert!(err.helper_error().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: RenderError = io_err.into();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
