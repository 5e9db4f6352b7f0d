//! Error type for rejected values
//!
//! Every validator in this crate fails the same way: the value is outside
//! the validator's scope. Wrong-type inputs and out-of-bounds inputs are
//! deliberately indistinguishable to the caller.
//!
//! # Examples
//!
//! ```
//! use rqp_validator::foundation::{ErrorKind, ValidationError};
//!
//! let error = ValidationError::not_in_scope(&101);
//! assert_eq!(error.kind(), ErrorKind::NotInScope);
//! assert_eq!(error.to_string(), "101: not in scope");
//! ```

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Root cause of a validation failure.
///
/// Compare against this instead of matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ErrorKind {
    /// The value failed its type check or its bound/membership check.
    #[error("not in scope")]
    NotInScope,
}

impl ErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotInScope => "not_in_scope",
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rejected parameter value.
///
/// Displays as `"<value>: not in scope"`. The optional field name is context
/// for the caller and is not part of the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{value}: {kind}")]
pub struct ValidationError {
    kind: ErrorKind,
    value: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    field: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates a `NotInScope` error rendering `value` with its `Display` impl.
    pub fn not_in_scope(value: &(impl fmt::Display + ?Sized)) -> Self {
        Self {
            kind: ErrorKind::NotInScope,
            value: value.to_string(),
            field: None,
        }
    }

    /// Attaches the name of the parameter that was rejected.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// The root cause marker.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Machine-readable error code (`"not_in_scope"`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Returns true if the root cause is [`ErrorKind::NotInScope`].
    #[must_use]
    pub fn is_not_in_scope(&self) -> bool {
        self.kind == ErrorKind::NotInScope
    }

    /// The rejected value as text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parameter name, when the error came through a registry.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Converts the error to a JSON object suitable for an HTTP error body.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code(),
            "message": self.to_string(),
            "value": self.value,
            "field": self.field,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let error = ValidationError::not_in_scope("three");
        assert_eq!(error.to_string(), "three: not in scope");
        assert_eq!(error.value(), "three");
    }

    #[test]
    fn test_kind_and_code() {
        let error = ValidationError::not_in_scope(&9);
        assert!(error.is_not_in_scope());
        assert_eq!(error.kind(), ErrorKind::NotInScope);
        assert_eq!(error.code(), "not_in_scope");
        assert_eq!(ErrorKind::NotInScope.to_string(), "not in scope");
    }

    #[test]
    fn test_field_does_not_change_message() {
        let error = ValidationError::not_in_scope(&101).with_field("limit");
        assert_eq!(error.field(), Some("limit"));
        assert_eq!(error.to_string(), "101: not in scope");
    }

    #[test]
    fn test_errors_with_same_value_are_equal() {
        assert_eq!(
            ValidationError::not_in_scope(&101),
            ValidationError::not_in_scope("101")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value() {
        let error = ValidationError::not_in_scope(&101).with_field("limit");
        let json = error.to_json_value();
        assert_eq!(json["code"], "not_in_scope");
        assert_eq!(json["message"], "101: not in scope");
        assert_eq!(json["value"], "101");
        assert_eq!(json["field"], "limit");
    }
}
