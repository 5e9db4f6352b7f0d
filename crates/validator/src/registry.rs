//! Field-name → validator registry.
//!
//! Callers that parse a query string keep one [`Validations`] per endpoint
//! and look a validator up by parameter name once the raw value has been
//! coerced.
//!
//! # Examples
//!
//! ```
//! use rqp_validator::prelude::*;
//!
//! let rules = Validations::new()
//!     .with("limit", multi![min(1), max(100)])
//!     .with("sort", is_in!["name", "created_at"]);
//!
//! assert!(rules.validate("limit", &Value::from(50)).is_ok());
//!
//! let err = rules.validate("sort", &Value::from("size")).unwrap_err();
//! assert_eq!(err.field(), Some("sort"));
//! assert_eq!(err.to_string(), "size: not in scope");
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::foundation::{DynValidator, Validate, ValidateExt, ValidationError, Value};

/// An ordered mapping from parameter name to validator.
#[derive(Clone, Default)]
pub struct Validations {
    rules: IndexMap<String, DynValidator>,
}

impl Validations {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `validator` for `field`, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(mut self, field: impl Into<String>, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        self.insert(field, validator.boxed());
        self
    }

    /// Registers a validator, returning the one it replaced.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        validator: DynValidator,
    ) -> Option<DynValidator> {
        self.rules.insert(field.into(), validator)
    }

    /// Looks up the validator for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&DynValidator> {
        self.rules.get(field)
    }

    /// Returns true if `field` has a validator.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.rules.contains_key(field)
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered field names, in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Iterates over `(field, validator)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DynValidator)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Validates `value` against the validator registered for `field`.
    ///
    /// A field without a validator accepts any value. A rejection carries
    /// the field name (see [`ValidationError::field`]).
    pub fn validate(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        let Some(validator) = self.rules.get(field) else {
            tracing::trace!(field, "no validator registered");
            return Ok(());
        };

        validator.validate(value).map_err(|error| {
            tracing::debug!(field, kind = value.kind(), %error, "parameter rejected");
            error.with_field(field.to_owned())
        })
    }
}

impl<K: Into<String>> FromIterator<(K, DynValidator)> for Validations {
    fn from_iter<I: IntoIterator<Item = (K, DynValidator)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, DynValidator)> for Validations {
    fn extend<I: IntoIterator<Item = (K, DynValidator)>>(&mut self, iter: I) {
        self.rules
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl fmt::Debug for Validations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.fields()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max, min, not_empty};
    use std::sync::Arc;

    #[test]
    fn test_registry_lookup() {
        let rules = Validations::new().with("limit", max(100)).with("q", not_empty());
        assert_eq!(rules.len(), 2);
        assert!(rules.contains("limit"));
        assert!(!rules.contains("offset"));
        assert_eq!(rules.fields().collect::<Vec<_>>(), ["limit", "q"]);
        assert!(rules.get("q").is_some());
    }

    #[test]
    fn test_unregistered_field_passes() {
        let rules = Validations::new();
        assert!(rules.is_empty());
        assert!(rules.validate("anything", &Value::from(-1)).is_ok());
    }

    #[test]
    fn test_rejection_carries_field() {
        let rules = Validations::new().with("limit", max(100));
        let err = rules.validate("limit", &Value::from(101)).unwrap_err();
        assert!(err.is_not_in_scope());
        assert_eq!(err.field(), Some("limit"));
        assert_eq!(err.to_string(), "101: not in scope");
    }

    #[test]
    fn test_insert_replaces() {
        let mut rules = Validations::new().with("limit", max(100));
        let previous = rules.insert("limit", min(0).boxed());
        assert!(previous.is_some());
        assert!(rules.validate("limit", &Value::from(101)).is_ok());
    }

    #[test]
    fn test_from_iterator_shares_validators() {
        let shared = max(10).boxed();
        let rules: Validations = [("a", Arc::clone(&shared)), ("b", shared)]
            .into_iter()
            .collect();
        assert!(rules.validate("a", &Value::from(11)).is_err());
        assert!(rules.validate("b", &Value::from(11)).is_err());
        assert_eq!(format!("{rules:?}"), r#"{"a", "b"}"#);
    }
}
