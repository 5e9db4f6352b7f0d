//! Core traits for the validation system
//!
//! This module defines the contract every validator implements and the
//! extension trait that composes them.

use std::sync::Arc;

use crate::combinators::And;
use crate::foundation::{ValidationError, Value};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract all validators implement.
///
/// A validator is an immutable value holding its bounds or candidates. It
/// checks one dynamically typed [`Value`] and either accepts it or returns a
/// [`ValidationError`]. Implementations must be pure: the same input always
/// yields the same outcome.
///
/// # Examples
///
/// ```
/// use rqp_validator::foundation::{Validate, ValidationError, Value};
///
/// struct Even;
///
/// impl Validate for Even {
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         match input {
///             Value::Int(n) if n % 2 == 0 => Ok(()),
///             _ => Err(ValidationError::not_in_scope(input)),
///         }
///     }
/// }
///
/// assert!(Even.validate(&Value::from(4)).is_ok());
/// assert!(Even.validate(&Value::from(3)).is_err());
/// ```
pub trait Validate {
    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the value is in scope
    /// * `Err(ValidationError)` with [`ErrorKind::NotInScope`](crate::foundation::ErrorKind)
    ///   otherwise
    fn validate(&self, input: &Value) -> Result<(), ValidationError>;

    /// Converts `value` into a [`Value`] and validates it.
    ///
    /// ```
    /// use rqp_validator::prelude::*;
    ///
    /// assert!(max(100).validate_any(100).is_ok());
    /// assert!(not_empty().validate_any("x").is_ok());
    /// ```
    fn validate_any<T>(&self, value: T) -> Result<(), ValidationError>
    where
        Self: Sized,
        T: Into<Value>,
    {
        self.validate(&value.into())
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    #[inline]
    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    #[inline]
    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    #[inline]
    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// A shared, type-erased validator.
///
/// This is the value type stored in a field-name registry such as
/// [`Validations`](crate::registry::Validations).
pub type DynValidator = Arc<dyn Validate + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. Short-circuits on the first failure and
    /// returns it unchanged.
    ///
    /// ```
    /// use rqp_validator::prelude::*;
    ///
    /// let limit = min(10).and(max(100));
    /// assert!(limit.validate_any(50).is_ok());
    /// assert_eq!(limit.validate_any(101).unwrap_err().to_string(), "101: not in scope");
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }

    /// Erases the concrete type so the validator can be stored next to
    /// validators of other kinds.
    fn boxed(self) -> DynValidator
    where
        Self: Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        fn validate(&self, _input: &Value) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        fn validate(&self, input: &Value) -> Result<(), ValidationError> {
            Err(ValidationError::not_in_scope(input))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate(&Value::from("test")).is_ok());
        assert!(AlwaysFails.validate(&Value::from("test")).is_err());
    }

    #[test]
    fn test_validate_any_converts() {
        let err = AlwaysFails.validate_any(7).unwrap_err();
        assert_eq!(err.value(), "7");
    }

    #[test]
    fn test_smart_pointers_delegate() {
        let boxed: Box<dyn Validate> = Box::new(AlwaysFails);
        assert!(boxed.validate(&Value::from(1)).is_err());

        let shared: DynValidator = AlwaysValid.boxed();
        assert!(shared.validate(&Value::from(1)).is_ok());
        assert!((&shared).validate(&Value::from(1)).is_ok());
    }
}
