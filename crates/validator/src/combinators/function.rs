//! Closure-backed validators

use std::fmt;

use crate::foundation::{Validate, ValidationError, Value};

/// Adapts a closure into a validator.
///
/// The closure must stay pure for the validator contract to hold; capture
/// constants, not clocks or counters.
///
/// # Examples
///
/// ```
/// use rqp_validator::prelude::*;
///
/// let even = from_fn(|input: &Value| match input {
///     Value::Int(n) if n % 2 == 0 => Ok(()),
///     _ => Err(ValidationError::not_in_scope(input)),
/// });
///
/// assert!(even.validate_any(4).is_ok());
/// assert!(even.validate_any(5).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    check: F,
}

impl<F> Validate for FromFn<F>
where
    F: Fn(&Value) -> Result<(), ValidationError>,
{
    #[inline]
    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        (self.check)(input)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a [`FromFn`] validator.
pub fn from_fn<F>(check: F) -> FromFn<F>
where
    F: Fn(&Value) -> Result<(), ValidationError>,
{
    FromFn { check }
}
