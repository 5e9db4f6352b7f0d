//! Membership validator

use smallvec::SmallVec;

use crate::foundation::{Validate, ValidationError, Value};

/// Accepts a value equal to one of its candidates.
///
/// Candidates may be of different kinds; comparison is [`Value`] equality, so
/// `Value::Int(1)` never matches `Value::Float(1.0)`. With no candidates every
/// input is rejected.
///
/// # Examples
///
/// ```
/// use rqp_validator::prelude::*;
///
/// let order = is_in(["asc", "desc"]);
/// assert!(order.validate_any("asc").is_ok());
/// assert_eq!(
///     order.validate_any("up").unwrap_err().to_string(),
///     "up: not in scope"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct In {
    candidates: SmallVec<[Value; 4]>,
}

impl In {
    /// Creates the validator from its candidate set.
    pub fn new<I>(candidates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured candidates, in insertion order.
    #[must_use]
    pub fn candidates(&self) -> &[Value] {
        &self.candidates
    }

    /// Returns true if `input` equals one of the candidates.
    #[must_use]
    pub fn contains(&self, input: &Value) -> bool {
        self.candidates.iter().any(|candidate| candidate == input)
    }
}

impl Validate for In {
    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if self.contains(input) {
            Ok(())
        } else {
            Err(ValidationError::not_in_scope(input))
        }
    }
}

/// Creates an [`In`] validator.
///
/// For candidates of mixed kinds use the [`is_in!`](crate::is_in) macro.
pub fn is_in<I>(candidates: I) -> In
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    In::new(candidates)
}
