//! AND combinators - logical conjunction of validators
//!
//! [`And`] joins two validators statically; [`Multi`] holds any number of
//! type-erased validators. Both run left to right against the same input
//! and return the first failure unchanged.
//!
//! # Examples
//!
//! ```
//! use rqp_validator::prelude::*;
//!
//! let page = multi![min(1), max(1000)];
//! assert!(page.validate_any(1).is_ok());
//! assert!(page.validate_any(0).is_err());
//! ```

use std::fmt;

use crate::foundation::{DynValidator, Validate, ValidateExt, ValidationError, Value};

// ============================================================================
// AND
// ============================================================================

/// Combines two validators with logical AND.
///
/// The right validator only runs when the left one passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

// ============================================================================
// MULTI
// ============================================================================

/// Runs a list of validators in order, stopping at the first failure.
///
/// An empty `Multi` accepts every value. There is deliberately no OR
/// counterpart: alternatives are expressed with [`In`](crate::validators::In).
#[derive(Clone, Default)]
pub struct Multi {
    validators: Vec<DynValidator>,
}

impl Multi {
    /// Creates an empty `Multi`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validator to the end of the chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn push<V>(mut self, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        self.validators.push(validator.boxed());
        self
    }

    /// Number of chained validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if no validators are chained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validate for Multi {
    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }
}

impl FromIterator<DynValidator> for Multi {
    fn from_iter<I: IntoIterator<Item = DynValidator>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Multi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multi")
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Creates a [`Multi`] from already type-erased validators.
///
/// Prefer [`multi!`](crate::multi) when the validators are known up front.
///
/// ```
/// use rqp_validator::prelude::*;
///
/// let parts: Vec<DynValidator> = vec![min(10).boxed(), max(100).boxed()];
/// let limit = multi(parts);
/// assert!(limit.validate_any(101).is_err());
/// ```
pub fn multi<I>(validators: I) -> Multi
where
    I: IntoIterator<Item = DynValidator>,
{
    validators.into_iter().collect()
}
