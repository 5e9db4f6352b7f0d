//! Prelude module for convenient imports.
//!
//! Provides a single `use rqp_validator::prelude::*;` import that brings
//! in the traits, types, validators, combinators and macros.
//!
//! # Examples
//!
//! ```
//! use rqp_validator::prelude::*;
//!
//! let rules = Validations::new()
//!     .with("limit", min_max(1, 100))
//!     .with("q", not_empty());
//! assert!(rules.validate("q", &Value::from("rust")).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    DynValidator, ErrorKind, Scalar, Validate, ValidateExt, ValidationError, ValidationResult,
    Value,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    In, Max, Min, MinMax, NotEmpty, is_in, max, max_date, max_date_time, max_float, max_time, min,
    min_date, min_date_time, min_float, min_max, min_max_date, min_max_date_time, min_max_float,
    min_max_time, min_time, not_empty,
};

// ============================================================================
// COMBINATORS AND REGISTRY
// ============================================================================

pub use crate::combinators::{And, FromFn, Multi, from_fn, multi};
pub use crate::registry::Validations;

pub use crate::{is_in, multi};
