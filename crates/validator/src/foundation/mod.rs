//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: [`Value`], the dynamically typed input, and [`Scalar`]
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`]
//!
//! # Architecture
//!
//! ## 1. One input shape
//!
//! Every validator checks a [`Value`]. The caller decides which variant a
//! raw query parameter becomes; a validator whose expected variant does not
//! match rejects the value exactly like an out-of-range one.
//!
//! ## 2. One failure kind
//!
//! All failures are [`ErrorKind::NotInScope`], rendered as
//! `"<value>: not in scope"`.
//!
//! ## 3. Composition
//!
//! ```
//! use rqp_validator::prelude::*;
//!
//! let limit = multi![min(10), max(100)];
//! assert!(limit.validate_any(50).is_ok());
//! assert!(limit.validate_any(101).is_err());
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ErrorKind, ValidationError};
pub use traits::{DynValidator, Validate, ValidateExt};
pub use value::{Scalar, Value};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
