//! # rqp-validator
//!
//! Composable scope validators for query-string parameters.
//!
//! A caller pulls a raw parameter out of a request, coerces it into a
//! [`Value`](foundation::Value) of the type the field expects, and hands it
//! to a validator. The validator either accepts the value or rejects it with
//! a single failure kind, [`NotInScope`](foundation::ErrorKind::NotInScope),
//! whose message embeds the offending value: `"101: not in scope"`.
//!
//! ## Quick Start
//!
//! ```
//! use rqp_validator::prelude::*;
//!
//! let limit = multi![min(1), max(100)];
//! assert!(limit.validate_any(50).is_ok());
//!
//! let err = limit.validate_any(101).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NotInScope);
//! assert_eq!(err.to_string(), "101: not in scope");
//! ```
//!
//! ## Built-in Validators
//!
//! - **Integer**: [`min`](validators::min), [`max`](validators::max),
//!   [`min_max`](validators::min_max)
//! - **Float**: [`min_float`](validators::min_float), [`max_float`](validators::max_float),
//!   [`min_max_float`](validators::min_max_float)
//! - **Temporal**: `min_time`/`max_time`/`min_max_time`, `min_date`/…,
//!   `min_date_time`/… in [`validators::temporal`]
//! - **Membership**: [`is_in`](validators::is_in), [`is_in!`]
//! - **String**: [`not_empty`](validators::not_empty)
//!
//! ## Composition
//!
//! [`multi!`] / [`multi`](combinators::multi) chain validators with AND
//! semantics and stop at the first failure. [`Validations`](registry::Validations)
//! maps parameter names to validators.

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod validators;
