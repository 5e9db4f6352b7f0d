//! Validator combinators
//!
//! - [`And`] / [`Multi`]: all validators must pass, first failure wins
//! - [`FromFn`]: a closure as a validator

pub mod and;
pub mod function;

pub use and::{And, Multi, multi};
pub use function::{FromFn, from_fn};
