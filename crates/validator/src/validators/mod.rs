//! Built-in validators
//!
//! # Categories
//!
//! - **Range**: integer and 32-bit float bounds
//! - **Temporal**: instant, date and date-time bounds
//! - **Membership**: value equals one of a fixed set
//! - **Length**: non-empty strings
//!
//! All bounds are inclusive.
//!
//! # Examples
//!
//! ```
//! use rqp_validator::prelude::*;
//!
//! let limit = min_max(1, 100);
//! let sort = is_in(["name", "created_at"]);
//! let query = not_empty();
//!
//! assert!(limit.validate_any(25).is_ok());
//! assert!(sort.validate_any("name").is_ok());
//! assert!(query.validate_any("").is_err());
//! ```

pub mod length;
pub mod membership;
pub mod range;
pub mod temporal;

pub use length::{NotEmpty, not_empty};
pub use membership::{In, is_in};
pub use range::{Max, Min, MinMax, max, max_float, min, min_float, min_max, min_max_float};
pub use temporal::{
    max_date, max_date_time, max_time, min_date, min_date_time, min_max_date, min_max_date_time,
    min_max_time, min_time,
};
