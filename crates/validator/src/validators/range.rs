//! Inclusive bound validators
//!
//! [`Min`], [`Max`] and [`MinMax`] are generic over any [`Scalar`](crate::foundation::Scalar) payload
//! type. The factory functions in this module fix `T` to the integer and
//! float kinds; [`temporal`](super::temporal) does the same for dates and
//! times.
//!
//! Bounds are inclusive and there is no numeric coercion: `min(10)` rejects
//! `Value::Float(50.0)`.

crate::validator! {
    /// Accepts values greater than or equal to `min`.
    pub Min<T> { min: T } for T;
    rule(self, input) { *input >= self.min }
}

crate::validator! {
    /// Accepts values less than or equal to `max`.
    pub Max<T> { max: T } for T;
    rule(self, input) { *input <= self.max }
}

crate::validator! {
    /// Accepts values within `[min, max]`.
    ///
    /// When `min > max` no value is accepted.
    pub MinMax<T> { min: T, max: T } for T;
    rule(self, input) { self.min <= *input && *input <= self.max }
}

// ============================================================================
// INTEGER
// ============================================================================

/// Integer value must be `>= min`.
///
/// ```
/// use rqp_validator::prelude::*;
///
/// assert!(min(100).validate_any(100).is_ok());
/// assert!(min(100).validate_any(99).is_err());
/// ```
#[must_use]
pub fn min(min: i64) -> Min<i64> {
    Min::new(min)
}

/// Integer value must be `<= max`.
#[must_use]
pub fn max(max: i64) -> Max<i64> {
    Max::new(max)
}

/// Integer value must be within `[min, max]`.
#[must_use]
pub fn min_max(min: i64, max: i64) -> MinMax<i64> {
    MinMax::new(min, max)
}

// ============================================================================
// FLOAT
// ============================================================================

/// 32-bit float value must be `>= min`. `NaN` is never accepted.
#[must_use]
pub fn min_float(min: f32) -> Min<f32> {
    Min::new(min)
}

/// 32-bit float value must be `<= max`. `NaN` is never accepted.
#[must_use]
pub fn max_float(max: f32) -> Max<f32> {
    Max::new(max)
}

/// 32-bit float value must be within `[min, max]`.
#[must_use]
pub fn min_max_float(min: f32, max: f32) -> MinMax<f32> {
    MinMax::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
