//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — Create a scalar validator (struct + `Validate` impl + constructor)
//! - [`multi!`] — AND-chain any number of validators into a [`Multi`](crate::combinators::Multi)
//! - [`is_in!`] — Membership validator from a list of candidates
//!
//! # Examples
//!
//! ```
//! use rqp_validator::prelude::*;
//!
//! let sort = is_in!["name", "created_at"];
//! assert!(sort.validate_any("name").is_ok());
//!
//! let limit = multi![min(1), max(100)];
//! assert!(limit.validate_any(0).is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a validator over one [`Scalar`](crate::foundation::Scalar) payload
/// type: struct definition, an `accepts` check on the typed payload, and a
/// `Validate` implementation that downcasts the dynamic input first.
///
/// A failed downcast and a failed rule both produce
/// [`ValidationError::not_in_scope`](crate::foundation::ValidationError::not_in_scope).
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields) with a factory fn:
/// ```rust,ignore
/// validator! {
///     pub NotEmpty for String;
///     rule(input) { !input.is_empty() }
///     fn not_empty();
/// }
/// ```
///
/// **Generic validator** (auto `new` from all fields, one getter per field):
/// ```rust,ignore
/// validator! {
///     pub Min<T> { min: T } for T;
///     rule(self, input) { *input >= self.min }
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $name {
            /// Checks an already typed payload.
            #[must_use]
            pub fn accepts(&self, $inp: &$input) -> bool $rule
        }

        impl $crate::foundation::Validate for $name {
            fn validate(
                &self,
                input: &$crate::foundation::Value,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                match <$input as $crate::foundation::Scalar>::downcast(input) {
                    Some(payload) if self.accepts(payload) => Ok(()),
                    _ => Err($crate::foundation::ValidationError::not_in_scope(input)),
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Generic validator over a Scalar ──────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$T:ident> { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name<$T> {
            $($field: $fty,)+
        }

        impl<$T: $crate::foundation::Scalar> $name<$T> {
            /// Creates the validator from its bounds.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }

            $(
                /// Bound captured at construction.
                #[must_use]
                pub fn $field(&self) -> &$fty {
                    &self.$field
                }
            )+

            /// Checks an already typed payload.
            #[must_use]
            pub fn accepts(&$self_, $inp: &$input) -> bool $rule
        }

        impl<$T: $crate::foundation::Scalar> $crate::foundation::Validate for $name<$T> {
            fn validate(
                &self,
                input: &$crate::foundation::Value,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                match <$input as $crate::foundation::Scalar>::downcast(input) {
                    Some(payload) if self.accepts(payload) => Ok(()),
                    _ => Err($crate::foundation::ValidationError::not_in_scope(input)),
                }
            }
        }
    };
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// Chains validators with AND logic, left to right, stopping at the first
/// failure.
///
/// Validators of different types can be mixed; each is boxed into a
/// [`Multi`](crate::combinators::Multi).
///
/// ```
/// use rqp_validator::prelude::*;
///
/// let v = multi![min(10), max(100)];
/// assert!(v.validate_any(50).is_ok());
/// assert!(v.validate_any(9).is_err());
/// ```
#[macro_export]
macro_rules! multi {
    () => {
        $crate::combinators::Multi::new()
    };
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::Multi::new()$(.push($validator))+
    };
}

/// Builds an [`In`](crate::validators::In) validator from candidates of any
/// types convertible into [`Value`](crate::foundation::Value).
///
/// ```
/// use rqp_validator::prelude::*;
///
/// let v = is_in!["one", "two"];
/// assert_eq!(v.validate_any("three").unwrap_err().to_string(), "three: not in scope");
/// ```
#[macro_export]
macro_rules! is_in {
    () => {
        $crate::validators::In::new(::std::iter::empty::<$crate::foundation::Value>())
    };
    ($($candidate:expr),+ $(,)?) => {
        $crate::validators::In::new([$($crate::foundation::Value::from($candidate)),*])
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, Value};

    crate::validator! {
        pub Positive for i64;
        rule(input) { *input > 0 }
        fn positive();
    }

    crate::validator! {
        pub Above<T> { floor: T } for T;
        rule(self, input) { *input > self.floor }
    }

    #[test]
    fn test_unit_validator() {
        assert!(positive().validate(&Value::from(1)).is_ok());
        assert!(positive().validate(&Value::from(0)).is_err());
        assert!(positive().validate(&Value::from(1.0_f32)).is_err());
        assert!(Positive.accepts(&3));
    }

    #[test]
    fn test_generic_validator() {
        let v = Above::new(2.5_f32);
        assert_eq!(*v.floor(), 2.5);
        assert!(v.accepts(&3.0));
        assert!(v.validate(&Value::from(3.0_f32)).is_ok());
        assert!(v.validate(&Value::from(2.5_f32)).is_err());
        assert!(v.validate(&Value::from(3)).is_err());
    }

    #[test]
    fn test_multi_macro() {
        let v = multi![Above::new(0_i64), Above::new(10_i64)];
        assert_eq!(v.len(), 2);
        assert!(v.validate(&Value::from(11)).is_ok());
        assert_eq!(
            v.validate(&Value::from(5)).unwrap_err().to_string(),
            "5: not in scope"
        );

        let empty = multi![];
        assert!(empty.validate(&Value::from(5)).is_ok());
    }

    #[test]
    fn test_is_in_macro_mixes_types() {
        let v = is_in![1, "one", true];
        assert!(v.validate(&Value::from(1)).is_ok());
        assert!(v.validate(&Value::from("one")).is_ok());
        assert!(v.validate(&Value::from(true)).is_ok());
        assert!(v.validate(&Value::from(false)).is_err());

        let none = is_in![];
        assert!(none.validate(&Value::from(1)).is_err());
    }
}
