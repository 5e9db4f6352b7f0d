//! Dynamic parameter values.
//!
//! A [`Value`] is what a caller hands to a validator after it has pulled a
//! raw parameter out of a request and coerced it to the type the field
//! expects. Validators never coerce on their own: an integer bound rejects a
//! float even when it would be numerically in range.
//!
//! # Examples
//!
//! ```
//! use rqp_validator::foundation::Value;
//!
//! let v = Value::from(42);
//! assert_eq!(v.kind(), "int");
//! assert_eq!(v.to_string(), "42");
//!
//! let s = Value::from("three");
//! assert_eq!(s.as_str(), Some("three"));
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

// ============================================================================
// VALUE
// ============================================================================

/// A parameter value whose concrete type is only known at runtime.
///
/// Equality is structural per variant: `Value::Int(1) != Value::Float(1.0)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Integer number.
    Int(i64),

    /// 32-bit floating point number.
    Float(f32),

    /// Point in time.
    Time(DateTime<Utc>),

    /// Calendar date without time of day.
    Date(NaiveDate),

    /// Calendar date and wall-clock time without a zone.
    DateTime(NaiveDateTime),

    /// UTF-8 text.
    String(String),

    /// Boolean flag.
    Bool(bool),
}

impl Value {
    /// Short lowercase name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Time(_) => "time",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
        }
    }

    /// Returns the text payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Time(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            // NaiveDateTime's own Display separates with a space
            Self::DateTime(v) => write!(f, "{}T{}", v.date(), v.time()),
            Self::String(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Time(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

// ============================================================================
// SCALAR DOWNCAST
// ============================================================================

/// An ordered payload type that bound validators can be built over.
///
/// `downcast` is the runtime type check: it borrows the payload when the
/// value holds this type and returns `None` for every other variant.
pub trait Scalar: PartialOrd + Clone + fmt::Debug + Send + Sync + 'static {
    /// Borrows the payload if `value` holds this type.
    fn downcast(value: &Value) -> Option<&Self>;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn downcast(value: &Value) -> Option<&Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_scalar! {
    i64 => Int,
    f32 => Float,
    DateTime<Utc> => Time,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
    String => String,
}

// ============================================================================
// TESTS
// ============================================================================
