//! String length validators

crate::validator! {
    /// Accepts strings of at least one byte.
    ///
    /// Any non-string input is rejected.
    ///
    /// ```
    /// use rqp_validator::prelude::*;
    ///
    /// assert!(not_empty().validate_any("test").is_ok());
    /// assert!(not_empty().validate_any("").is_err());
    /// assert!(not_empty().validate_any(1).is_err());
    /// ```
    pub NotEmpty for String;
    rule(input) { !input.is_empty() }
    fn not_empty();
}
