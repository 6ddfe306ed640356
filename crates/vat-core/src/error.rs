//! Error types for vat-core operations.
//!
//! Every remap operation is total over its documented code ranges. The only
//! way to fail is to hand it a swizzle or flip code outside that range, so
//! [`Error`] has a single variant.
//!
//! # Usage
//!
//! ```rust
//! use vat_core::{Error, Result};
//!
//! fn check_swizzle(code: i32) -> Result<usize> {
//!     if !(0..=5).contains(&code) {
//!         return Err(Error::invalid_argument("swizzle code", code, 5));
//!     }
//!     Ok(code as usize)
//! }
//!
//! assert!(check_swizzle(3).is_ok());
//! assert!(check_swizzle(6).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `vat-math` - Code validation in the swizzle module
//! - `vat-cli` - Wrapped into `anyhow` errors

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while remapping coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An enumerated code fell outside its documented range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vat_core::Error;
    ///
    /// let err = Error::invalid_argument("quaternion flip code", 15, 14);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "invalid quaternion flip code: 15 (expected 0..=14)"
    /// );
    /// ```
    #[error("invalid {name}: {value} (expected 0..={max})")]
    InvalidArgument {
        /// Which argument was rejected
        name: &'static str,
        /// Value passed by the caller
        value: i32,
        /// Largest accepted value (smallest is always 0)
        max: i32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    ///
    /// # Arguments
    ///
    /// * `name` - Human readable argument name
    /// * `value` - Rejected value
    /// * `max` - Inclusive upper bound of the accepted range
    #[inline]
    pub fn invalid_argument(name: &'static str, value: i32, max: i32) -> Self {
        Self::InvalidArgument { name, value, max }
    }

    /// Returns `true` if this is an argument validation error.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
