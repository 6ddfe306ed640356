//! # vat-core
//!
//! Core types shared by the VAT-RS crates.
//!
//! Vertex animation texture (VAT) baking writes positions, normals and
//! rotations for engines whose axis conventions differ from the authoring
//! tool. This crate holds the pieces every other crate agrees on:
//!
//! - [`Error`] - the single failure mode of the remapper
//! - [`Result`] - alias over [`Error`]
//!
//! ## Crate Structure
//!
//! ```text
//! vat-core (this crate)
//!    ^
//!    |
//!    +-- vat-math (vectors, swizzle/flip tables)
//!    +-- vat-cli  (command line front end)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vat_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
}
