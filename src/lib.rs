//! # rsrt
//!
//! Rust Return Types: an optional-value container and a success/failure
//! container, with the combinators of the standard library's idiom.
//!
//! ## Overview
//!
//! - **[`Option`]**: `Some(value)` or `None`, for values that may be absent.
//! - **[`Result`]**: `Ok(value)` or `Err(error)`, for operations that can fail
//!   in expected ways.
//! - **[`UnwrapError`]**: raised by accessors called on the wrong variant.
//! - **Do-notation**: [`do_block`] with [`Result::bind`] and `?`, and the
//!   [`eff!`] macro, stop at the first `Err` (or `None`).
//!
//! Expected absence and failure travel as values through the combinators;
//! only misuse (`unwrap` on `Err`, ...) fails.
//!
//! ## Feature Flags
//!
//! - `async` (default): [`Result::and_then_async`] and `do_async`
//! - `tracing`: `trace_err`, `trace_ok` and `trace_none` diagnostic hooks
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rsrt::prelude::*;
//!
//! fn add(x: i32, y: i32) -> Result<i32, String> {
//!     Ok(x + y)
//! }
//!
//! fn checked_add(x: i32, y: i32) -> Result<i32, String> {
//!     if x < 0 || y < 0 {
//!         return Err("x and y should not be negative".to_string());
//!     }
//!     Ok(x + y)
//! }
//!
//! assert_eq!(add(2, 3).unwrap(), 5);
//! assert!(checked_add(-1, 4).is_err());
//! assert_eq!(add(2, 3).and_then(|sum| checked_add(sum, 1)), Ok(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Glob-importing the prelude shadows the standard library's `Option`,
/// `Some`, `None`, `Result`, `Ok` and `Err` with this crate's types.
///
/// # Usage
///
/// ```rust
/// use rsrt::prelude::*;
///
/// let value: Option<i32> = Some(1);
/// assert_eq!(value.ok_or("missing"), Ok(1));
/// ```
pub mod prelude {
    pub use crate::do_notation::{ShortCircuit, Step, do_block};
    pub use crate::error::UnwrapError;
    pub use crate::option::{None, Option, Some};
    pub use crate::result::{Err, Ok, OkErr, Result};

    #[cfg(feature = "async")]
    pub use crate::do_notation::do_async;
    #[cfg(feature = "async")]
    pub use crate::future::AndThenAsync;
}

mod do_notation;
mod eff_macro;
mod error;
mod option;
mod result;

#[cfg(feature = "async")]
mod future;

#[cfg(feature = "tracing")]
mod trace;

pub use do_notation::{ShortCircuit, Step, do_block};
pub use error::{Container, Erased, UnwrapError};
pub use option::{None, Option, Some};
pub use result::{Err, Ok, OkErr, Result};

#[cfg(feature = "async")]
pub use do_notation::do_async;
#[cfg(feature = "async")]
pub use future::AndThenAsync;
