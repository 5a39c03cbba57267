//! Result type - the outcome of an operation that can fail.
//!
//! This module provides the [`Result<T, E>`] type, which is either `Ok(T)` on
//! success or `Err(E)` on failure. Expected failures travel as values through
//! the combinators; only accessors called on the wrong variant (`unwrap` on
//! `Err`, `unwrap_err` on `Ok`, ...) fail, with an [`UnwrapError`].
//!
//! # Examples
//!
//! ```rust
//! use rsrt::{Err, Ok, Result};
//!
//! fn parse_port(text: &str) -> Result<u16, String> {
//!     match text.parse::<u16>() {
//!         std::result::Result::Ok(port) => Ok(port),
//!         std::result::Result::Err(error) => Err(error.to_string()),
//!     }
//! }
//!
//! let port = parse_port("8080")
//!     .and_then(|port| if port >= 1024 { Ok(port) } else { Err("privileged".to_string()) })
//!     .unwrap_or(80);
//! assert_eq!(port, 8080);
//! ```

use std::error::Error;
use std::fmt;

use static_assertions::assert_eq_size;

use crate::error::UnwrapError;
use crate::option::{None, Option, Some};

pub use self::Result::{Err, Ok};

type StdOption<T> = core::option::Option<T>;
type StdResult<T, E> = core::result::Result<T, E>;

/// The outcome of a fallible operation: either `Ok(T)` or `Err(E)`.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value
///
/// # Examples
///
/// ```rust
/// use rsrt::{Err, Ok, Result};
///
/// let success: Result<i32, String> = Ok(42);
/// let failure: Result<i32, String> = Err("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Ok(84));
/// assert_eq!(failure.unwrap_or(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Result<T, E> {
    /// The success variant.
    Ok(T),
    /// The failure variant.
    Err(E),
}

assert_eq_size!(Result<u32, u32>, StdResult<u32, u32>);

const UNWRAP_MESSAGE: &str = "called `Result::unwrap()` on an `Err` value";
const UNWRAP_ERR_MESSAGE: &str = "called `Result::unwrap_err()` on an `Ok` value";

impl<T, E> Result<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, Ok, Result};
    ///
    /// let value: Result<i32, &str> = Ok(1);
    /// assert!(value.is_ok());
    ///
    /// let value: Result<i32, &str> = Err("no");
    /// assert!(!value.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Variant Access
    // =========================================================================

    /// Converts into an [`Option`] of the success value, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, None, Ok, Result, Some};
    ///
    /// let value: Result<i32, &str> = Ok(2);
    /// assert_eq!(value.ok(), Some(2));
    ///
    /// let value: Result<i32, &str> = Err("no");
    /// assert_eq!(value.ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into an [`Option`] of the error value, discarding any success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, None, Ok, Result, Some};
    ///
    /// let value: Result<i32, &str> = Err("no");
    /// assert_eq!(value.err(), Some("no"));
    ///
    /// let value: Result<i32, &str> = Ok(2);
    /// assert_eq!(value.err(), None);
    /// ```
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrows the success value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrows the error value, if any.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Returns the success value or `default`. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, Ok, Result};
    ///
    /// let value: Result<i32, &str> = Ok(9);
    /// assert_eq!(value.unwrap_or(2), 9);
    ///
    /// let value: Result<i32, &str> = Err("no");
    /// assert_eq!(value.unwrap_or(2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, Result};
    ///
    /// let value: Result<usize, &str> = Err("four");
    /// assert_eq!(value.unwrap_or_else(str::len), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to the success value, leaving an error untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Ok(function(value)),
            Self::Err(error) => Err(error),
        }
    }

    /// Applies `function` to the error value, leaving a success untouched.
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(function(error)),
        }
    }

    /// Chains a fallible computation on the success value.
    ///
    /// `Err` short-circuits: `function` is not invoked and the original error
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, Ok, Result};
    ///
    /// fn checked_half(value: i32) -> Result<i32, String> {
    ///     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("{value} is odd")) }
    /// }
    ///
    /// assert_eq!(Ok(8).and_then(checked_half).and_then(checked_half), Ok(2));
    /// assert_eq!(
    ///     Ok(6).and_then(checked_half).and_then(checked_half),
    ///     Err("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Recovers from an error with a fallible computation.
    ///
    /// `Ok` passes through: `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, Ok, Result};
    ///
    /// let failed: Result<i32, &str> = Err("cache miss");
    /// let recovered: Result<i32, ()> = failed.or_else(|_| Ok(0));
    /// assert_eq!(recovered, Ok(0));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Calls `function` with the success value, if any, and returns the
    /// result unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Ok, Result};
    ///
    /// let mut log = Vec::new();
    /// let value: Result<i32, &str> = Ok(3);
    /// let value = value.inspect(|x| log.push(format!("got {x}")));
    /// assert_eq!(value, Ok(3));
    /// assert_eq!(log, vec!["got 3".to_string()]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with the error value, if any, and returns the
    /// result unchanged.
    #[inline]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Returns an iterator over the success value.
    ///
    /// Yields exactly one item for `Ok` and nothing for `Err`.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.value().into_std().into_iter()
    }

    /// Converts into the standard library's `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, Result};
    ///
    /// let value: Result<i32, &str> = Err("no");
    /// assert_eq!(value.into_std(), std::result::Result::Err("no"));
    /// ```
    #[inline]
    pub fn into_std(self) -> StdResult<T, E> {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(error) => StdResult::Err(error),
        }
    }
}

// =============================================================================
// Accessors that fail on Err
// =============================================================================

impl<T, E: fmt::Debug> Result<T, E> {
    /// Returns the success value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is `Err`, with a message embedding the error's `Debug`
    /// form. Use [`Result::try_unwrap`] to get the [`UnwrapError`] instead.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use rsrt::{Err, Result};
    ///
    /// let value: Result<i32, &str> = Err("emergency failure");
    /// value.unwrap(); // panics with "...: \"emergency failure\""
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.try_unwrap().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the success value, or the [`UnwrapError`] if this is `Err`.
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` holding the erased `Err` when called on `Err`.
    pub fn try_unwrap(self) -> StdResult<T, UnwrapError> {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(error) => StdResult::Err(UnwrapError::on_err(
                &error,
                format!("{UNWRAP_MESSAGE}: {error:?}"),
            )),
        }
    }

    /// Returns the success value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is `Err`, with `message` followed by the error's `Debug`
    /// form.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        self.try_expect(message)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the success value, or an [`UnwrapError`] prefixed by `message`.
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` when called on `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, Result};
    ///
    /// let value: Result<i32, &str> = Err("timeout");
    /// let error = value.try_expect("fetching quota").unwrap_err();
    /// assert_eq!(error.message(), "fetching quota: \"timeout\"");
    /// ```
    pub fn try_expect(self, message: &str) -> StdResult<T, UnwrapError> {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(error) => {
                StdResult::Err(UnwrapError::on_err(&error, format!("{message}: {error:?}")))
            }
        }
    }
}

impl<T, E> Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    /// Like [`Result::try_unwrap`], but chains the error as the
    /// [`Error::source`] of the returned [`UnwrapError`].
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` caused by the held error when called on `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::error::Error;
    /// use std::fmt;
    ///
    /// use rsrt::{Err, Result};
    ///
    /// #[derive(Debug)]
    /// struct Timeout;
    ///
    /// impl fmt::Display for Timeout {
    ///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         formatter.write_str("timed out")
    ///     }
    /// }
    ///
    /// impl Error for Timeout {}
    ///
    /// let value: Result<i32, Timeout> = Err(Timeout);
    /// let error = value.try_unwrap_with_cause().unwrap_err();
    /// assert_eq!(error.source().unwrap().to_string(), "timed out");
    /// ```
    pub fn try_unwrap_with_cause(self) -> StdResult<T, UnwrapError> {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(error) => StdResult::Err(
                UnwrapError::on_err(&error, format!("{UNWRAP_MESSAGE}: {error:?}"))
                    .with_cause(error),
            ),
        }
    }

    /// Like [`Result::try_expect`], but chains the error as the
    /// [`Error::source`] of the returned [`UnwrapError`].
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` caused by the held error when called on `Err`.
    pub fn try_expect_with_cause(self, message: &str) -> StdResult<T, UnwrapError> {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(error) => StdResult::Err(
                UnwrapError::on_err(&error, format!("{message}: {error:?}")).with_cause(error),
            ),
        }
    }
}

// =============================================================================
// Accessors that fail on Ok
// =============================================================================

impl<T: fmt::Debug, E> Result<T, E> {
    /// Returns the error value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is `Ok`, with a message embedding the value's `Debug`
    /// form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, Result};
    ///
    /// let value: Result<i32, &str> = Err("no");
    /// assert_eq!(value.unwrap_err(), "no");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        self.try_unwrap_err()
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the error value, or the [`UnwrapError`] if this is `Ok`.
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` holding the erased `Ok` when called on `Ok`.
    pub fn try_unwrap_err(self) -> StdResult<E, UnwrapError> {
        match self {
            Self::Ok(value) => StdResult::Err(UnwrapError::on_ok(
                &value,
                format!("{UNWRAP_ERR_MESSAGE}: {value:?}"),
            )),
            Self::Err(error) => StdResult::Ok(error),
        }
    }

    /// Returns the error value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is `Ok`, with `message` followed by the value's `Debug`
    /// form.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        self.try_expect_err(message)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the error value, or an [`UnwrapError`] prefixed by `message`.
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` when called on `Ok`.
    pub fn try_expect_err(self, message: &str) -> StdResult<E, UnwrapError> {
        match self {
            Self::Ok(value) => {
                StdResult::Err(UnwrapError::on_ok(&value, format!("{message}: {value:?}")))
            }
            Self::Err(error) => StdResult::Ok(error),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default, E> Result<T, E> {
    /// Returns the success value, or `T::default()` for `Err`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_std().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Interop with the standard library
// =============================================================================

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(result: StdResult<T, E>) -> Self {
        match result {
            StdResult::Ok(value) => Ok(value),
            StdResult::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

// =============================================================================
// OkErr
// =============================================================================

mod sealed {
    pub trait Sealed {}

    impl<T, E> Sealed for super::Result<T, E> {}
}

/// Membership marker for the two variants of [`Result`].
///
/// Implemented by `Result<T, E>` only, so it can be used as a bound wherever
/// "any `Ok` or `Err`" is accepted without naming the payload types.
///
/// # Examples
///
/// ```rust
/// use rsrt::{Err, Ok, OkErr, Result};
///
/// fn describe<R: OkErr>(outcome: &R) -> &'static str {
///     outcome.variant_name()
/// }
///
/// let success: Result<i32, ()> = Ok(1);
/// let failure: Result<(), &str> = Err("no");
/// assert_eq!(describe(&success), "Ok");
/// assert_eq!(describe(&failure), "Err");
/// ```
pub trait OkErr: sealed::Sealed {
    /// The success type.
    type Value;
    /// The error type.
    type Error;

    /// Returns `true` for the `Ok` variant.
    fn is_ok_variant(&self) -> bool;

    /// Returns `true` for the `Err` variant.
    fn is_err_variant(&self) -> bool {
        !self.is_ok_variant()
    }

    /// Returns `"Ok"` or `"Err"`.
    fn variant_name(&self) -> &'static str {
        if self.is_ok_variant() { "Ok" } else { "Err" }
    }

    /// Returns the value as a concrete [`Result`].
    fn into_result(self) -> Result<Self::Value, Self::Error>;
}

impl<T, E> OkErr for Result<T, E> {
    type Value = T;
    type Error = E;

    fn is_ok_variant(&self) -> bool {
        self.is_ok()
    }

    fn into_result(self) -> Result<T, E> {
        self
    }
}
