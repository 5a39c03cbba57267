//! Option type - a value that may be absent.
//!
//! This module provides the [`Option<T>`] type, which is either `Some(T)` or
//! `None`. It lets a function say "there may be no answer" in its signature
//! instead of handing back a sentinel.
//!
//! `None` is a unit variant, so every `None` is the same value: it compares
//! equal to every other `None` of the same type and to the standard library's
//! `None`.
//!
//! # Examples
//!
//! ```rust
//! use rsrt::{None, Option, Some};
//!
//! fn safe_divide(dividend: f64, divisor: f64) -> Option<f64> {
//!     if divisor == 0.0 {
//!         None
//!     } else {
//!         Some(dividend / divisor)
//!     }
//! }
//!
//! assert!(safe_divide(10.0, 0.0).is_none());
//! assert_eq!(safe_divide(10.0, 2.0), Some(5.0));
//! ```

use std::fmt;

use static_assertions::assert_eq_size;

use crate::error::UnwrapError;
use crate::result::Result;

pub use self::Option::{None, Some};

type StdOption<T> = core::option::Option<T>;
type StdResult<T, E> = core::result::Result<T, E>;

/// An optional value: either `Some(T)` or `None`.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use rsrt::{None, Option, Some};
///
/// let present: Option<i32> = Some(42);
/// let absent: Option<i32> = None;
///
/// assert_eq!(present.map(|x| x * 2), Some(84));
/// assert_eq!(absent.unwrap_or(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Option<T> {
    /// No value.
    None,
    /// Some value of type `T`.
    Some(T),
}

assert_eq_size!(Option<u32>, StdOption<u32>);

impl<T> Option<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{None, Option, Some};
    ///
    /// assert!(Some(42).is_some());
    /// assert!(!None::<i32>.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is the `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{None, Option, Some};
    ///
    /// assert!(None::<i32>.is_none());
    /// assert!(!Some(42).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, consuming the option.
    ///
    /// # Panics
    ///
    /// Panics with the message of an [`UnwrapError`] if this is `None`.
    /// Use [`Option::into_std`] to get the standard library's `None` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::Some;
    ///
    /// assert_eq!(Some(42).unwrap(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", UnwrapError::on_none(NONE_UNWRAP_MESSAGE)),
        }
    }

    /// Returns the contained value, or the [`UnwrapError`] if this is `None`.
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` when called on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{None, Some};
    ///
    /// assert_eq!(Some(1).try_unwrap().unwrap(), 1);
    ///
    /// let error = None::<i32>.try_unwrap().unwrap_err();
    /// assert_eq!(error.message(), "called `Option::unwrap()` on a `None` value");
    /// ```
    pub fn try_unwrap(self) -> StdResult<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError::on_none(NONE_UNWRAP_MESSAGE)),
        }
    }

    /// Returns the contained value, consuming the option.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use rsrt::None;
    ///
    /// None::<i32>.expect("config must be loaded");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", UnwrapError::on_none(message)),
        }
    }

    /// Returns the contained value, or an [`UnwrapError`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns an `UnwrapError` when called on `None`.
    pub fn try_expect(self, message: &str) -> StdResult<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError::on_none(message)),
        }
    }

    /// Returns the contained value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{None, Some};
    ///
    /// assert_eq!(Some(1).unwrap_or(5), 1);
    /// assert_eq!(None.unwrap_or(5), 5);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes one from `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{None, Option, Some};
    ///
    /// assert_eq!(Some("four").map(str::len), Some(4));
    /// assert_eq!(None::<&str>.map(str::len), None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Some(function(value)),
            Self::None => None,
        }
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// `None` short-circuits: `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{None, Option, Some};
    ///
    /// fn half(value: i32) -> Option<i32> {
    ///     if value % 2 == 0 { Some(value / 2) } else { None }
    /// }
    ///
    /// assert_eq!(Some(8).and_then(half).and_then(half), Some(2));
    /// assert_eq!(Some(6).and_then(half).and_then(half), None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => None,
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Some(value),
            Self::None => function(),
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self
            && predicate(&value)
        {
            return Some(value);
        }
        None
    }

    /// Calls `function` with a reference to the contained value, if any,
    /// and returns the option unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::Some;
    ///
    /// let mut seen = Vec::new();
    /// let value = Some(3).inspect(|x| seen.push(*x));
    /// assert_eq!(value, Some(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Result`], using `error` for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, None, Ok, Option, Some};
    ///
    /// assert_eq!(Some(1).ok_or("missing"), Ok(1));
    /// assert_eq!(None::<i32>.ok_or("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(error),
        }
    }

    /// Converts into a [`Result`], computing the error lazily for `None`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(function()),
        }
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns an iterator over the contained value.
    ///
    /// Yields exactly one item for `Some` and nothing for `None`. Calling it
    /// again on the same option starts a fresh iterator.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_std().into_iter()
    }

    /// Converts into the standard library's `Option`.
    ///
    /// This is the non-panicking way to get at a possibly absent value:
    /// `None` becomes the native absent marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{None, Some};
    ///
    /// assert_eq!(Some(1).into_std(), std::option::Option::Some(1));
    /// assert_eq!(None::<i32>.into_std(), std::option::Option::None);
    /// ```
    #[inline]
    pub fn into_std(self) -> StdOption<T> {
        match self {
            Self::Some(value) => StdOption::Some(value),
            Self::None => StdOption::None,
        }
    }
}

const NONE_UNWRAP_MESSAGE: &str = "called `Option::unwrap()` on a `None` value";

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Option<T> {
    /// Returns the contained value, or `T::default()` for `None`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        None
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Interop with the standard library
// =============================================================================

impl<T> From<StdOption<T>> for Option<T> {
    fn from(option: StdOption<T>) -> Self {
        match option {
            StdOption::Some(value) => Some(value),
            StdOption::None => None,
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    fn from(option: Option<T>) -> Self {
        option.into_std()
    }
}

impl<T: PartialEq> PartialEq<StdOption<T>> for Option<T> {
    fn eq(&self, other: &StdOption<T>) -> bool {
        match (self, other) {
            (Self::Some(left), StdOption::Some(right)) => left == right,
            (Self::None, StdOption::None) => true,
            _ => false,
        }
    }
}

impl<T: PartialEq> PartialEq<Option<T>> for StdOption<T> {
    fn eq(&self, other: &Option<T>) -> bool {
        other == self
    }
}

impl<T> From<&Option<T>> for bool {
    /// `None` is falsy, `Some` is truthy.
    fn from(option: &Option<T>) -> Self {
        option.is_some()
    }
}
