//! Diagnostics raised when an accessor is called on the wrong variant.
//!
//! `unwrap`, `expect` and friends are only valid for one variant of their
//! container. When they are called on the other one, the library builds an
//! [`UnwrapError`]. The panicking accessors panic with its message, while the
//! `try_*` accessors hand it back to the caller so it can be inspected.
//!
//! The error keeps the offending container around for post-hoc inspection,
//! but only in erased form: an `UnwrapError` produced by `Err(e).unwrap()`
//! never knew the `Ok` type, so it records the type name and `Debug`
//! rendering of the payload instead of the payload itself.
//!
//! # Examples
//!
//! ```rust
//! use rsrt::{Container, Err, Result};
//!
//! let result: Result<i32, &str> = Err("boom");
//! let error = result.try_unwrap().unwrap_err();
//!
//! assert_eq!(
//!     error.message(),
//!     "called `Result::unwrap()` on an `Err` value: \"boom\""
//! );
//! assert!(matches!(error.container(), Container::Result(_)));
//! ```

use std::any::type_name;
use std::error::Error;
use std::fmt;

use static_assertions::assert_impl_all;

use crate::option::Option;
use crate::result::Result;

type StdOption<T> = core::option::Option<T>;
type Cause = Box<dyn Error + Send + Sync + 'static>;

// =============================================================================
// Erased
// =============================================================================

/// A container payload whose static type has been erased.
///
/// Holds the payload's type name and its `Debug` rendering.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Erased {
    type_name: &'static str,
    rendered: String,
}

impl Erased {
    /// Erases `value`, keeping its type name and `Debug` rendering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::Erased;
    ///
    /// let erased = Erased::of(&"boom");
    /// assert_eq!(erased.rendered(), "\"boom\"");
    /// assert_eq!(erased.type_name(), "&str");
    /// ```
    pub fn of<V: fmt::Debug + ?Sized>(value: &V) -> Self {
        Self {
            type_name: type_name::<V>(),
            rendered: format!("{value:?}"),
        }
    }

    /// Returns the name of the erased type.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the `Debug` rendering of the erased value.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Debug for Erased {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.rendered)
    }
}

impl fmt::Display for Erased {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.rendered)
    }
}

// =============================================================================
// Container
// =============================================================================

/// The erased container an [`UnwrapError`] was raised from.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Container {
    /// Raised from an `Option` accessor.
    Option(Option<Erased>),
    /// Raised from a `Result` accessor.
    Result(Result<Erased, Erased>),
}

impl fmt::Display for Container {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option(option) => write!(formatter, "{option}"),
            Self::Result(result) => write!(formatter, "{result}"),
        }
    }
}

// =============================================================================
// UnwrapError
// =============================================================================

/// Raised by `unwrap`/`expect`-style accessors called on the wrong variant.
///
/// # Examples
///
/// ```rust
/// use rsrt::{Erased, Ok, Result};
///
/// let result: Result<i32, String> = Ok(7);
/// let error = result.try_unwrap_err().unwrap_err();
///
/// assert_eq!(error.result().unwrap(), &Ok(Erased::of(&7)));
/// assert_eq!(
///     error.to_string(),
///     "called `Result::unwrap_err()` on an `Ok` value: 7"
/// );
/// ```
#[derive(Debug)]
pub struct UnwrapError {
    container: Container,
    message: String,
    cause: StdOption<Cause>,
}

impl UnwrapError {
    /// Creates a new error for `container` with the given message.
    pub fn new(container: Container, message: impl Into<String>) -> Self {
        Self {
            container,
            message: message.into(),
            cause: None,
        }
    }

    /// Chains `cause` as the underlying [`Error::source`] of this error.
    #[must_use]
    pub fn with_cause<C>(self, cause: C) -> Self
    where
        C: Error + Send + Sync + 'static,
    {
        Self {
            cause: Some(Box::new(cause)),
            ..self
        }
    }

    pub(crate) fn on_none(message: impl Into<String>) -> Self {
        Self::new(Container::Option(Option::None), message)
    }

    pub(crate) fn on_ok<T: fmt::Debug>(value: &T, message: impl Into<String>) -> Self {
        Self::new(Container::Result(Result::Ok(Erased::of(value))), message)
    }

    pub(crate) fn on_err<E: fmt::Debug>(error: &E, message: impl Into<String>) -> Self {
        Self::new(Container::Result(Result::Err(Erased::of(error))), message)
    }

    /// Returns the erased container this error was raised from.
    pub const fn container(&self) -> &Container {
        &self.container
    }

    /// Returns the erased `Result` this error was raised from, if any.
    ///
    /// Errors raised from an `Option` accessor return `None`.
    pub const fn result(&self) -> Option<&Result<Erased, Erased>> {
        match &self.container {
            Container::Result(result) => Option::Some(result),
            Container::Option(_) => Option::None,
        }
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for UnwrapError {
    fn source(&self) -> StdOption<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}

assert_impl_all!(UnwrapError: Send, Sync, Error);
assert_impl_all!(Erased: Clone, Send, Sync);
