//! Do-notation for [`Result`]: early return of the first `Err` from a block.
//!
//! Inside a [`do_block`] body, [`Result::bind`] turns an `Ok(v)` into `v` and
//! an `Err(e)` into a [`ShortCircuit`] signal that the `?` operator returns
//! from the body immediately. `do_block` then converts the signal back into
//! `Err(e)`, so the remaining steps never run.
//!
//! [`ShortCircuit`] cannot be constructed or opened by callers. The only way
//! to get the error back out of it is through the driver.
//!
//! # Examples
//!
//! ```rust
//! use rsrt::{Err, Ok, Result, Step, do_block};
//!
//! fn parse(text: &str) -> Result<i32, String> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let sum: Result<i32, String> = do_block(|| {
//!     let x = parse("20").bind()?;
//!     let y = parse("22").bind()?;
//!     Step::Ok(x + y)
//! });
//! assert_eq!(sum, Ok(42));
//!
//! let sum: Result<i32, String> = do_block(|| {
//!     let x = parse("20").bind()?;
//!     let y = parse("twenty-two").bind()?;
//!     Step::Ok(x + y)
//! });
//! assert_eq!(sum, Err("invalid digit found in string".to_string()));
//! ```

use std::fmt;

use crate::result::{Err, Ok, Result};

type StdResult<T, E> = core::result::Result<T, E>;

/// Signal carrying the `Err` that stopped a do-notation body.
///
/// Produced by [`Result::bind`] and consumed by [`do_block`] (or
/// `do_async`).
pub struct ShortCircuit<E> {
    error: E,
}

impl<E> ShortCircuit<E> {
    const fn new(error: E) -> Self {
        Self { error }
    }

    fn into_err<T>(self) -> Result<T, E> {
        Err(self.error)
    }
}

impl<E: fmt::Debug> fmt::Debug for ShortCircuit<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ShortCircuit")
            .field(&self.error)
            .finish()
    }
}

/// The return type of a do-notation body.
///
/// `Step::Ok(value)` completes the block with `Ok(value)`.
pub type Step<T, E> = StdResult<T, ShortCircuit<E>>;

impl<T, E> Result<T, E> {
    /// Unwraps `Ok` for use with `?` inside a [`do_block`] body.
    ///
    /// `Err(e)` becomes a [`ShortCircuit`] that `?` propagates out of the
    /// body; `do_block` turns it back into `Err(e)`.
    ///
    /// # Errors
    ///
    /// Returns the short-circuit signal when called on `Err`.
    #[inline]
    pub fn bind(self) -> Step<T, E> {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(error) => StdResult::Err(ShortCircuit::new(error)),
        }
    }
}

/// Runs a do-notation body, returning the first `Err` it bound.
///
/// # Examples
///
/// ```rust
/// use rsrt::{Err, Ok, Result, Step, do_block};
///
/// let mut steps = 0;
/// let outcome: Result<i32, &str> = do_block(|| {
///     steps += 1;
///     let first = Ok::<i32, &str>(1).bind()?;
///     steps += 1;
///     let second = Err::<i32, &str>("halt").bind()?;
///     steps += 1;
///     Step::Ok(first + second)
/// });
///
/// assert_eq!(outcome, Err("halt"));
/// assert_eq!(steps, 2);
/// ```
pub fn do_block<T, E, F>(body: F) -> Result<T, E>
where
    F: FnOnce() -> Step<T, E>,
{
    settle(body())
}

fn settle<T, E>(step: Step<T, E>) -> Result<T, E> {
    match step {
        StdResult::Ok(value) => Ok(value),
        StdResult::Err(signal) => signal.into_err(),
    }
}

/// Runs an asynchronous do-notation body, returning the first `Err` it bound.
///
/// The body is awaited once; no step runs concurrently with another.
///
/// # Examples
///
/// ```rust
/// use rsrt::{Ok, Result, Step, do_async};
///
/// async fn fetch(id: u32) -> Result<u32, String> {
///     Ok(id * 10)
/// }
///
/// # futures::executor::block_on(async {
/// let total = do_async::<u32, String, _>(async {
///     let a = fetch(1).await.bind()?;
///     let b = fetch(2).await.bind()?;
///     Step::Ok(a + b)
/// })
/// .await;
/// assert_eq!(total, Ok(30));
/// # });
/// ```
#[cfg(feature = "async")]
pub fn do_async<T, E, Fut>(body: Fut) -> impl Future<Output = Result<T, E>>
where
    Fut: Future<Output = Step<T, E>>,
{
    use futures::FutureExt;

    body.map(settle)
}
