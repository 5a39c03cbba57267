//! `eff!` macro for do-notation style chaining.
//!
//! The macro rewrites a sequence of binds into nested `and_then` calls, so it
//! works for both [`Option`](crate::Option) and [`Result`](crate::Result).
//! The first `None` or `Err` short-circuits the rest of the block.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: extracts the value from the container
//! - `let pattern = expression;` - Pure let binding
//! - `where condition;` - Guard: the block is `None` when `condition` is false
//!   (`Option` only)
//! - `where condition, else error;` - Guard: the block is `Err(error)` when
//!   `condition` is false
//! - `expression` - Final expression (already a container)
//!
//! `<=` is used as the bind operator because `<-` cannot be matched by a
//! `macro_rules!` pattern.
//!
//! # Implementation Notes
//!
//! The macro expands `pattern <= expression; rest` into:
//! ```rust,ignore
//! expression.and_then(move |pattern| { /* rest */ })
//! ```
//!
//! and a guard `where condition; rest` into a filtered unit container:
//! ```rust,ignore
//! Some(()).filter(|_| condition).and_then(move |()| { /* rest */ })
//! ```
//!
//! `where` is a keyword, so a guard line can never be mistaken for a bind or
//! a final expression.

/// A macro for do-notation style chaining of `Option` and `Result`.
///
/// # Examples
///
/// ```rust
/// use rsrt::{eff, Err, None, Ok, Option, Result, Some};
///
/// let sum = eff! {
///     x <= Some(5);
///     y <= Some(10);
///     let z = x + y;
///     Some(z * 2)
/// };
/// assert_eq!(sum, Some(30));
///
/// let missing: Option<i32> = eff! {
///     x <= Some(5);
///     y <= None::<i32>;
///     Some(x + y)
/// };
/// assert_eq!(missing, None);
///
/// let failed: Result<i32, &str> = eff! {
///     x <= Ok::<i32, &str>(1);
///     _ <= Err::<(), &str>("stop");
///     Ok(x)
/// };
/// assert_eq!(failed, Err("stop"));
///
/// let positive = |x: i32| -> Result<i32, String> {
///     eff! {
///         where x > 0, else format!("{x} is not positive");
///         Ok(x)
///     }
/// };
/// assert_eq!(positive(3), Ok(3));
/// assert_eq!(positive(-3), Err("-3 is not positive".to_string()));
/// ```
#[macro_export]
macro_rules! eff {
    // Guard that turns a false condition into `None`
    (where $condition:expr ; $($rest:tt)+) => {
        $crate::Option::Some(())
            .filter(|_| $condition)
            .and_then(move |()| {
                $crate::eff!($($rest)+)
            })
    };

    // Guard that turns a false condition into `Err(error)`
    (where $condition:expr , else $error:expr ; $($rest:tt)+) => {
        $crate::Option::Some(())
            .filter(|_| $condition)
            .ok_or_else(|| $error)
            .and_then(move |()| {
                $crate::eff!($($rest)+)
            })
    };

    // Terminal case: single expression, returned as-is
    ($result:expr) => {
        $result
    };

    // Bind with identifier pattern
    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.and_then(move |$pattern| {
            $crate::eff!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.and_then(move |($($pattern)*)| {
            $crate::eff!($($rest)+)
        })
    };

    // Bind with wildcard pattern
    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.and_then(move |_| {
            $crate::eff!($($rest)+)
        })
    };

    // Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::eff!($($rest)+)
        }
    };

    // Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::eff!($($rest)+)
        }
    };

    // Pure let binding with type annotation
    (let $pattern:ident : $ty:ty = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern: $ty = $expr;
            $crate::eff!($($rest)+)
        }
    };
}
