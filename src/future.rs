//! Asynchronous chaining for [`Result`].
//!
//! [`Result::and_then_async`] is the `async` counterpart of
//! [`Result::and_then`]. On `Ok` it awaits the future produced by the
//! operation; on `Err` it never suspends and completes with the original error
//! on its first poll.

use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::result::{Err, Result};

pin_project! {
    /// Future returned by [`Result::and_then_async`].
    ///
    /// The state transitions are:
    ///
    /// - `Running` -> completed (when the operation's future completes)
    /// - `ShortCircuited` -> completed (on the first poll)
    #[project = AndThenAsyncProj]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub enum AndThenAsync<Fut, E> {
        /// The receiver was `Ok`; awaiting the operation's future.
        Running {
            #[pin]
            future: Fut,
        },
        /// The receiver was `Err`; holds the error until the first poll.
        ShortCircuited {
            error: Option<E>,
        },
    }
}

impl<Fut, U, E> Future for AndThenAsync<Fut, E>
where
    Fut: Future<Output = Result<U, E>>,
{
    type Output = Result<U, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            AndThenAsyncProj::Running { future } => future.poll(context),
            AndThenAsyncProj::ShortCircuited { error } => match error.take() {
                Some(error) => Poll::Ready(Err(error)),
                None => panic!("`AndThenAsync` polled after completion"),
            },
        }
    }
}

impl<T, E> Result<T, E> {
    /// Chains an asynchronous fallible computation on the success value.
    ///
    /// `function` is invoked eagerly on `Ok` and its future is awaited when
    /// the returned [`AndThenAsync`] is polled. On `Err`, `function` is not
    /// invoked and the returned future is ready on its first poll.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rsrt::{Err, Ok, Result};
    ///
    /// async fn lookup(id: u32) -> Result<String, String> {
    ///     if id == 7 { Ok("seven".to_string()) } else { Err(format!("no user {id}")) }
    /// }
    ///
    /// # futures::executor::block_on(async {
    /// let found: Result<u32, String> = Ok(7);
    /// assert_eq!(found.and_then_async(lookup).await, Ok("seven".to_string()));
    ///
    /// let failed: Result<u32, String> = Err("offline".to_string());
    /// assert_eq!(failed.and_then_async(lookup).await, Err("offline".to_string()));
    /// # });
    /// ```
    pub fn and_then_async<U, F, Fut>(self, function: F) -> AndThenAsync<Fut, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Self::Ok(value) => AndThenAsync::Running {
                future: function(value),
            },
            Self::Err(error) => AndThenAsync::ShortCircuited { error: Some(error) },
        }
    }
}
