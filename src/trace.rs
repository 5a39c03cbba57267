//! Diagnostic hooks that report through `tracing`.
//!
//! These are thin wrappers over `inspect` / `inspect_err`: they emit one event
//! on the matching variant and hand the container back unchanged, so they can
//! sit in the middle of a combinator chain.
//!
//! # Examples
//!
//! ```rust
//! use rsrt::{Err, Result};
//!
//! let value: Result<u16, String> = Err("port out of range".to_string());
//! let port = value.trace_err("loading listener config").unwrap_or(8080);
//! assert_eq!(port, 8080);
//! ```

use std::fmt;

use crate::option::Option;
use crate::result::Result;

impl<T, E: fmt::Debug> Result<T, E> {
    /// Emits a `WARN` event with the error if this is `Err`.
    #[must_use]
    pub fn trace_err(self, context: &str) -> Self {
        self.inspect_err(|error| tracing::warn!(context, error = ?error, "operation failed"))
    }
}

impl<T: fmt::Debug, E> Result<T, E> {
    /// Emits a `DEBUG` event with the value if this is `Ok`.
    #[must_use]
    pub fn trace_ok(self, context: &str) -> Self {
        self.inspect(|value| tracing::debug!(context, value = ?value, "operation succeeded"))
    }
}

impl<T> Option<T> {
    /// Emits a `DEBUG` event if this is `None`.
    #[must_use]
    pub fn trace_none(self, context: &str) -> Self {
        if self.is_none() {
            tracing::debug!(context, "value absent");
        }
        self
    }
}
