//! Extension traits for lifting `Result` and `Option` into [`ResultState`].
//!
//! # Examples
//!
//! ```
//! use guard_rail::traits::{OptionExt, ResultExt};
//! use guard_rail::ResultState;
//!
//! let port = "80a".parse::<u16>().ctx("reading port");
//! let failure = port.failure_value();
//! assert_eq!(failure.message(), "reading port");
//! assert_eq!(failure.cause().map(|c| c.message()), Some("invalid digit found in string"));
//!
//! let first = Vec::<u8>::new().first().copied().or_empty();
//! assert_eq!(first, ResultState::empty());
//! ```

use crate::types::{FailureValue, Fault, ResultState};
use std::error::Error;

/// Lifts a `Result` into a [`ResultState`], describing the failed step.
pub trait ResultExt<T> {
    /// On `Err`, produces a failure with `message` and the error as cause.
    fn ctx(self, message: impl Into<String>) -> ResultState<T>;

    /// Like [`ctx`](ResultExt::ctx), building the message only on `Err`.
    fn ctx_with<F>(self, f: F) -> ResultState<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error,
{
    #[inline]
    fn ctx(self, message: impl Into<String>) -> ResultState<T> {
        self.ctx_with(|| message.into())
    }

    #[inline]
    fn ctx_with<F>(self, f: F) -> ResultState<T>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => ResultState::Success(value),
            Err(error) => {
                ResultState::Failure(FailureValue::new(f()).with_cause(Fault::from_error(&error)))
            },
        }
    }
}

/// Lifts an `Option` into a [`ResultState`], choosing how `None` is read.
pub trait OptionExt<T> {
    /// `None` becomes a failure with `message`.
    fn or_failure(self, message: impl Into<String>) -> ResultState<T>;

    /// `None` becomes `Empty`.
    fn or_empty(self) -> ResultState<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn or_failure(self, message: impl Into<String>) -> ResultState<T> {
        match self {
            Some(value) => ResultState::Success(value),
            None => ResultState::Failure(FailureValue::new(message)),
        }
    }

    #[inline]
    fn or_empty(self) -> ResultState<T> {
        ResultState::from(self)
    }
}
