//! Shorthand macros for building condition chains.
//!
//! - [`macro@crate::hard`] - Builds a fail-fast [`HardCondition`](crate::condition::HardCondition)
//!   from a list of `predicate => message` pairs.
//! - [`macro@crate::soft`] - Builds an accumulating
//!   [`SoftCondition`](crate::condition::SoftCondition) from the same syntax.
//!
//! # Examples
//!
//! ```
//! use guard_rail::{hard, soft};
//!
//! let name = String::from("ab");
//!
//! let first = hard!(&name;
//!     |s: &&String| s.len() >= 5 => "name is shorter than 5 characters",
//!     |s: &&String| s.chars().all(char::is_uppercase) => "name is not upper case",
//! );
//! assert_eq!(
//!     first.then_approved_or_else_throw().unwrap_err().message(),
//!     "name is shorter than 5 characters"
//! );
//!
//! let all = soft!(&name;
//!     |s: &&String| s.len() >= 5 => "name is shorter than 5 characters",
//!     |s: &&String| s.chars().all(char::is_uppercase) => "name is not upper case",
//! );
//! assert_eq!(all.error_count(), 2);
//! ```

/// Builds a fail-fast [`HardCondition`](crate::condition::HardCondition).
///
/// The first pair becomes `is`, every following pair `and_is`. Evaluation
/// stops at the first failing predicate.
///
/// # Examples
///
/// ```
/// use guard_rail::hard;
///
/// let age = hard!(42u32; |n: &u32| *n >= 18 => "must be adult", |n: &u32| *n < 150 => "implausible age");
/// assert_eq!(age.then_approved_or_else_throw(), Ok(42));
/// ```
#[macro_export]
macro_rules! hard {
    ($value:expr; $pred:expr => $msg:expr $(, $rest_pred:expr => $rest_msg:expr)* $(,)?) => {
        $crate::condition::HardCondition::of($value)
            .is($pred, $msg)
            $(.and_is($rest_pred, $rest_msg))*
    };
}

/// Builds an accumulating [`SoftCondition`](crate::condition::SoftCondition).
///
/// The first pair becomes `is`, every following pair `and_is`. Every
/// predicate runs; each failing one is recorded.
///
/// # Examples
///
/// ```
/// use guard_rail::soft;
///
/// let report = soft!(-3i64; |n: &i64| *n > 0 => "not positive", |n: &i64| n % 2 == 0 => "not even")
///     .then_get_or_error_message();
/// assert_eq!(report.failure_value().message(), "1) not positive\n2) not even");
/// ```
#[macro_export]
macro_rules! soft {
    ($value:expr; $pred:expr => $msg:expr $(, $rest_pred:expr => $rest_msg:expr)* $(,)?) => {
        $crate::condition::SoftCondition::of($value)
            .is($pred, $msg)
            $(.and_is($rest_pred, $rest_msg))*
    };
}

// Internal logging shims. With the `tracing` feature they forward to the
// matching `tracing` macro; without it they type-check the arguments and
// emit nothing.

#[cfg(feature = "tracing")]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if false {
            ::std::mem::drop(::std::format!($($arg)*));
        }
    };
}

#[cfg(feature = "tracing")]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if false {
            ::std::mem::drop(::std::format!($($arg)*));
        }
    };
}

#[cfg(feature = "tracing")]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        if false {
            ::std::mem::drop(::std::format!($($arg)*));
        }
    };
}

pub(crate) use {log_debug, log_trace, log_warn};
