//! Fault boundary for caller-supplied callbacks.
//!
//! Callbacks are run under [`std::panic::catch_unwind`]; a panic is turned
//! into [`CallbackFault::Panicked`] and never unwinds through a combinator.
//! This relies on the default `panic = "unwind"` strategy. Under
//! `panic = "abort"` a panicking callback aborts the process as usual.

use crate::macros::log_warn;
use crate::types::failure::{FailureKind, FailureValue, Fault};
use crate::types::messages;
use std::error::Error;
use std::fmt::{self, Display};
use std::panic::{self, AssertUnwindSafe};

/// Outcome of invoking a callback that did not yield a usable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackFault {
    /// The callback returned `None`.
    NoValue,
    /// The callback panicked; the payload is captured as a [`Fault`].
    Panicked(Fault),
}

impl CallbackFault {
    /// The canonical message for this outcome.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoValue => messages::PRODUCER_NO_VALUE,
            Self::Panicked(_) => messages::PRODUCER_FAULT,
        }
    }

    /// Converts into the canonical failure.
    pub fn into_failure(self) -> FailureValue {
        match self {
            Self::NoValue => {
                FailureValue::with_kind(messages::PRODUCER_NO_VALUE, FailureKind::CallbackNoValue)
            },
            Self::Panicked(fault) => {
                FailureValue::with_kind(messages::PRODUCER_FAULT, FailureKind::CallbackFault)
                    .with_cause(fault)
            },
        }
    }
}

impl Display for CallbackFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for CallbackFault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoValue => None,
            Self::Panicked(fault) => Some(fault),
        }
    }
}

impl From<CallbackFault> for FailureValue {
    #[inline]
    fn from(fault: CallbackFault) -> Self {
        fault.into_failure()
    }
}

/// Runs `f`, capturing a panic as [`CallbackFault::Panicked`].
///
/// # Examples
///
/// ```
/// use guard_rail::types::invoke::{invoke, CallbackFault};
///
/// assert_eq!(invoke(|| 2 + 2), Ok(4));
///
/// let caught = invoke(|| -> i32 { panic!("boom") });
/// assert!(matches!(caught, Err(CallbackFault::Panicked(fault)) if fault.message() == "boom"));
/// ```
pub fn invoke<R, F>(f: F) -> Result<R, CallbackFault>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let fault = Fault::from_panic(payload.as_ref());
        log_warn!("callback panicked: {}", fault);
        CallbackFault::Panicked(fault)
    })
}

/// Runs `f`, additionally mapping `None` to [`CallbackFault::NoValue`].
///
/// # Examples
///
/// ```
/// use guard_rail::types::invoke::{invoke_option, CallbackFault};
///
/// assert_eq!(invoke_option(|| Some("x")), Ok("x"));
/// assert_eq!(invoke_option(|| None::<&str>), Err(CallbackFault::NoValue));
/// ```
pub fn invoke_option<R, F>(f: F) -> Result<R, CallbackFault>
where
    F: FnOnce() -> Option<R>,
{
    invoke(f)?.ok_or(CallbackFault::NoValue)
}
