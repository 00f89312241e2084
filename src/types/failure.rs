//! Failure payloads carried by [`ResultState::Failure`](crate::types::ResultState::Failure).
//!
//! A [`FailureValue`] is immutable: every method that "changes" it consumes
//! the value and returns a new one.

use crate::tracker::ErrorTracker;
use crate::types::{messages, ErrorVec};
use std::any::Any;
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display};
use std::panic::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a failure.
///
/// Messages stay the primary contract; the kind lets callers branch on the
/// origin of a failure without parsing text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A domain predicate rejected the value. The message is caller-supplied.
    RuleViolation,
    /// A required argument was missing, blank or otherwise malformed.
    ContractViolation,
    /// A callback produced no value.
    CallbackNoValue,
    /// A callback panicked.
    CallbackFault,
}

impl FailureKind {
    /// Returns `true` for the two callback canonicalizations.
    #[must_use]
    #[inline]
    pub fn is_callback(self) -> bool {
        matches!(self, Self::CallbackNoValue | Self::CallbackFault)
    }
}

/// Captured description of whatever caused a failure.
///
/// Built either from a [`std::error::Error`] (walking its `source()` chain)
/// or from a panic payload.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fault {
    message: String,
    sources: ErrorVec<String>,
}

impl Fault {
    /// Creates a fault with a plain message and no sources.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::Fault;
    ///
    /// let fault = Fault::new("disk full");
    /// assert_eq!(fault.message(), "disk full");
    /// assert_eq!(fault.sources().count(), 0);
    /// ```
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), sources: ErrorVec::new() }
    }

    /// Captures an error and the messages of its whole `source()` chain.
    pub fn from_error(error: &dyn Error) -> Self {
        let mut sources = ErrorVec::new();
        let mut next = error.source();
        while let Some(source) = next {
            sources.push(source.to_string());
            next = source.source();
        }
        Self { message: error.to_string(), sources }
    }

    /// Captures the payload of a caught panic.
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::new(message)
    }

    /// The top-level message of the fault.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages of the nested causes, outermost first.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str)
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for source in &self.sources {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl Error for Fault {}

/// The payload of a failed [`ResultState`](crate::types::ResultState).
///
/// Holds a human-readable message, an optional [`Fault`] cause, a
/// [`FailureKind`] and the provenance chain of method names the failure
/// travelled through (outermost call first).
///
/// `Display` renders the provenance chain in front of the message, e.g.
/// `"add: insert: index out of range"`.
///
/// # Examples
///
/// ```
/// use guard_rail::{FailureKind, FailureValue};
///
/// let failure = FailureValue::new("index out of range")
///     .tracked("insert")
///     .tracked("add");
///
/// assert_eq!(failure.message(), "index out of range");
/// assert_eq!(failure.kind(), FailureKind::RuleViolation);
/// assert_eq!(failure.to_string(), "add: insert: index out of range");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FailureValue {
    pub(crate) message: String,
    pub(crate) cause: Option<Fault>,
    pub(crate) kind: FailureKind,
    pub(crate) trace: ErrorVec<Cow<'static, str>>,
}

impl FailureValue {
    /// Creates a rule-violation failure with the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(message, FailureKind::RuleViolation)
    }

    /// Creates a failure of an explicit kind.
    #[inline]
    pub fn with_kind(message: impl Into<String>, kind: FailureKind) -> Self {
        Self { message: message.into(), cause: None, kind, trace: ErrorVec::new() }
    }

    /// Attaches (or replaces) the cause.
    #[inline]
    pub fn with_cause(mut self, cause: Fault) -> Self {
        self.cause = Some(cause);
        self
    }

    #[track_caller]
    pub(crate) fn contract_violation(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::with_kind(
            messages::at_call_site(&message, Location::caller()),
            FailureKind::ContractViolation,
        )
    }

    #[track_caller]
    pub(crate) fn null_argument(argument: &str) -> Self {
        Self::with_kind(
            messages::null_argument(argument, Location::caller()),
            FailureKind::ContractViolation,
        )
    }

    pub(crate) fn empty_outcome() -> Self {
        Self::with_kind(messages::EMPTY_OUTCOME, FailureKind::ContractViolation)
    }

    /// The message without provenance.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    #[inline]
    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_ref()
    }

    #[must_use]
    #[inline]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Method names this failure travelled through, outermost first.
    pub fn trace(&self) -> impl Iterator<Item = &str> {
        self.trace.iter().map(|name| name.as_ref())
    }

    /// Returns `true` when the failure canonicalizes a misbehaving callback.
    #[must_use]
    #[inline]
    pub fn is_callback_fault(&self) -> bool {
        self.kind.is_callback()
    }

    /// Returns a failure whose message is `text` followed by a newline and
    /// the previous message.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::FailureValue;
    ///
    /// let failure = FailureValue::new("value is negative").prepend_message("cannot parse age");
    /// assert_eq!(failure.message(), "cannot parse age\nvalue is negative");
    /// ```
    pub fn prepend_message(mut self, text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        let mut message = String::with_capacity(text.len() + 1 + self.message.len());
        message.push_str(text);
        message.push('\n');
        message.push_str(&self.message);
        self.message = message;
        self
    }

    /// Stamps a method name onto the provenance chain.
    ///
    /// See [`ErrorTracker::track`].
    #[inline]
    pub fn tracked(self, method: impl Into<Cow<'static, str>>) -> Self {
        ErrorTracker::default().track(self, method)
    }

    /// Drops the whole provenance chain.
    ///
    /// See [`ErrorTracker::remove_called_by_method_prefixes`].
    #[inline]
    pub fn untracked(self) -> Self {
        ErrorTracker::default().remove_called_by_method_prefixes(self)
    }
}

impl Display for FailureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ErrorTracker::default().render(self))
    }
}

impl Error for FailureValue {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|cause| cause as &(dyn Error + 'static))
    }
}
