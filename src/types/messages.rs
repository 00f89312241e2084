//! Canonical failure messages.
//!
//! Every place a caller-supplied callback is invoked resolves a misbehaving
//! callback into exactly one of [`PRODUCER_NO_VALUE`] or [`PRODUCER_FAULT`],
//! so callers can tell a broken callback apart from a rule violation by
//! message alone.

use std::panic::Location;

/// A callback returned no usable value (`None`).
pub const PRODUCER_NO_VALUE: &str = "producer returned no value";

/// A callback panicked while it was being invoked.
pub const PRODUCER_FAULT: &str = "producer raised a fault";

/// A failure was constructed with an empty or whitespace-only message.
pub const BLANK_FAILURE_MESSAGE: &str = "failure message must not be blank";

/// An `Empty` outcome was forced into a failure-shaped value.
pub const EMPTY_OUTCOME: &str = "operation produced no result";

/// Message used when a required argument is missing.
#[must_use]
pub fn null_argument(argument: &str, location: &Location<'_>) -> String {
    format!("argument `{argument}` must not be null {}", call_site(location))
}

/// Appends the call site to a framework-generated message.
#[must_use]
pub fn at_call_site(message: &str, location: &Location<'_>) -> String {
    format!("{message} {}", call_site(location))
}

fn call_site(location: &Location<'_>) -> String {
    format!("(called at {}:{})", location.file(), location.line())
}
