//! Condition builders over a pinned subject value.
//!
//! Two evaluation modes share the same vocabulary:
//!
//! - [`HardCondition`] - fail-fast. The first failing check freezes the
//!   verdict; later `and_*` checks are skipped, `or_*` checks may recover.
//! - [`SoftCondition`] - accumulating. Every check runs against the subject
//!   and every failure is recorded, then merged into one numbered report.
//!
//! Both builders start in the [`Unchecked`] stage, where only the `is*`
//! entry checks exist, and move to [`Checked`] once the first check is
//! attached. Chaining and terminal methods only exist on `Checked`, so a
//! chain that never checked anything does not compile:
//!
//! ```compile_fail
//! use guard_rail::condition::HardCondition;
//!
//! let _ = HardCondition::of(5).then_approved_or_else_throw();
//! ```
//!
//! # Examples
//!
//! ```
//! use guard_rail::condition::{HardCondition, SoftCondition};
//!
//! let hard = HardCondition::of(5)
//!     .is(|n| *n > 3, "too small")
//!     .and_is(|n| *n < 10, "too large");
//! assert!(hard.is_approved());
//!
//! let soft = SoftCondition::of("ab")
//!     .is(|s| s.len() >= 5, "too short")
//!     .and_is(|s| s.chars().all(char::is_uppercase), "not upper case");
//! assert_eq!(soft.error_count(), 2);
//! ```

use crate::types::invoke::invoke;
use crate::types::FailureValue;

pub mod hard;
pub mod soft;
pub mod stage;

pub use hard::HardCondition;
pub use soft::SoftCondition;
pub use stage::{Checked, Stage, Unchecked};

/// Runs one predicate over the subject behind the fault boundary.
///
/// Returns `None` when the predicate's outcome equals `expected`.
pub(crate) fn evaluate<T, P>(
    subject: &T,
    predicate: P,
    expected: bool,
    message: impl Into<String>,
) -> Option<FailureValue>
where
    P: FnOnce(&T) -> bool,
{
    match invoke(|| predicate(subject)) {
        Ok(outcome) if outcome == expected => None,
        Ok(_) => Some(FailureValue::new(message)),
        Err(fault) => Some(fault.into_failure()),
    }
}
