//! Tri-state results, fail-fast and accumulating validation, and
//! precondition-gated operations.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `guard_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Tri-state results
//!
//! ```
//! use guard_rail::ResultState;
//!
//! let state = ResultState::success("  42 ")
//!     .map(|s| s.trim().to_string())
//!     .validate(|s| !s.is_empty(), "input is blank")
//!     .map(|s| s.len());
//! assert_eq!(state, ResultState::success(2));
//!
//! let nothing = ResultState::<usize>::empty().map(|n| n + 1);
//! assert!(nothing.is_empty());
//! ```
//!
//! ## Accumulating validation
//!
//! ```
//! use guard_rail::condition::SoftCondition;
//!
//! let report = SoftCondition::of("ab")
//!     .is(|s| s.len() >= 5, "must have at least 5 characters")
//!     .and_is(|s| s.chars().all(char::is_uppercase), "must be upper case")
//!     .then_get_or_error_message();
//!
//! assert_eq!(
//!     report.failure_value().message(),
//!     "1) must have at least 5 characters\n2) must be upper case"
//! );
//! ```
//!
//! ## Precondition pipeline
//!
//! ```
//! use guard_rail::condition::HardCondition;
//! use guard_rail::PreconditionPipeline;
//!
//! let inserted = PreconditionPipeline::of(7usize)
//!     .precondition(HardCondition::of(7usize).is(|i| *i <= 3, "index out of range"))
//!     .map(|index| index * 2)
//!     .tracked_as("insert");
//!
//! assert_eq!(inserted.failure_value().to_string(), "insert: index out of range");
//! ```

/// Fail-fast and accumulating condition builders
pub mod condition;
/// Shorthand macros for condition chains
pub mod macros;
/// Precondition-gated operations
pub mod precondition;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Provenance tracking and report formatting
pub mod tracker;
/// Extension and capability traits
pub mod traits;
/// ResultState and its failure payloads
pub mod types;

pub use condition::{Checked, HardCondition, SoftCondition, Unchecked};
pub use precondition::{Operated, Precondition, PreconditionPipeline};
pub use tracker::{ErrorTracker, ReportFormatConfig};
pub use traits::{Nullable, OptionExt, ResultExt};
pub use types::{CallbackFault, ErrorVec, FailureKind, FailureValue, Fault, ResultState};
