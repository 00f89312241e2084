//! The tri-state result container and its failure payloads.
//!
//! # Examples
//!
//! ```
//! use guard_rail::ResultState;
//!
//! let state = ResultState::success(5).validate(|n| *n > 3, "too small");
//! assert_eq!(state, ResultState::success(5));
//!
//! let state = ResultState::success(5).validate(|n| *n > 10, "too small");
//! assert_eq!(state, ResultState::failure("too small"));
//! ```
use smallvec::SmallVec;

pub mod failure;
pub mod invoke;
pub mod messages;
pub mod result_state;

pub use failure::{FailureKind, FailureValue, Fault};
pub use invoke::CallbackFault;
pub use result_state::ResultState;

/// SmallVec-backed collection used for accumulated failures and provenance
/// chains.
///
/// Uses inline storage for up to 2 elements; most soft checks record few
/// violations and most failures travel through few tracked calls.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
