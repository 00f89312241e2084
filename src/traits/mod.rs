//! Traits at the seams between guard-rail and caller types.
//!
//! - [`Nullable`]: null-equivalence, used by the `is_null`/`is_non_null` checks
//! - [`ResultExt`] / [`OptionExt`]: lift std results and options into
//!   [`ResultState`](crate::ResultState)
//! - [`Precondition`]: anything that can gate a
//!   [`PreconditionPipeline`](crate::PreconditionPipeline)
//!
//! # Examples
//!
//! ```
//! use guard_rail::traits::{Nullable, OptionExt};
//! use guard_rail::ResultState;
//!
//! let name: Option<&str> = None;
//! assert!(name.is_null());
//! assert_eq!(name.or_failure("name is required"), ResultState::failure("name is required"));
//! ```

pub mod nullable;
pub mod result_ext;

pub use crate::precondition::Precondition;
pub use nullable::Nullable;
pub use result_ext::{OptionExt, ResultExt};
