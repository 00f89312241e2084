//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use guard_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`hard!`], [`soft!`]
//! - **Types**: [`ResultState`], [`FailureValue`], [`HardCondition`],
//!   [`SoftCondition`], [`PreconditionPipeline`]
//! - **Traits**: [`ResultExt`], [`OptionExt`], [`Nullable`]
//!
//! # Examples
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> ResultState<u16> {
//!     raw.parse::<u16>()
//!         .ctx("reading port")
//!         .validate(|port| *port >= 1024, "port is privileged")
//!         .tracked("parse_port")
//! }
//!
//! assert_eq!(parse_port("8080"), ResultState::success(8080));
//! assert_eq!(parse_port("80").failure_value().to_string(), "parse_port: port is privileged");
//! ```

// Macros
pub use crate::{hard, soft};

// Core types
pub use crate::condition::{HardCondition, SoftCondition};
pub use crate::precondition::PreconditionPipeline;
pub use crate::types::{FailureValue, ResultState};

// Traits
pub use crate::traits::{Nullable, OptionExt, ResultExt};
