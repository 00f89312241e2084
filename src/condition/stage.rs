//! Typestate markers for condition and pipeline builders.

mod sealed {
    pub trait Sealed {}
}

/// A builder stage. Sealed; only [`Unchecked`] and [`Checked`] exist.
pub trait Stage: sealed::Sealed {}

/// No check has been attached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unchecked;

/// At least one check has been attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Checked;

impl sealed::Sealed for Unchecked {}
impl sealed::Sealed for Checked {}
impl Stage for Unchecked {}
impl Stage for Checked {}
