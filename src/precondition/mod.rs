//! Precondition pipeline: gate an operation behind argument checks.
//!
//! A pipeline moves through three stages:
//!
//! 1. [`PreconditionPipeline<A, Unchecked>`] - holds the subject;
//! 2. [`PreconditionPipeline<A, Checked>`] - holds the subject and the
//!    conjunction of every precondition attached so far (the gate);
//! 3. [`Operated<B>`] - holds the operation's outcome, which must be
//!    resolved with [`tracked_as`](Operated::tracked_as) or
//!    [`without_stack_trace`](Operated::without_stack_trace).
//!
//! The operation only runs when the subject and the gate are both
//! successes. Callback panics, in lazy preconditions and in the operation,
//! are captured as failures.
//!
//! # Examples
//!
//! ```
//! use guard_rail::condition::HardCondition;
//! use guard_rail::PreconditionPipeline;
//!
//! fn get(items: &[i32], index: usize) -> Result<i32, guard_rail::FailureValue> {
//!     PreconditionPipeline::of(index)
//!         .precondition(HardCondition::of(index).is(|i| *i < items.len(), "index out of range"))
//!         .map(|i| items[i])
//!         .tracked_as("get")
//!         .into_result()
//!         .map(|value| value.unwrap_or_default())
//! }
//!
//! assert_eq!(get(&[1, 2, 3], 1), Ok(2));
//! assert_eq!(get(&[1, 2, 3], 7).unwrap_err().to_string(), "get: index out of range");
//! ```

use crate::condition::stage::{Checked, Unchecked};
use crate::condition::{HardCondition, SoftCondition};
use crate::macros::log_debug;
use crate::tracker::ErrorTracker;
use crate::types::invoke::invoke;
use crate::types::ResultState;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Anything that can gate a [`PreconditionPipeline`].
///
/// Implemented for checked [`HardCondition`]s and [`SoftCondition`]s and for
/// any [`ResultState`] (whose value is discarded).
pub trait Precondition {
    /// Resolves into the gate: `Success(())`, a failure, or `Empty`.
    fn into_gate(self) -> ResultState<()>;
}

impl<T> Precondition for HardCondition<T, Checked> {
    fn into_gate(self) -> ResultState<()> {
        self.into_state().into_gate()
    }
}

impl<T> Precondition for SoftCondition<T, Checked> {
    fn into_gate(self) -> ResultState<()> {
        match self.into_report() {
            None => ResultState::Success(()),
            Some(failure) => ResultState::Failure(failure),
        }
    }
}

impl<T> Precondition for ResultState<T> {
    fn into_gate(self) -> ResultState<()> {
        match self {
            ResultState::Success(_) => ResultState::Success(()),
            ResultState::Failure(failure) => ResultState::Failure(failure),
            ResultState::Empty => ResultState::Empty,
        }
    }
}

/// Sequences preconditions over a subject before running an operation.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct PreconditionPipeline<A, S = Checked> {
    subject: ResultState<A>,
    gate: ResultState<()>,
    stage: PhantomData<S>,
}

impl<A> PreconditionPipeline<A, Unchecked> {
    /// Starts a pipeline over a plain subject.
    #[inline]
    pub fn of(subject: A) -> Self {
        Self::from_state(ResultState::Success(subject))
    }

    /// Starts a pipeline over a subject that may already have failed.
    ///
    /// A failed or empty subject short-circuits every lazy precondition and
    /// the operation.
    #[inline]
    pub fn from_state(subject: ResultState<A>) -> Self {
        Self { subject, gate: ResultState::Success(()), stage: PhantomData }
    }

    /// Attaches the first precondition.
    pub fn precondition<C>(self, condition: C) -> PreconditionPipeline<A, Checked>
    where
        C: Precondition,
    {
        self.advance().precondition(condition)
    }

    /// Attaches a precondition evaluated against the subject.
    pub fn precondition_with<C, F>(self, check: F) -> PreconditionPipeline<A, Checked>
    where
        C: Precondition,
        F: FnOnce(&A) -> C,
    {
        self.advance().precondition_with(check)
    }

    /// Attaches several preconditions of one type.
    pub fn preconditions<C, I>(self, conditions: I) -> PreconditionPipeline<A, Checked>
    where
        C: Precondition,
        I: IntoIterator<Item = C>,
    {
        self.advance().preconditions(conditions)
    }

    /// Skips straight to the operation.
    #[inline]
    pub fn without_preconditions(self) -> PreconditionPipeline<A, Checked> {
        self.advance()
    }

    fn advance(self) -> PreconditionPipeline<A, Checked> {
        PreconditionPipeline { subject: self.subject, gate: self.gate, stage: PhantomData }
    }
}

impl<A> PreconditionPipeline<A, Checked> {
    /// Conjoins another precondition with the gate.
    pub fn precondition<C>(mut self, condition: C) -> Self
    where
        C: Precondition,
    {
        if self.gate.is_success() {
            self.gate = condition.into_gate();
        }
        self
    }

    /// Conjoins a check built from the subject.
    ///
    /// `check` is not invoked when the subject or the gate has already
    /// failed. A panic inside it fails the gate with the canonical fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::condition::HardCondition;
    /// use guard_rail::PreconditionPipeline;
    ///
    /// let state = PreconditionPipeline::of(String::from("Ada"))
    ///     .precondition_with(|name| HardCondition::of(name.len()).is(|n| *n > 3, "name is too short"))
    ///     .map(|name| name.to_uppercase())
    ///     .without_stack_trace();
    /// assert_eq!(state.failure_value().message(), "name is too short");
    /// ```
    pub fn precondition_with<C, F>(mut self, check: F) -> Self
    where
        C: Precondition,
        F: FnOnce(&A) -> C,
    {
        if !self.gate.is_success() {
            return self;
        }
        if let ResultState::Success(subject) = &self.subject {
            self.gate = ResultState::flatten_callback(invoke(|| check(subject).into_gate()));
        }
        self
    }

    /// Conjoins every condition in order, stopping at the first failure.
    pub fn preconditions<C, I>(self, conditions: I) -> Self
    where
        C: Precondition,
        I: IntoIterator<Item = C>,
    {
        conditions.into_iter().fold(self, |pipeline, condition| pipeline.precondition(condition))
    }

    /// The gate as it stands.
    #[must_use]
    #[inline]
    pub fn gate(&self) -> &ResultState<()> {
        &self.gate
    }

    /// Runs a transformation over the subject.
    pub fn map<B, F>(self, f: F) -> Operated<B>
    where
        F: FnOnce(A) -> B,
    {
        self.operate(|subject| ResultState::Success(subject).map(f))
    }

    /// Runs a transformation that may produce nothing.
    pub fn map_option<B, F>(self, f: F) -> Operated<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.operate(|subject| ResultState::Success(subject).map_option(f))
    }

    /// Runs a failable operation over the subject.
    pub fn flat_map<B, F>(self, f: F) -> Operated<B>
    where
        F: FnOnce(A) -> ResultState<B>,
    {
        self.operate(|subject| ResultState::Success(subject).flat_map(f))
    }

    /// Runs a side effect over the subject.
    pub fn run<F>(self, f: F) -> Operated<()>
    where
        F: FnOnce(A),
    {
        self.map(f)
    }

    fn operate<B, F>(self, operation: F) -> Operated<B>
    where
        F: FnOnce(A) -> ResultState<B>,
    {
        let result = match self.subject {
            ResultState::Success(subject) => match self.gate {
                ResultState::Success(()) => operation(subject),
                ResultState::Failure(failure) => ResultState::Failure(failure),
                ResultState::Empty => ResultState::Empty,
            },
            ResultState::Failure(failure) => ResultState::Failure(failure),
            ResultState::Empty => ResultState::Empty,
        };
        Operated { result }
    }
}

/// Outcome of a pipeline's operation, waiting for its provenance decision.
#[must_use = "resolve the outcome with `tracked_as` or `without_stack_trace`"]
#[derive(Debug, Clone, PartialEq)]
pub struct Operated<B> {
    result: ResultState<B>,
}

impl<B> Operated<B> {
    /// Stamps `method` onto any failure as the logical operation's name.
    pub fn tracked_as(self, method: impl Into<Cow<'static, str>>) -> ResultState<B> {
        self.tracked_with(&ErrorTracker::default(), method)
    }

    /// As [`tracked_as`](Self::tracked_as) with a custom tracker.
    pub fn tracked_with(self, tracker: &ErrorTracker, method: impl Into<Cow<'static, str>>) -> ResultState<B> {
        match self.result {
            ResultState::Failure(failure) => {
                let method = method.into();
                log_debug!("operation `{}` failed: {}", method, failure.message());
                ResultState::Failure(tracker.track(failure, method))
            },
            other => other,
        }
    }

    /// Leaves provenance untouched, for internal helper calls.
    #[inline]
    pub fn without_stack_trace(self) -> ResultState<B> {
        self.result
    }
}
