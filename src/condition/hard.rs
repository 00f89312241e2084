use crate::condition::evaluate;
use crate::condition::stage::{Checked, Unchecked};
use crate::traits::Nullable;
use crate::types::invoke::invoke;
use crate::types::{FailureValue, ResultState};
use std::marker::PhantomData;

/// Fail-fast validation chain over a pinned subject.
///
/// The subject stays untouched for the life of the chain; the verdict is
/// either passing or the first failure met. Once failed, every `and_*` check
/// is an identity (its predicate is not even invoked). `or_*` checks re-test
/// the subject, so a failed chain can still pass through an alternate
/// predicate.
///
/// Checks fold left to right: `a.and_is(b).or_is(c)` reads as `(a && b) || c`.
///
/// # Examples
///
/// ```
/// use guard_rail::condition::HardCondition;
///
/// let port = HardCondition::of(8080u32)
///     .is(|p| *p >= 1024, "port is privileged")
///     .and_is(|p| *p <= 65535, "port is out of range")
///     .then_approved_or_else_throw();
/// assert_eq!(port, Ok(8080));
///
/// let port = HardCondition::of(80u32)
///     .is(|p| *p >= 1024, "port is privileged")
///     .or_is(|p| *p == 80, "port is privileged and not http")
///     .then_approved_or_else_throw();
/// assert_eq!(port, Ok(80));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct HardCondition<T, S = Checked> {
    subject: T,
    verdict: Option<FailureValue>,
    stage: PhantomData<S>,
}

impl<T> HardCondition<T, Unchecked> {
    /// Starts a chain over `subject`.
    #[inline]
    pub fn of(subject: T) -> Self {
        Self { subject, verdict: None, stage: PhantomData }
    }

    /// Requires `predicate` to hold.
    pub fn is<P>(self, predicate: P, message: impl Into<String>) -> HardCondition<T, Checked>
    where
        P: FnOnce(&T) -> bool,
    {
        self.advance().and_is(predicate, message)
    }

    /// Requires `predicate` not to hold.
    pub fn is_not<P>(self, predicate: P, message: impl Into<String>) -> HardCondition<T, Checked>
    where
        P: FnOnce(&T) -> bool,
    {
        self.advance().and_is_not(predicate, message)
    }

    /// Requires the subject to be null-equivalent.
    pub fn is_null(self, message: impl Into<String>) -> HardCondition<T, Checked>
    where
        T: Nullable,
    {
        self.advance().and_is_null(message)
    }

    /// Requires the subject not to be null-equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::condition::HardCondition;
    ///
    /// let missing: Option<&str> = None;
    /// let verdict = HardCondition::of(missing).is_non_null("name is required");
    /// assert_eq!(verdict.verdict().map(|f| f.message()), Some("name is required"));
    /// ```
    pub fn is_non_null(self, message: impl Into<String>) -> HardCondition<T, Checked>
    where
        T: Nullable,
    {
        self.advance().and_is_non_null(message)
    }

    fn advance(self) -> HardCondition<T, Checked> {
        HardCondition { subject: self.subject, verdict: self.verdict, stage: PhantomData }
    }
}

impl<T, S> HardCondition<T, S> {
    /// The pinned subject.
    #[must_use]
    #[inline]
    pub fn subject(&self) -> &T {
        &self.subject
    }
}

impl<T> HardCondition<T, Checked> {
    /// Conjunction: requires `predicate` to hold as well.
    pub fn and_is<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.verdict.is_some() {
            return self;
        }
        let verdict = evaluate(&self.subject, predicate, true, message);
        Self { verdict, ..self }
    }

    /// Conjunction: requires `predicate` not to hold.
    pub fn and_is_not<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.verdict.is_some() {
            return self;
        }
        let verdict = evaluate(&self.subject, predicate, false, message);
        Self { verdict, ..self }
    }

    pub fn and_is_null(self, message: impl Into<String>) -> Self
    where
        T: Nullable,
    {
        self.and_is(T::is_null, message)
    }

    pub fn and_is_non_null(self, message: impl Into<String>) -> Self
    where
        T: Nullable,
    {
        self.and_is(T::is_non_null, message)
    }

    /// Disjunction: when failed, re-tests the subject with `predicate`.
    ///
    /// A pass clears the failure; another miss replaces it with `message`.
    /// Identity when the chain is passing.
    pub fn or_is<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.verdict.is_none() {
            return self;
        }
        let verdict = evaluate(&self.subject, predicate, true, message);
        Self { verdict, ..self }
    }

    /// Disjunction with a negated predicate.
    pub fn or_is_not<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.verdict.is_none() {
            return self;
        }
        let verdict = evaluate(&self.subject, predicate, false, message);
        Self { verdict, ..self }
    }

    /// Null-guard on an unrelated value, folded into this chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::condition::HardCondition;
    ///
    /// let comparator: Option<fn(&i32, &i32) -> bool> = None;
    /// let verdict = HardCondition::of(3)
    ///     .is(|n| *n > 0, "index is negative")
    ///     .and_other_object_is_not_null(&comparator, "comparator is required");
    /// assert!(!verdict.is_approved());
    /// ```
    pub fn and_other_object_is_not_null<N>(self, other: &N, message: impl Into<String>) -> Self
    where
        N: Nullable + ?Sized,
    {
        if self.verdict.is_some() {
            return self;
        }
        let verdict = evaluate(&other, |other| other.is_non_null(), true, message);
        Self { verdict, ..self }
    }

    /// Merges an independent chain into this one.
    ///
    /// Conjunctive: the first failure wins. The result carries the other
    /// chain's subject forward.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::condition::HardCondition;
    ///
    /// let index = HardCondition::of(2usize).is(|i| *i < 10, "index out of range");
    /// let merged = HardCondition::of("value")
    ///     .is_not(|s| s.is_empty(), "value is empty")
    ///     .and_for_other_condition(index);
    /// assert_eq!(merged.then_approved_or_else_throw(), Ok(2));
    /// ```
    pub fn and_for_other_condition<U>(self, other: HardCondition<U, Checked>) -> HardCondition<U, Checked> {
        match self.verdict {
            Some(failure) => {
                HardCondition { subject: other.subject, verdict: Some(failure), stage: PhantomData }
            },
            None => other,
        }
    }

    /// Returns `true` while no check has failed.
    #[must_use]
    #[inline]
    pub fn is_approved(&self) -> bool {
        self.verdict.is_none()
    }

    /// The failure that froze the chain, if any.
    #[must_use]
    #[inline]
    pub fn verdict(&self) -> Option<&FailureValue> {
        self.verdict.as_ref()
    }

    /// The chain's resolution as a state over the subject.
    pub fn into_state(self) -> ResultState<T> {
        match self.verdict {
            None => ResultState::Success(self.subject),
            Some(failure) => ResultState::Failure(failure),
        }
    }

    /// Produces a new value when approved.
    pub fn return_value<U, F>(self, supplier: F) -> ResultState<U>
    where
        F: FnOnce() -> U,
    {
        match self.verdict {
            None => ResultState::from_callback(invoke(supplier)),
            Some(failure) => ResultState::Failure(failure),
        }
    }

    /// Transforms the subject when approved.
    pub fn map_to<U, F>(self, f: F) -> ResultState<U>
    where
        F: FnOnce(T) -> U,
    {
        self.into_state().map(f)
    }

    /// Chains a computation yielding a state when approved.
    pub fn flat_map_to<U, F>(self, f: F) -> ResultState<U>
    where
        F: FnOnce(T) -> ResultState<U>,
    {
        self.into_state().flat_map(f)
    }

    /// Returns the subject, or the accumulated failure as the error.
    pub fn then_approved_or_else_throw(self) -> Result<T, FailureValue> {
        match self.verdict {
            None => Ok(self.subject),
            Some(failure) => Err(failure),
        }
    }

    /// Returns the subject, or a caller-supplied error when any check failed.
    ///
    /// The accumulated message is discarded; use this when the chain is a
    /// pure gate.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::condition::HardCondition;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct OutOfBounds;
    ///
    /// let index = HardCondition::of(12usize)
    ///     .is(|i| *i < 10, "index out of range")
    ///     .get_value_or_else_throw(|| OutOfBounds);
    /// assert_eq!(index, Err(OutOfBounds));
    /// ```
    pub fn get_value_or_else_throw<E, F>(self, fault: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self.verdict {
            None => Ok(self.subject),
            Some(_) => Err(fault()),
        }
    }
}
