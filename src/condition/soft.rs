use crate::condition::evaluate;
use crate::condition::hard::HardCondition;
use crate::condition::stage::{Checked, Unchecked};
use crate::tracker::ErrorTracker;
use crate::traits::Nullable;
use crate::types::{ErrorVec, FailureValue, ResultState};
use std::marker::PhantomData;

/// Accumulating validation chain over a pinned subject.
///
/// Every check re-tests the subject, independently of earlier checks, and
/// records at most one failure. Passing checks record nothing. The terminal
/// step either hands back the subject or merges every recorded failure into
/// one report, numbered in check order.
///
/// # Examples
///
/// ```
/// use guard_rail::condition::SoftCondition;
///
/// let report = SoftCondition::of("ab")
///     .is(|s| s.len() >= 5, "must have at least 5 characters")
///     .and_is(|s| s.chars().all(char::is_uppercase), "must be upper case")
///     .then_get_or_error_message();
///
/// assert_eq!(
///     report.failure_value().message(),
///     "1) must have at least 5 characters\n2) must be upper case"
/// );
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct SoftCondition<T, S = Checked> {
    subject: T,
    errors: ErrorVec<FailureValue>,
    stage: PhantomData<S>,
}

impl<T> SoftCondition<T, Unchecked> {
    /// Starts a chain over `subject`.
    #[inline]
    pub fn of(subject: T) -> Self {
        Self { subject, errors: ErrorVec::new(), stage: PhantomData }
    }

    pub fn is<P>(self, predicate: P, message: impl Into<String>) -> SoftCondition<T, Checked>
    where
        P: FnOnce(&T) -> bool,
    {
        self.advance().and_is(predicate, message)
    }

    pub fn is_not<P>(self, predicate: P, message: impl Into<String>) -> SoftCondition<T, Checked>
    where
        P: FnOnce(&T) -> bool,
    {
        self.advance().and_is_not(predicate, message)
    }

    pub fn is_null(self, message: impl Into<String>) -> SoftCondition<T, Checked>
    where
        T: Nullable,
    {
        self.advance().and_is_null(message)
    }

    pub fn is_non_null(self, message: impl Into<String>) -> SoftCondition<T, Checked>
    where
        T: Nullable,
    {
        self.advance().and_is_non_null(message)
    }

    fn advance(self) -> SoftCondition<T, Checked> {
        SoftCondition { subject: self.subject, errors: self.errors, stage: PhantomData }
    }
}

impl<T, S> SoftCondition<T, S> {
    /// The pinned subject.
    #[must_use]
    #[inline]
    pub fn subject(&self) -> &T {
        &self.subject
    }

    /// Failures recorded so far, in check order.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[FailureValue] {
        &self.errors
    }

    #[must_use]
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl<T> SoftCondition<T, Checked> {
    pub fn and_is<P>(mut self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.errors.extend(evaluate(&self.subject, predicate, true, message));
        self
    }

    pub fn and_is_not<P>(mut self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.errors.extend(evaluate(&self.subject, predicate, false, message));
        self
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

    /// Records the verdict of an independent fail-fast chain.
    ///
    /// Only the failure travels; the other chain's subject is dropped.
    pub fn and_for_other_condition<U>(mut self, other: HardCondition<U, Checked>) -> Self {
        if let Some(failure) = other.verdict() {
            self.errors.push(failure.clone());
        }
        self
    }

    /// Appends every failure recorded by another soft chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::condition::SoftCondition;
    ///
    /// let street = SoftCondition::of("").is_not(|s| s.is_empty(), "street is empty");
    /// let user = SoftCondition::of("bob")
    ///     .is(|s| s.len() > 3, "name is too short")
    ///     .and_for_other_soft_condition(street);
    /// assert_eq!(user.error_count(), 2);
    /// ```
    pub fn and_for_other_soft_condition<U, S>(mut self, other: SoftCondition<U, S>) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    #[inline]
    pub fn is_approved(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the subject when every check passed, otherwise `default`.
    #[must_use]
    pub fn then_get_or_else(self, default: T) -> T {
        if self.errors.is_empty() {
            self.subject
        } else {
            default
        }
    }

    /// Reports the recorded failures without consuming the chain.
    pub fn generate_result_error_if_exists(&self) -> ResultState<()> {
        self.generate_result_error_if_exists_with(&ErrorTracker::default())
    }

    /// As [`generate_result_error_if_exists`](Self::generate_result_error_if_exists)
    /// with a custom tracker.
    pub fn generate_result_error_if_exists_with(&self, tracker: &ErrorTracker) -> ResultState<()> {
        match tracker.merge(self.errors.clone()) {
            None => ResultState::Success(()),
            Some(failure) => ResultState::Failure(failure),
        }
    }

    /// The subject when every check passed, otherwise the merged report.
    pub fn then_get_or_error_message(self) -> ResultState<T> {
        self.then_get_or_error_message_with(&ErrorTracker::default())
    }

    /// As [`then_get_or_error_message`](Self::then_get_or_error_message)
    /// with a custom tracker.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::condition::SoftCondition;
    /// use guard_rail::tracker::{ErrorTracker, ReportFormatConfig};
    ///
    /// let tracker = ErrorTracker::new(ReportFormatConfig::compact());
    /// let report = SoftCondition::of(0)
    ///     .is(|n| *n > 0, "not positive")
    ///     .and_is(|n| *n % 2 == 1, "not odd")
    ///     .then_get_or_error_message_with(&tracker);
    /// assert_eq!(report.failure_value().message(), "1) not positive; 2) not odd");
    /// ```
    pub fn then_get_or_error_message_with(self, tracker: &ErrorTracker) -> ResultState<T> {
        match tracker.merge(self.errors) {
            None => ResultState::Success(self.subject),
            Some(failure) => ResultState::Failure(failure),
        }
    }

    /// The subject, or the merged report as the error.
    pub fn then_approved_or_else_throw(self) -> Result<T, FailureValue> {
        match ErrorTracker::default().merge(self.errors) {
            None => Ok(self.subject),
            Some(failure) => Err(failure),
        }
    }

    /// Merges the recorded failures, dropping the subject.
    pub(crate) fn into_report(self) -> Option<FailureValue> {
        ErrorTracker::default().merge(self.errors)
    }
}
