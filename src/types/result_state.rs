use crate::types::failure::{FailureValue, Fault};
use crate::types::invoke::{invoke, invoke_option, CallbackFault};
use crate::types::messages;
use std::borrow::Cow;
use std::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tri-state outcome of a validated computation.
///
/// `ResultState<T>` is exactly one of:
///
/// * `Success(T)` - a value passed every check;
/// * `Failure(FailureValue)` - a check or a callback failed;
/// * `Empty` - the computation deliberately produced nothing. `Empty` is not
///   an error: it propagates through `map`/`flat_map` like a failure but
///   carries no message.
///
/// Every combinator consumes `self` and returns a new state. A transform
/// applied to `Failure` or `Empty` returns that state unchanged. A transform
/// applied to `Success` runs the callback behind a fault boundary: a panic
/// becomes `Failure(PRODUCER_FAULT)` and a missing value (for the `_option`
/// variants) becomes `Failure(PRODUCER_NO_VALUE)`.
///
/// # Examples
///
/// ```
/// use guard_rail::types::messages::PRODUCER_FAULT;
/// use guard_rail::ResultState;
///
/// let parsed = ResultState::success("42")
///     .map(|s| s.parse::<i32>().unwrap())
///     .validate(|n| *n > 0, "must be positive");
/// assert_eq!(parsed, ResultState::success(42));
///
/// let faulted = ResultState::success("x").map(|s| s.parse::<i32>().unwrap());
/// assert_eq!(faulted.failure_value().message(), PRODUCER_FAULT);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum ResultState<T> {
    Success(T),
    Failure(FailureValue),
    Empty,
}

impl<T> ResultState<T> {
    /// Creates a success.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a success from an optional argument.
    ///
    /// `None` produces a contract-violation failure naming `argument` and the
    /// calling source location.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::{FailureKind, ResultState};
    ///
    /// let missing = ResultState::<u32>::from_nullable(None, "capacity");
    /// let failure = missing.failure_value();
    /// assert_eq!(failure.kind(), FailureKind::ContractViolation);
    /// assert!(failure.message().starts_with("argument `capacity` must not be null"));
    /// ```
    #[track_caller]
    pub fn from_nullable(value: Option<T>, argument: &str) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(FailureValue::null_argument(argument)),
        }
    }

    /// Creates a failure with a caller-supplied message.
    ///
    /// A blank message is itself a contract violation: the result is a
    /// failure carrying [`BLANK_FAILURE_MESSAGE`](messages::BLANK_FAILURE_MESSAGE)
    /// and the call site instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::types::messages::BLANK_FAILURE_MESSAGE;
    /// use guard_rail::ResultState;
    ///
    /// let state = ResultState::<i32>::failure("  ");
    /// assert!(state.failure_value().message().starts_with(BLANK_FAILURE_MESSAGE));
    /// ```
    #[track_caller]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(checked_failure(message.into()))
    }

    /// Creates a failure with a message and a causing error.
    #[track_caller]
    pub fn failure_with_cause(message: impl Into<String>, cause: &dyn Error) -> Self {
        let failure = checked_failure(message.into());
        Self::Failure(failure.with_cause(Fault::from_error(cause)))
    }

    /// Creates a failure from an error, using its `Display` output as the
    /// message.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::ResultState;
    ///
    /// let err = "abc".parse::<u8>().unwrap_err();
    /// let state = ResultState::<u8>::failure_from_fault(&err);
    /// let failure = state.failure_value();
    /// assert_eq!(failure.message(), "invalid digit found in string");
    /// assert!(failure.cause().is_some());
    /// ```
    #[track_caller]
    pub fn failure_from_fault(fault: &dyn Error) -> Self {
        Self::failure_with_cause(fault.to_string(), fault)
    }

    /// The `Empty` state.
    #[inline]
    pub fn empty() -> Self {
        Self::Empty
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Borrows the failure, if any.
    #[must_use]
    #[inline]
    pub fn failure_ref(&self) -> Option<&FailureValue> {
        match self {
            Self::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Transforms the success value.
    ///
    /// A panic inside `f` yields `Failure(PRODUCER_FAULT)` with the panic
    /// message as cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::ResultState;
    ///
    /// assert_eq!(ResultState::success(21).map(|n| n * 2), ResultState::success(42));
    /// assert_eq!(ResultState::<i32>::empty().map(|n| n * 2), ResultState::empty());
    /// ```
    pub fn map<U, F>(self, f: F) -> ResultState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ResultState::from_callback(invoke(move || f(value))),
            Self::Failure(failure) => ResultState::Failure(failure),
            Self::Empty => ResultState::Empty,
        }
    }

    /// Transforms the success value with a callback that may produce nothing.
    ///
    /// `None` yields `Failure(PRODUCER_NO_VALUE)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::types::messages::PRODUCER_NO_VALUE;
    /// use guard_rail::ResultState;
    ///
    /// let state = ResultState::success(vec![1, 2]).map_option(|v| v.into_iter().find(|n| *n > 5));
    /// assert_eq!(state.failure_value().message(), PRODUCER_NO_VALUE);
    /// ```
    pub fn map_option<U, F>(self, f: F) -> ResultState<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Success(value) => ResultState::from_callback(invoke_option(move || f(value))),
            Self::Failure(failure) => ResultState::Failure(failure),
            Self::Empty => ResultState::Empty,
        }
    }

    /// Chains a computation that itself yields a `ResultState`.
    ///
    /// A failure or `Empty` returned by `f` is propagated unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::ResultState;
    ///
    /// fn half(n: i32) -> ResultState<i32> {
    ///     if n % 2 == 0 {
    ///         ResultState::success(n / 2)
    ///     } else {
    ///         ResultState::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(ResultState::success(8).flat_map(half), ResultState::success(4));
    /// assert_eq!(ResultState::success(3).flat_map(half), ResultState::failure("odd"));
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> ResultState<U>
    where
        F: FnOnce(T) -> ResultState<U>,
    {
        match self {
            Self::Success(value) => ResultState::flatten_callback(invoke(move || f(value))),
            Self::Failure(failure) => ResultState::Failure(failure),
            Self::Empty => ResultState::Empty,
        }
    }

    /// Keeps the success only when `predicate` holds, otherwise fails with
    /// `message`.
    pub fn validate<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.check(|value| invoke(|| predicate(value)), true, message)
    }

    /// Keeps the success only when `predicate` does not hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::ResultState;
    ///
    /// let state = ResultState::success("").reject(|s| s.is_empty(), "name is empty");
    /// assert_eq!(state, ResultState::failure("name is empty"));
    /// ```
    pub fn reject<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.check(|value| invoke(|| predicate(value)), false, message)
    }

    /// Like [`validate`](Self::validate) for a predicate that may be
    /// undecided; `None` yields `Failure(PRODUCER_NO_VALUE)`.
    pub fn validate_option<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> Option<bool>,
    {
        self.check(|value| invoke_option(|| predicate(value)), true, message)
    }

    /// Like [`reject`](Self::reject) for a predicate that may be undecided.
    pub fn reject_option<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> Option<bool>,
    {
        self.check(|value| invoke_option(|| predicate(value)), false, message)
    }

    fn check<V>(self, verdict: V, expected: bool, message: impl Into<String>) -> Self
    where
        V: FnOnce(&T) -> Result<bool, CallbackFault>,
    {
        match self {
            Self::Success(value) => match verdict(&value) {
                Ok(outcome) if outcome == expected => Self::Success(value),
                Ok(_) => Self::Failure(FailureValue::new(message)),
                Err(fault) => Self::Failure(fault.into_failure()),
            },
            other => other,
        }
    }

    /// Adopts `alternative` when the state is not a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::ResultState;
    ///
    /// let recovered = ResultState::failure("x").or(|| ResultState::success(5));
    /// assert_eq!(recovered, ResultState::success(5));
    ///
    /// let kept = ResultState::success(5).or(|| ResultState::success(6));
    /// assert_eq!(kept, ResultState::success(5));
    /// ```
    pub fn or<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            _ => Self::flatten_callback(invoke(alternative)),
        }
    }

    /// Discards the success value and continues with `next`.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::ResultState;
    ///
    /// let next = ResultState::success(1).and(|| ResultState::success("done"));
    /// assert_eq!(next, ResultState::success("done"));
    ///
    /// let skipped = ResultState::<i32>::failure("stop").and(|| ResultState::success("done"));
    /// assert_eq!(skipped, ResultState::failure("stop"));
    /// ```
    pub fn and<U, F>(self, next: F) -> ResultState<U>
    where
        F: FnOnce() -> ResultState<U>,
    {
        match self {
            Self::Success(_) => ResultState::flatten_callback(invoke(next)),
            Self::Failure(failure) => ResultState::Failure(failure),
            Self::Empty => ResultState::Empty,
        }
    }

    /// Unwraps the success or returns `default` for `Failure` and `Empty`.
    #[must_use]
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            _ => default,
        }
    }

    /// Unwraps the success or computes a default for `Failure` and `Empty`.
    #[must_use]
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            _ => default(),
        }
    }

    /// Returns the success value.
    ///
    /// Only meant for trust boundaries where the state is known.
    ///
    /// # Panics
    ///
    /// Panics if the state is `Failure` or `Empty`.
    #[track_caller]
    pub fn success_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => panic!("called `success_value` on a failure: {failure}"),
            Self::Empty => panic!("called `success_value` on an empty state"),
        }
    }

    /// Returns the failure.
    ///
    /// # Panics
    ///
    /// Panics if the state is `Success` or `Empty`.
    #[track_caller]
    pub fn failure_value(self) -> FailureValue {
        match self {
            Self::Failure(failure) => failure,
            Self::Success(_) => panic!("called `failure_value` on a success"),
            Self::Empty => panic!("called `failure_value` on an empty state"),
        }
    }

    /// Converts into `Option<T>`, discarding any failure.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into `Option<FailureValue>`, discarding any success value.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<FailureValue> {
        match self {
            Self::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Converts into a `Result`, with `Empty` as `Ok(None)`.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, FailureValue> {
        match self {
            Self::Success(value) => Ok(Some(value)),
            Self::Failure(failure) => Err(failure),
            Self::Empty => Ok(None),
        }
    }

    /// Prepends a line to the failure message; no-op for `Success` and
    /// `Empty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::ResultState;
    ///
    /// let state = ResultState::<i32>::failure("negative").prepend_failure_message("bad age");
    /// assert_eq!(state.failure_value().message(), "bad age\nnegative");
    /// ```
    pub fn prepend_failure_message(self, text: impl AsRef<str>) -> Self {
        self.map_failure(|failure| failure.prepend_message(text))
    }

    /// Transforms the failure; no-op for `Success` and `Empty`.
    pub fn map_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(FailureValue) -> FailureValue,
    {
        match self {
            Self::Failure(failure) => Self::Failure(f(failure)),
            other => other,
        }
    }

    /// Stamps a method name onto the failure's provenance chain.
    #[inline]
    pub fn tracked(self, method: impl Into<Cow<'static, str>>) -> Self {
        self.map_failure(|failure| failure.tracked(method))
    }

    /// Turns `Empty` into a failure with `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::ResultState;
    ///
    /// let state = ResultState::<i32>::empty().empty_to_failure("no element matched");
    /// assert_eq!(state, ResultState::failure("no element matched"));
    /// ```
    pub fn empty_to_failure(self, message: impl Into<String>) -> Self {
        match self {
            Self::Empty => Self::Failure(FailureValue::new(message)),
            other => other,
        }
    }

    /// Runs `f` on the success value and returns the state unchanged.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Collapses all three states into one value.
    pub fn fold<R, S, F, E>(self, on_success: S, on_failure: F, on_empty: E) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(FailureValue) -> R,
        E: FnOnce() -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
            Self::Empty => on_empty(),
        }
    }

    /// Projects the whole state into an arbitrary wrapper type.
    ///
    /// `f` runs directly; a panic inside it propagates to the caller.
    #[inline]
    pub fn map_to<W, F>(self, f: F) -> W
    where
        F: FnOnce(Self) -> W,
    {
        f(self)
    }

    /// Unwraps the success, or lets `handler` build a failure-shaped `T` from
    /// the failure.
    ///
    /// This is how a collaborating type builds its own "failed" instance from
    /// a failure without raising anything. `Empty` is handed to `handler` as
    /// a contract violation carrying [`EMPTY_OUTCOME`](messages::EMPTY_OUTCOME).
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::ResultState;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Reply {
    ///     Ok(u32),
    ///     Rejected(String),
    /// }
    ///
    /// let reply = ResultState::<Reply>::failure("quota exceeded")
    ///     .get_or_convert_to_failure_state(|failure| Reply::Rejected(failure.to_string()));
    /// assert_eq!(reply, Reply::Rejected("quota exceeded".to_string()));
    ///
    /// let reply = ResultState::success(Reply::Ok(3))
    ///     .get_or_convert_to_failure_state(|failure| Reply::Rejected(failure.to_string()));
    /// assert_eq!(reply, Reply::Ok(3));
    /// ```
    pub fn get_or_convert_to_failure_state<F>(self, handler: F) -> T
    where
        F: FnOnce(FailureValue) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => handler(failure),
            Self::Empty => handler(FailureValue::empty_outcome()),
        }
    }

    pub(crate) fn from_callback(outcome: Result<T, CallbackFault>) -> Self {
        match outcome {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(fault.into_failure()),
        }
    }

    pub(crate) fn flatten_callback(outcome: Result<Self, CallbackFault>) -> Self {
        match outcome {
            Ok(state) => state,
            Err(fault) => Self::Failure(fault.into_failure()),
        }
    }
}

#[track_caller]
fn checked_failure(message: String) -> FailureValue {
    if message.trim().is_empty() {
        FailureValue::contract_violation(messages::BLANK_FAILURE_MESSAGE)
    } else {
        FailureValue::new(message)
    }
}

impl<T> From<FailureValue> for ResultState<T> {
    #[inline]
    fn from(failure: FailureValue) -> Self {
        Self::Failure(failure)
    }
}

/// `None` becomes `Empty`.
impl<T> From<Option<T>> for ResultState<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Empty,
        }
    }
}

/// The error becomes the failure message and its cause.
impl<T, E> From<Result<T, E>> for ResultState<T>
where
    E: Error,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(
                FailureValue::new(error.to_string()).with_cause(Fault::from_error(&error)),
            ),
        }
    }
}
