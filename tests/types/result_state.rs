use guard_rail::types::messages::{
    BLANK_FAILURE_MESSAGE, EMPTY_OUTCOME, PRODUCER_FAULT, PRODUCER_NO_VALUE,
};
use guard_rail::{FailureKind, FailureValue, ResultState};
use std::cell::Cell;

#[test]
fn validate_keeps_passing_success() {
    let state = ResultState::success(5).validate(|n| *n > 3, "too small");
    assert_eq!(state, ResultState::success(5));
}

#[test]
fn validate_fails_with_caller_message() {
    let state = ResultState::success(5).validate(|n| *n > 10, "too small");
    assert_eq!(state, ResultState::failure("too small"));

    let failure = state.failure_value();
    assert_eq!(failure.kind(), FailureKind::RuleViolation);
    assert!(failure.cause().is_none());
}

#[test]
fn map_over_failure_and_empty_is_identity() {
    let called = Cell::new(0);

    let failed = ResultState::<i32>::failure("broken");
    let mapped = failed.clone().map(|n| {
        called.set(called.get() + 1);
        n + 1
    });
    assert_eq!(mapped, failed);

    let empty = ResultState::<i32>::empty().map(|n| {
        called.set(called.get() + 1);
        n + 1
    });
    assert!(empty.is_empty());
    assert_eq!(called.get(), 0);
}

#[test]
fn map_panic_becomes_producer_fault() {
    let state = ResultState::success(1).map(|_| -> i32 { panic!("divide by zero") });

    let failure = state.failure_value();
    assert_eq!(failure.message(), PRODUCER_FAULT);
    assert_eq!(failure.kind(), FailureKind::CallbackFault);
    assert_eq!(failure.cause().map(|c| c.message()), Some("divide by zero"));
}

#[test]
fn map_option_none_becomes_producer_no_value() {
    let state = ResultState::success("key").map_option(|_| None::<u32>);

    let failure = state.failure_value();
    assert_eq!(failure.message(), PRODUCER_NO_VALUE);
    assert_eq!(failure.kind(), FailureKind::CallbackNoValue);
    assert!(failure.is_callback_fault());
}

#[test]
fn flat_map_propagates_inner_states() {
    let inner_empty = ResultState::success(1).flat_map(|_| ResultState::<i32>::empty());
    assert!(inner_empty.is_empty());

    let inner_failure = ResultState::success(1).flat_map(|_| ResultState::<i32>::failure("inner"));
    assert_eq!(inner_failure.failure_value().message(), "inner");

    let faulted = ResultState::success(1).flat_map(|_| -> ResultState<i32> { panic!("boom") });
    assert_eq!(faulted.failure_value().message(), PRODUCER_FAULT);
}

#[test]
fn validate_panicking_predicate_becomes_producer_fault() {
    let state = ResultState::success(vec![1]).validate(|v| v[3] > 0, "out of range");
    assert_eq!(state.failure_value().message(), PRODUCER_FAULT);
}

#[test]
fn validate_option_undecided_becomes_producer_no_value() {
    let state = ResultState::success(3).validate_option(|_| None, "unreachable");
    assert_eq!(state.failure_value().message(), PRODUCER_NO_VALUE);

    let state = ResultState::success(3).reject_option(|n| Some(*n == 3), "three is reserved");
    assert_eq!(state.failure_value().message(), "three is reserved");
}

#[test]
fn validate_does_not_run_on_failure() {
    let called = Cell::new(false);
    let state = ResultState::<i32>::failure("first").validate(
        |_| {
            called.set(true);
            false
        },
        "second",
    );
    assert_eq!(state.failure_value().message(), "first");
    assert!(!called.get());
}

#[test]
fn or_recovers_from_failure() {
    let recovered = ResultState::failure("x").or(|| ResultState::success(5));
    assert_eq!(recovered, ResultState::success(5));
}

#[test]
fn or_keeps_success_without_calling_alternative() {
    let called = Cell::new(false);
    let kept = ResultState::success(5).or(|| {
        called.set(true);
        ResultState::success(6)
    });
    assert_eq!(kept, ResultState::success(5));
    assert!(!called.get());
}

#[test]
fn or_alternative_failure_replaces_original() {
    let state = ResultState::<i32>::failure("e1").or(|| ResultState::failure("e2"));
    assert_eq!(state, ResultState::failure("e2"));
}

#[test]
fn or_recovers_from_empty() {
    let state = ResultState::empty().or(|| ResultState::success("fallback"));
    assert_eq!(state, ResultState::success("fallback"));
}

#[test]
fn blank_failure_message_is_contract_violation() {
    let failure = ResultState::<()>::failure("").failure_value();
    assert_eq!(failure.kind(), FailureKind::ContractViolation);
    assert!(failure.message().starts_with(BLANK_FAILURE_MESSAGE));
    assert!(failure.message().contains("result_state.rs"));
}

#[test]
fn from_nullable_names_argument_and_call_site() {
    let failure = ResultState::<String>::from_nullable(None, "owner").failure_value();
    assert_eq!(failure.kind(), FailureKind::ContractViolation);
    assert!(failure.message().starts_with("argument `owner` must not be null"));
    assert!(failure.message().contains("result_state.rs"));

    let present = ResultState::from_nullable(Some(4), "owner");
    assert_eq!(present, ResultState::success(4));
}

#[test]
fn failure_with_cause_keeps_source_chain() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
    let failure = ResultState::<()>::failure_with_cause("loading configuration", &io).failure_value();

    assert_eq!(failure.message(), "loading configuration");
    assert_eq!(failure.cause().map(|c| c.message()), Some("config.toml"));
}

#[test]
fn get_or_else_treats_empty_as_default() {
    assert_eq!(ResultState::success(1).get_or_else(9), 1);
    assert_eq!(ResultState::failure("x").get_or_else(9), 9);
    assert_eq!(ResultState::empty().get_or_else(9), 9);
    assert_eq!(ResultState::<i32>::empty().get_or_else_with(|| 7), 7);
}

#[test]
fn empty_to_failure_only_touches_empty() {
    assert_eq!(
        ResultState::<i32>::empty().empty_to_failure("nothing found"),
        ResultState::failure("nothing found")
    );
    assert_eq!(ResultState::success(1).empty_to_failure("nothing found"), ResultState::success(1));
}

#[test]
fn conversions_map_every_state() {
    assert_eq!(ResultState::success(1).ok(), Some(1));
    assert_eq!(ResultState::<i32>::empty().ok(), None);
    assert_eq!(ResultState::<i32>::failure("x").err().map(|f| f.to_string()), Some("x".to_string()));

    assert_eq!(ResultState::success(1).into_result(), Ok(Some(1)));
    assert_eq!(ResultState::<i32>::empty().into_result(), Ok(None));
    assert!(ResultState::<i32>::failure("x").into_result().is_err());
}

#[test]
fn from_std_types() {
    let state: ResultState<u8> = Some(3).into();
    assert_eq!(state, ResultState::success(3));

    let state: ResultState<u8> = None.into();
    assert!(state.is_empty());

    let state: ResultState<u8> = "300".parse::<u8>().into();
    let failure = state.failure_value();
    assert_eq!(failure.message(), "number too large to fit in target type");
    assert!(failure.cause().is_some());

    let state: ResultState<u8> = FailureValue::new("direct").into();
    assert_eq!(state, ResultState::failure("direct"));
}

#[test]
fn fold_visits_exactly_one_branch() {
    let describe = |state: ResultState<i32>| {
        state.fold(|n| format!("ok {n}"), |f| format!("err {f}"), || "empty".to_string())
    };
    assert_eq!(describe(ResultState::success(2)), "ok 2");
    assert_eq!(describe(ResultState::failure("bad")), "err bad");
    assert_eq!(describe(ResultState::empty()), "empty");
}

#[test]
fn tracked_and_prepend_only_touch_failures() {
    let state = ResultState::<i32>::failure("negative")
        .prepend_failure_message("cannot parse age")
        .tracked("parse_age");
    assert_eq!(state.failure_value().to_string(), "parse_age: cannot parse age\nnegative");

    assert_eq!(ResultState::success(1).tracked("parse_age"), ResultState::success(1));
    assert!(ResultState::<i32>::empty().prepend_failure_message("x").is_empty());
}

#[test]
fn inspect_sees_only_success() {
    let seen = Cell::new(0);
    let _ = ResultState::success(4).inspect(|n| seen.set(*n));
    let _ = ResultState::<i32>::failure("x").inspect(|_| seen.set(99));
    assert_eq!(seen.get(), 4);
}

#[test]
#[should_panic(expected = "called `success_value` on a failure: boom")]
fn success_value_panics_on_failure() {
    let _ = ResultState::<i32>::failure("boom").success_value();
}

#[test]
#[should_panic(expected = "called `failure_value` on an empty state")]
fn failure_value_panics_on_empty() {
    let _ = ResultState::<i32>::empty().failure_value();
}

/// A collaborator that carries its own failure state.
#[derive(Debug, PartialEq)]
enum FailableList {
    Items(Vec<i32>),
    Failed(String),
}

impl FailableList {
    fn from_state(state: ResultState<Vec<i32>>) -> Self {
        state.map(FailableList::Items).get_or_convert_to_failure_state(|failure| {
            FailableList::Failed(failure.to_string())
        })
    }
}

#[test]
fn collaborator_builds_failed_instance_verbatim() {
    let list = FailableList::from_state(ResultState::failure("index out of range").tracked("insert"));
    assert_eq!(list, FailableList::Failed("insert: index out of range".to_string()));

    let list = FailableList::from_state(ResultState::success(vec![1, 2]));
    assert_eq!(list, FailableList::Items(vec![1, 2]));

    let list = FailableList::from_state(ResultState::empty());
    assert_eq!(list, FailableList::Failed(EMPTY_OUTCOME.to_string()));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_preserves_state() {
    let state = ResultState::<u32>::failure("too small").tracked("check");
    let json = serde_json::to_string(&state).unwrap();
    let back: ResultState<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
