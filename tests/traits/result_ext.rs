use guard_rail::traits::{OptionExt, ResultExt};
use guard_rail::{FailureKind, ResultState};

#[test]
fn ctx_on_ok_keeps_value() {
    let result: Result<u16, std::num::ParseIntError> = "8080".parse();
    assert_eq!(result.ctx("reading port"), ResultState::success(8080));
}

#[test]
fn ctx_on_err_wraps_error_as_cause() {
    let failure = "port".parse::<u16>().ctx("reading port").failure_value();

    assert_eq!(failure.message(), "reading port");
    assert_eq!(failure.kind(), FailureKind::RuleViolation);
    assert_eq!(failure.cause().map(|c| c.message()), Some("invalid digit found in string"));
}

#[test]
fn ctx_with_is_lazy() {
    let mut called = false;
    let _ = "1".parse::<u8>().ctx_with(|| {
        called = true;
        "should not be called".to_string()
    });
    assert!(!called);

    let state = "x".parse::<u8>().ctx_with(|| format!("parsing {}", "x"));
    assert_eq!(state.failure_value().message(), "parsing x");
}

#[test]
fn option_lifts_choose_none_meaning() {
    assert_eq!(Some(1).or_failure("missing"), ResultState::success(1));
    assert_eq!(None::<i32>.or_failure("missing"), ResultState::failure("missing"));
    assert!(None::<i32>.or_empty().is_empty());
    assert_eq!(Some(2).or_empty(), ResultState::success(2));
}
