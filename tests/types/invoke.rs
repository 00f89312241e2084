use guard_rail::types::invoke::{invoke, invoke_option};
use guard_rail::types::messages::{PRODUCER_FAULT, PRODUCER_NO_VALUE};
use guard_rail::{CallbackFault, FailureKind, FailureValue};

#[test]
fn invoke_returns_value() {
    assert_eq!(invoke(|| "ready"), Ok("ready"));
}

#[test]
fn invoke_captures_string_panic_payload() {
    let id = 17;
    let caught = invoke(|| -> u8 { panic!("worker {id} crashed") });

    match caught {
        Err(CallbackFault::Panicked(fault)) => assert_eq!(fault.message(), "worker 17 crashed"),
        other => panic!("expected a captured panic, got {other:?}"),
    }
}

#[test]
fn invoke_captures_non_string_payload() {
    let caught = invoke(|| -> u8 { std::panic::panic_any(42_i32) });

    match caught {
        Err(CallbackFault::Panicked(fault)) => assert_eq!(fault.message(), "non-string panic payload"),
        other => panic!("expected a captured panic, got {other:?}"),
    }
}

#[test]
fn invoke_option_maps_none_to_no_value() {
    assert_eq!(invoke_option(|| Some(1)), Ok(1));
    assert_eq!(invoke_option(|| None::<i32>), Err(CallbackFault::NoValue));
}

#[test]
fn callback_faults_canonicalize_into_two_messages() {
    let no_value: FailureValue = CallbackFault::NoValue.into();
    assert_eq!(no_value.message(), PRODUCER_NO_VALUE);
    assert_eq!(no_value.kind(), FailureKind::CallbackNoValue);
    assert!(no_value.cause().is_none());

    let panicked = invoke(|| -> u8 { panic!("boom") }).unwrap_err();
    assert_eq!(panicked.to_string(), PRODUCER_FAULT);

    let faulted = panicked.into_failure();
    assert_eq!(faulted.message(), PRODUCER_FAULT);
    assert_eq!(faulted.kind(), FailureKind::CallbackFault);
    assert_eq!(faulted.cause().map(|c| c.message()), Some("boom"));
}
