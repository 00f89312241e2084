use guard_rail::{FailureKind, FailureValue, Fault};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
struct Outer(Inner);

#[derive(Debug)]
struct Inner;

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("request failed")
    }
}

impl fmt::Display for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection reset")
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl Error for Inner {}

#[test]
fn fault_walks_source_chain() {
    let fault = Fault::from_error(&Outer(Inner));

    assert_eq!(fault.message(), "request failed");
    assert_eq!(fault.sources().collect::<Vec<_>>(), vec!["connection reset"]);
    assert_eq!(fault.to_string(), "request failed: connection reset");
}

#[test]
fn failure_exposes_cause_as_error_source() {
    let failure = FailureValue::new("sync aborted").with_cause(Fault::new("disk full"));

    let source = failure.source().map(|s| s.to_string());
    assert_eq!(source.as_deref(), Some("disk full"));
}

#[test]
fn with_kind_sets_classification() {
    let failure = FailureValue::with_kind("bad input", FailureKind::ContractViolation);
    assert_eq!(failure.kind(), FailureKind::ContractViolation);
    assert!(!failure.is_callback_fault());
    assert!(FailureKind::CallbackFault.is_callback());
    assert!(FailureKind::CallbackNoValue.is_callback());
    assert!(!FailureKind::RuleViolation.is_callback());
}

#[test]
fn tracking_renders_outermost_first() {
    let failure = FailureValue::new("index out of range").tracked("insert").tracked("add");

    assert_eq!(failure.trace().collect::<Vec<_>>(), vec!["add", "insert"]);
    assert_eq!(failure.to_string(), "add: insert: index out of range");
    assert_eq!(failure.message(), "index out of range");
}

#[test]
fn untracked_drops_every_marker() {
    let failure = FailureValue::new("index out of range").tracked("insert").tracked("add").untracked();

    assert_eq!(failure.trace().count(), 0);
    assert_eq!(failure.to_string(), "index out of range");
}

#[test]
fn prepend_message_keeps_kind_and_trace() {
    let failure = FailureValue::with_kind("negative", FailureKind::ContractViolation)
        .tracked("parse")
        .prepend_message("age rejected");

    assert_eq!(failure.message(), "age rejected\nnegative");
    assert_eq!(failure.kind(), FailureKind::ContractViolation);
    assert_eq!(failure.trace().collect::<Vec<_>>(), vec!["parse"]);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_keeps_cause_and_trace() {
    let failure = FailureValue::new("sync aborted")
        .with_cause(Fault::from_error(&Outer(Inner)))
        .tracked("sync");

    let json = serde_json::to_string(&failure).unwrap();
    let back: FailureValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, failure);
    assert_eq!(back.to_string(), "sync: sync aborted");
}
