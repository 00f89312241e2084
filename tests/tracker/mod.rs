use guard_rail::tracker::{ErrorTracker, ReportFormatConfig};
use guard_rail::{ErrorVec, FailureKind, FailureValue};
use smallvec::smallvec;

#[test]
fn track_prepends_outermost_name() {
    let tracker = ErrorTracker::default();
    let failure = tracker.track(FailureValue::new("index out of range"), "insert");
    let failure = tracker.track(failure, "add");

    assert_eq!(tracker.render(&failure), "add: insert: index out of range");
}

#[test]
fn track_skips_name_already_in_chain() {
    let tracker = ErrorTracker::default();
    let failure = tracker.track(FailureValue::new("boom"), "insert");
    let failure = tracker.track(failure, "add");
    let failure = tracker.track(failure, "insert");

    assert_eq!(failure.trace().collect::<Vec<_>>(), vec!["add", "insert"]);
}

#[test]
fn remove_prefixes_restores_bare_message() {
    let tracker = ErrorTracker::default();
    let failure = tracker.track(tracker.track(FailureValue::new("boom"), "inner"), "outer");

    let failure = tracker.remove_called_by_method_prefixes(failure);
    assert_eq!(tracker.render(&failure), "boom");
}

#[test]
fn strip_markers_only_strips_known_names() {
    let tracker = ErrorTracker::default();

    assert_eq!(tracker.strip_markers("add: insert: boom", ["add", "insert"]), "boom");
    assert_eq!(tracker.strip_markers("add: insert: boom", ["insert"]), "add: insert: boom");
    assert_eq!(tracker.strip_markers("Error: boom", ["add"]), "Error: boom");
}

#[test]
fn merge_handles_zero_one_and_many() {
    let tracker = ErrorTracker::default();

    assert_eq!(tracker.merge(ErrorVec::new()), None);

    let single = FailureValue::with_kind("only", FailureKind::ContractViolation);
    assert_eq!(tracker.merge(smallvec![single.clone()]), Some(single));

    let merged = tracker
        .merge(smallvec![FailureValue::new("a"), FailureValue::new("b"), FailureValue::new("c")])
        .unwrap();
    assert_eq!(merged.message(), "1) a\n2) b\n3) c");
    assert_eq!(merged.kind(), FailureKind::RuleViolation);
}

#[test]
fn report_renders_entry_provenance() {
    let tracker = ErrorTracker::default();
    let failures = [FailureValue::new("a").tracked("check_a"), FailureValue::new("b")];

    assert_eq!(tracker.report(&failures), "1) check_a: a\n2) b");
}

#[test]
fn compact_and_bulleted_presets() {
    let failures = [FailureValue::new("a"), FailureValue::new("b")];

    assert_eq!(ErrorTracker::new(ReportFormatConfig::compact()).report(&failures), "1) a; 2) b");
    assert_eq!(ErrorTracker::new(ReportFormatConfig::bulleted()).report(&failures), "- a\n- b");
}

#[test]
fn format_item_is_one_indexed() {
    let config = ReportFormatConfig::default();
    assert_eq!(config.format_item(0, "first"), "1) first");
    assert_eq!(config.format_item(9, "tenth"), "10) tenth");
}

#[cfg(feature = "serde")]
#[test]
fn config_deserializes_from_json() {
    let json = r#"{
        "marker_separator": " / ",
        "line_separator": " | ",
        "numbered": true,
        "number_suffix": ". ",
        "bullet": "* "
    }"#;
    let config: ReportFormatConfig = serde_json::from_str(json).unwrap();
    let tracker = ErrorTracker::new(config);

    let failure = FailureValue::new("x").tracked("load");
    assert_eq!(tracker.report(&[failure, FailureValue::new("y")]), "1. load / x | 2. y");
}
