//! Provenance tracking and failure rendering.
//!
//! A failure that bubbles through several tracked calls reads like a call
//! stack: `"add: insert: index out of range"`. The chain lives on the
//! [`FailureValue`] as structured data, so stamping never duplicates a name
//! and stripping never has to guess which `"...: "` prefixes are markers.
//!
//! # Examples
//!
//! ```
//! use guard_rail::tracker::ErrorTracker;
//! use guard_rail::FailureValue;
//!
//! let tracker = ErrorTracker::default();
//! let failure = tracker.track(FailureValue::new("index out of range"), "insert");
//! let failure = tracker.track(failure, "insert");
//! let failure = tracker.track(failure, "add");
//!
//! assert_eq!(tracker.render(&failure), "add: insert: index out of range");
//!
//! let failure = tracker.remove_called_by_method_prefixes(failure);
//! assert_eq!(tracker.render(&failure), "index out of range");
//! ```

use crate::macros::{log_debug, log_trace};
use crate::types::{ErrorVec, FailureKind, FailureValue};
use std::borrow::Cow;

pub mod report_format;

pub use report_format::ReportFormatConfig;

/// Stamps, strips and renders provenance; merges failures into reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTracker {
    config: ReportFormatConfig,
}

impl ErrorTracker {
    #[inline]
    pub fn new(config: ReportFormatConfig) -> Self {
        Self { config }
    }

    #[must_use]
    #[inline]
    pub fn config(&self) -> &ReportFormatConfig {
        &self.config
    }

    /// Prepends `method` to the failure's provenance chain.
    ///
    /// A name already present anywhere in the chain is not added again, so a
    /// failure passing through the same tracked method repeatedly carries a
    /// single marker for it.
    pub fn track(&self, mut failure: FailureValue, method: impl Into<Cow<'static, str>>) -> FailureValue {
        let method = method.into();
        if failure.trace.iter().any(|name| *name == method) {
            return failure;
        }
        log_debug!("tracking failure under `{}`", method);
        failure.trace.insert(0, method);
        failure
    }

    /// Drops every provenance marker from the failure.
    ///
    /// Used when a collaborator's failure is re-raised as a top-level error
    /// and its internal call path is no longer relevant.
    pub fn remove_called_by_method_prefixes(&self, mut failure: FailureValue) -> FailureValue {
        failure.trace.clear();
        failure
    }

    /// Renders provenance markers followed by the message.
    #[must_use]
    pub fn render(&self, failure: &FailureValue) -> String {
        let separator = self.config.marker_separator.as_ref();
        let capacity = failure
            .trace
            .iter()
            .map(|name| name.len() + separator.len())
            .sum::<usize>()
            + failure.message.len();
        let mut rendered = String::with_capacity(capacity);
        for name in &failure.trace {
            rendered.push_str(name);
            rendered.push_str(separator);
        }
        rendered.push_str(&failure.message);
        rendered
    }

    /// Strips leading `"<name><separator>"` markers from already rendered
    /// text, for any of the given method names.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::tracker::ErrorTracker;
    ///
    /// let tracker = ErrorTracker::default();
    /// let text = "add: insert: Error: index out of range";
    /// assert_eq!(tracker.strip_markers(text, ["add", "insert"]), "Error: index out of range");
    /// ```
    #[must_use]
    pub fn strip_markers<'a, 'n, I>(&self, text: &'a str, names: I) -> &'a str
    where
        I: IntoIterator<Item = &'n str>,
    {
        let names: Vec<&str> = names.into_iter().collect();
        let separator = self.config.marker_separator.as_ref();
        let mut rest = text;
        'strip: loop {
            for name in &names {
                if let Some(tail) = rest.strip_prefix(*name).and_then(|t| t.strip_prefix(separator)) {
                    rest = tail;
                    continue 'strip;
                }
            }
            return rest;
        }
    }

    /// Renders every failure as a numbered report entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::tracker::ErrorTracker;
    /// use guard_rail::FailureValue;
    ///
    /// let report = ErrorTracker::default()
    ///     .report(&[FailureValue::new("too short"), FailureValue::new("not upper case")]);
    /// assert_eq!(report, "1) too short\n2) not upper case");
    /// ```
    #[must_use]
    pub fn report(&self, failures: &[FailureValue]) -> String {
        let rendered: Vec<String> = failures.iter().map(|failure| self.render(failure)).collect();
        self.config.format_report(rendered.iter().map(String::as_str))
    }

    /// Folds accumulated failures into at most one failure.
    ///
    /// No failures yields `None`; a single failure is returned as-is; several
    /// failures become one rule violation whose message is the numbered
    /// report, in the order given.
    pub fn merge(&self, failures: ErrorVec<FailureValue>) -> Option<FailureValue> {
        match failures.len() {
            0 => None,
            1 => failures.into_iter().next(),
            count => {
                log_trace!("merging {} failures into one report", count);
                Some(FailureValue::with_kind(self.report(&failures), FailureKind::RuleViolation))
            },
        }
    }
}
