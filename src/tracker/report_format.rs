//! Formatting configuration for provenance markers and multi-error reports.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration consumed by [`ErrorTracker`](crate::tracker::ErrorTracker).
///
/// The default renders provenance as `"outer: inner: message"` and
/// multi-error reports as a newline-separated, 1-indexed list:
///
/// ```text
/// 1) first violation
/// 2) second violation
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormatConfig {
    /// Placed between a method name and whatever follows it.
    pub marker_separator: Cow<'static, str>,
    /// Placed between report entries.
    pub line_separator: Cow<'static, str>,
    /// Number each entry (`1) `, `2) `, ...). When `false`, `bullet` is used.
    pub numbered: bool,
    /// Placed after the entry number.
    pub number_suffix: Cow<'static, str>,
    /// Placed before each entry when `numbered` is `false`.
    pub bullet: Cow<'static, str>,
}

impl Default for ReportFormatConfig {
    fn default() -> Self {
        Self {
            marker_separator: Cow::Borrowed(": "),
            line_separator: Cow::Borrowed("\n"),
            numbered: true,
            number_suffix: Cow::Borrowed(") "),
            bullet: Cow::Borrowed("- "),
        }
    }
}

impl ReportFormatConfig {
    /// Single-line report: `1) a; 2) b`.
    #[inline]
    pub fn compact() -> Self {
        Self { line_separator: Cow::Borrowed("; "), ..Default::default() }
    }

    /// Unnumbered report with `- ` bullets.
    #[inline]
    pub fn bulleted() -> Self {
        Self { numbered: false, ..Default::default() }
    }

    /// Formats a single entry; `index` is zero-based.
    pub fn format_item(&self, index: usize, text: &str) -> String {
        if self.numbered {
            format!("{}{}{}", index + 1, self.number_suffix, text)
        } else {
            format!("{}{}", self.bullet, text)
        }
    }

    /// Joins pre-rendered entries into a report.
    pub fn format_report<'a, I>(&self, entries: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, text)| self.format_item(index, text))
            .collect::<Vec<_>>()
            .join(self.line_separator.as_ref())
    }
}
