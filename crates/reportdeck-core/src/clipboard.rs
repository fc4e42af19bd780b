//! Clipboard copy source with whitespace normalization and a legacy fallback.
//!
//! A copy control points at either an editable control (copy its value) or a
//! plain element carrying a `content` data payload. The extracted text is
//! whitespace-normalized before it reaches the clipboard. Writing goes
//! through the platform writer first and a legacy fallback second; copying
//! is best-effort, a double failure is logged and swallowed.

use crate::error::ReportResult;

/// Collapse consecutive whitespace to single spaces and trim the ends.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// What a copy control points at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyTarget {
    /// Contents of an editable control, when the target supports selection.
    pub value: Option<String>,
    /// Literal text from the `content` data payload.
    pub content: Option<String>,
}

impl CopyTarget {
    pub fn editable(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            content: None,
        }
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            value: None,
            content: Some(content.into()),
        }
    }
}

/// Extract the normalized text to copy.
///
/// The editable value wins; a non-selectable target falls back to the
/// `content` payload. Returns `None` when nothing non-blank is available,
/// which makes the copy a no-op.
pub fn extract_text(target: &CopyTarget) -> Option<String> {
    let raw = target.value.as_deref().or(target.content.as_deref())?;
    let text = normalize(raw);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// A destination for copied text. The desktop app supplies the platform
/// clipboard and a legacy webview writer; tests supply mocks.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> ReportResult<()>;
}

/// How a copy attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Platform clipboard took the text.
    Primary,
    /// Legacy fallback took the text.
    Fallback,
    /// Nothing to copy; no writer was touched.
    Skipped,
    /// Both writers failed. Logged, not surfaced.
    Failed,
}

/// Copy the target's text, trying the platform writer then the fallback.
pub fn copy_best_effort(
    primary: &mut dyn ClipboardWriter,
    fallback: &mut dyn ClipboardWriter,
    target: &CopyTarget,
) -> CopyOutcome {
    let Some(text) = extract_text(target) else {
        return CopyOutcome::Skipped;
    };
    match primary.write_text(&text) {
        Ok(()) => CopyOutcome::Primary,
        Err(primary_err) => {
            tracing::debug!(
                "Platform clipboard failed ({}), trying legacy fallback",
                primary_err
            );
            match fallback.write_text(&text) {
                Ok(()) => CopyOutcome::Fallback,
                Err(fallback_err) => {
                    tracing::warn!("Clipboard copy failed: {}", fallback_err);
                    CopyOutcome::Failed
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    #[derive(Default)]
    struct MockWriter {
        written: Vec<String>,
        fail: bool,
    }

    impl ClipboardWriter for MockWriter {
        fn write_text(&mut self, text: &str) -> ReportResult<()> {
            if self.fail {
                return Err(ReportError::ClipboardUnavailable("mock".to_string()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_normalize_collapses_and_trims() {
        assert_eq!(normalize("  foo\n\tbar   baz "), "foo bar baz");
        assert_eq!(normalize("already clean"), "already clean");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(" a \r\n b\t\tc ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_editable_value_wins_over_content() {
        let target = CopyTarget {
            value: Some("PETR4  ".to_string()),
            content: Some("ignored".to_string()),
        };
        assert_eq!(extract_text(&target), Some("PETR4".to_string()));
    }

    #[test]
    fn test_non_selectable_falls_back_to_content() {
        let target = CopyTarget::with_content(" 00.000.000/0001-91 ");
        assert_eq!(extract_text(&target), Some("00.000.000/0001-91".to_string()));
    }

    #[test]
    fn test_empty_target_skips_writers() {
        let mut primary = MockWriter::default();
        let mut fallback = MockWriter::default();

        let blank = CopyTarget::with_content("  \n ");
        assert_eq!(
            copy_best_effort(&mut primary, &mut fallback, &blank),
            CopyOutcome::Skipped
        );
        assert_eq!(
            copy_best_effort(&mut primary, &mut fallback, &CopyTarget::default()),
            CopyOutcome::Skipped
        );
        assert!(primary.written.is_empty());
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn test_primary_writer_preferred() {
        let mut primary = MockWriter::default();
        let mut fallback = MockWriter::default();

        let target = CopyTarget::editable("VALE3");
        assert_eq!(
            copy_best_effort(&mut primary, &mut fallback, &target),
            CopyOutcome::Primary
        );
        assert_eq!(primary.written, vec!["VALE3"]);
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn test_fallback_used_when_primary_fails() {
        let mut primary = MockWriter {
            fail: true,
            ..Default::default()
        };
        let mut fallback = MockWriter::default();

        let target = CopyTarget::editable("  ITUB4\tPN ");
        assert_eq!(
            copy_best_effort(&mut primary, &mut fallback, &target),
            CopyOutcome::Fallback
        );
        assert_eq!(fallback.written, vec!["ITUB4 PN"]);
    }

    #[test]
    fn test_double_failure_is_silent() {
        let mut primary = MockWriter {
            fail: true,
            ..Default::default()
        };
        let mut fallback = MockWriter {
            fail: true,
            ..Default::default()
        };

        let target = CopyTarget::editable("PETR4");
        assert_eq!(
            copy_best_effort(&mut primary, &mut fallback, &target),
            CopyOutcome::Failed
        );
    }
}
