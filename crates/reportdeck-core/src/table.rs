//! Spreadsheet-table mounting.
//!
//! The interactive table widget is an external component; this module owns
//! the row dataset, the localization URL it needs, and the mount-once guard
//! so re-running page initialization never mounts a table twice.

use serde_json::Value;

use crate::error::{ReportError, ReportResult};

/// External interactive table component (sortable, paginated).
pub trait TableViewer {
    fn mount(&mut self, rows: &[Value], language_url: &str);
}

/// Yields the localization resource URL for the table widget: either an
/// explicit URL or a path derived from a static base and a language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationProvider {
    explicit_url: Option<String>,
    base_path: String,
    lang: String,
}

impl LocalizationProvider {
    pub fn new(base_path: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            explicit_url: None,
            base_path: base_path.into(),
            lang: lang.into(),
        }
    }

    /// Prefer an explicit URL over the derived path.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            explicit_url: Some(url.into()),
            base_path: String::new(),
            lang: String::new(),
        }
    }

    pub fn language_url(&self) -> String {
        match &self.explicit_url {
            Some(url) => url.clone(),
            None => format!("{}/{}.json", self.base_path.trim_end_matches('/'), self.lang),
        }
    }
}

/// One spreadsheet table on the page: its rows and whether the interactive
/// viewer has already been mounted on it.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    rows: Vec<Value>,
    mounted: bool,
}

impl SheetTable {
    pub fn from_rows(rows: Vec<Value>) -> Self {
        Self {
            rows,
            mounted: false,
        }
    }

    /// Parse the `items` data payload, a JSON array of rows.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidTableData` when the payload is not a
    /// JSON array.
    pub fn from_items(items: &str) -> ReportResult<Self> {
        let rows: Vec<Value> = serde_json::from_str(items)
            .map_err(|e| ReportError::InvalidTableData(e.to_string()))?;
        Ok(Self::from_rows(rows))
    }

    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mount the viewer on this table exactly once.
    ///
    /// Returns whether the viewer ran; repeated initialization passes find
    /// the mounted marker set and leave the table alone.
    pub fn mount_once(
        &mut self,
        viewer: &mut dyn TableViewer,
        localization: &LocalizationProvider,
    ) -> bool {
        if self.mounted {
            tracing::debug!("Table already mounted, skipping");
            return false;
        }
        self.mounted = true;
        viewer.mount(&self.rows, &localization.language_url());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct MockViewer {
        mounts: usize,
        last_url: Option<String>,
    }

    impl TableViewer for MockViewer {
        fn mount(&mut self, _rows: &[Value], language_url: &str) {
            self.mounts += 1;
            self.last_url = Some(language_url.to_string());
        }
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut table = SheetTable::from_rows(vec![json!(["PETR4", 100, 28.5])]);
        let mut viewer = MockViewer::default();
        let loc = LocalizationProvider::new("/static/datatables/i18n", "pt-BR");

        assert!(table.mount_once(&mut viewer, &loc));
        assert!(!table.mount_once(&mut viewer, &loc));
        assert_eq!(viewer.mounts, 1);
        assert!(table.is_mounted());
    }

    #[test]
    fn test_language_url_derived_from_base_and_lang() {
        let loc = LocalizationProvider::new("/static/datatables/i18n/", "pt-BR");
        assert_eq!(loc.language_url(), "/static/datatables/i18n/pt-BR.json");
    }

    #[test]
    fn test_explicit_language_url_wins() {
        let loc = LocalizationProvider::with_url("/custom/lang.json");
        let mut table = SheetTable::from_rows(Vec::new());
        let mut viewer = MockViewer::default();
        table.mount_once(&mut viewer, &loc);
        assert_eq!(viewer.last_url.as_deref(), Some("/custom/lang.json"));
    }

    #[test]
    fn test_from_items_parses_rows() {
        let table = SheetTable::from_items(r#"[["PETR4", 100], ["VALE3", 50]]"#).unwrap();
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_from_items_rejects_non_array() {
        let err = SheetTable::from_items(r#"{"not": "rows"}"#).unwrap_err();
        assert!(matches!(err, ReportError::InvalidTableData(_)));
    }
}
