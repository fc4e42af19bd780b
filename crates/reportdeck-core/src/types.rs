//! Report dataset types.
//!
//! The desk loads one report: the per-asset cards, the spreadsheet rows
//! behind the table viewer, and the month crumbs for the breadcrumb bar.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ReportError, ReportResult};

/// One asset position shown as a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Ticker symbol, the card's identity key.
    pub ticker: String,
    pub name: String,
    pub institution: String,
    pub quantity: f64,
    pub avg_price: f64,
    pub total: f64,
}

/// One month entry in the breadcrumb bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCrumb {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Everything one report page renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportData {
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub sheet_rows: Vec<Value>,
    #[serde(default)]
    pub months: Vec<MonthCrumb>,
}

impl ReportData {
    /// Parse a report file.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidReportData` on malformed JSON.
    pub fn from_json(data: &str) -> ReportResult<Self> {
        serde_json::from_str(data).map_err(|e| ReportError::InvalidReportData(e.to_string()))
    }

    /// Small built-in dataset used when no report file is given.
    pub fn sample() -> Self {
        let assets = vec![
            Asset {
                ticker: "PETR4".to_string(),
                name: "Petrobras PN".to_string(),
                institution: "XP Investimentos".to_string(),
                quantity: 200.0,
                avg_price: 28.54,
                total: 5708.0,
            },
            Asset {
                ticker: "VALE3".to_string(),
                name: "Vale ON".to_string(),
                institution: "Clear Corretora".to_string(),
                quantity: 80.0,
                avg_price: 67.12,
                total: 5369.6,
            },
            Asset {
                ticker: "ITUB4".to_string(),
                name: "Itaú Unibanco PN".to_string(),
                institution: "XP Investimentos".to_string(),
                quantity: 150.0,
                avg_price: 25.9,
                total: 3885.0,
            },
        ];
        let sheet_rows = vec![
            json!(["PETR4", "compra", 100, 27.8, 2780.0]),
            json!(["PETR4", "compra", 100, 29.28, 2928.0]),
            json!(["VALE3", "compra", 80, 67.12, 5369.6]),
            json!(["ITUB4", "compra", 150, 25.9, 3885.0]),
        ];
        let months = (1..=6)
            .map(|month| MonthCrumb {
                label: format!("{month:02}/2023"),
                href: Some(format!("?month=2023-{month:02}")),
            })
            .collect();
        Self {
            assets,
            sheet_rows,
            months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_roundtrip() {
        let report = ReportData::sample();
        let encoded = serde_json::to_string(&report).unwrap();
        let decoded = ReportData::from_json(&encoded).unwrap();
        assert_eq!(decoded, report);
    }

    #[test]
    fn test_missing_optional_sections() {
        let report = ReportData::from_json(r#"{"assets": []}"#).unwrap();
        assert!(report.sheet_rows.is_empty());
        assert!(report.months.is_empty());
    }

    #[test]
    fn test_malformed_report_fails() {
        let err = ReportData::from_json("not json").unwrap_err();
        assert!(matches!(err, ReportError::InvalidReportData(_)));
    }
}
