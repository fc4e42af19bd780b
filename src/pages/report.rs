//! Report page: the generation form and the spreadsheet table.

use dioxus::prelude::*;
use serde_json::Value;

use crate::components::{DeskHeader, ReportForm, SheetTableView};
use crate::context::use_desk;

#[component]
pub fn Report() -> Element {
    let desk = use_desk();
    let loaded = desk.read().is_some();
    let rows: Vec<Value> = desk
        .read()
        .as_ref()
        .map(|d| d.data.sheet_rows.clone())
        .unwrap_or_default();
    let today = chrono::Local::now().format("%d/%m/%Y").to_string();

    rsx! {
        div { class: "page report-page",
            DeskHeader {}

            h2 { class: "page-title", "Negotiations — {today}" }

            if loaded {
                ReportForm {}
                SheetTableView {
                    rows,
                    headers: vec![
                        "Ticker".to_string(),
                        "Operation".to_string(),
                        "Quantity".to_string(),
                        "Price".to_string(),
                        "Total".to_string(),
                    ],
                }
            } else {
                div { class: "loading", "Loading report..." }
            }
        }
    }
}
