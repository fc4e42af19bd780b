//! Spreadsheet table view.
//!
//! The interactive grid mounts through the core `SheetTable` guard, so the
//! widget initializes exactly once per table however often the page
//! re-renders. Sorting and paging are local view state.

use std::rc::Rc;

use dioxus::prelude::*;
use reportdeck_core::table::{LocalizationProvider, SheetTable, TableViewer};
use serde_json::Value;

const PAGE_SIZE: usize = 10;

/// Grid-side viewer: snapshots the row dataset into displayable cells.
#[derive(Default)]
struct GridViewer {
    rows: Vec<Vec<String>>,
    language_url: String,
}

impl TableViewer for GridViewer {
    fn mount(&mut self, rows: &[Value], language_url: &str) {
        self.rows = rows
            .iter()
            .map(|row| match row {
                Value::Array(cells) => cells.iter().map(cell_text).collect(),
                other => vec![cell_text(other)],
            })
            .collect();
        self.language_url = language_url.to_string();
        tracing::debug!(
            "Sheet table mounted: {} rows, localization {}",
            self.rows.len(),
            self.language_url
        );
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[component]
pub fn SheetTableView(
    /// Row dataset (the `items` payload)
    rows: Vec<Value>,
    /// Column headers
    headers: Vec<String>,
) -> Element {
    // Mounts once for the lifetime of this table element; re-renders reuse
    // the snapshot behind the mounted marker.
    let grid: Rc<GridViewer> = use_hook(|| {
        let mut table = SheetTable::from_rows(rows.clone());
        let mut viewer = GridViewer::default();
        let localization =
            LocalizationProvider::new("/static/datatables/i18n", crate::get_lang());
        table.mount_once(&mut viewer, &localization);
        Rc::new(viewer)
    });

    let mut sort_column: Signal<Option<usize>> = use_signal(|| None);
    let mut page: Signal<usize> = use_signal(|| 0);

    let mut sorted: Vec<Vec<String>> = grid.rows.clone();
    if let Some(column) = sort_column() {
        sorted.sort_by(|a, b| {
            let left = a.get(column).map(String::as_str).unwrap_or("");
            let right = b.get(column).map(String::as_str).unwrap_or("");
            left.cmp(right)
        });
    }

    let page_count = sorted.len().div_ceil(PAGE_SIZE).max(1);
    let current = page().min(page_count - 1);
    let visible: Vec<Vec<String>> = sorted
        .iter()
        .skip(current * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    let pager_status = format!("Page {} of {}", current + 1, page_count);

    rsx! {
        div { class: "sheet-table full",
            table { class: "xlsx-viewer",
                thead {
                    tr {
                        for (index, header) in headers.iter().enumerate() {
                            th {
                                class: if sort_column() == Some(index) { "sorted" } else { "" },
                                onclick: move |_| sort_column.set(Some(index)),
                                "{header}"
                            }
                        }
                    }
                }
                tbody {
                    for row in visible {
                        tr {
                            for cell in row {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
            div { class: "table-pager",
                button {
                    disabled: current == 0,
                    onclick: move |_| page.set(current.saturating_sub(1)),
                    "Previous"
                }
                span { class: "table-pager__status", "{pager_status}" }
                button {
                    disabled: current + 1 >= page_count,
                    onclick: move |_| page.set(current + 1),
                    "Next"
                }
            }
        }
    }
}
