//! Month breadcrumb bar with overflow dropdown.
//!
//! The most recent months stay visible; older crumbs collapse behind a
//! caret whose dropdown items come from the core template renderer.

use dioxus::prelude::*;
use reportdeck_core::breadcrumb::{render_dropdown_item, BreadcrumbItem};
use reportdeck_core::MonthCrumb;

use crate::context::use_desk;

/// Months beyond this count collapse into the dropdown.
const VISIBLE_CRUMBS: usize = 3;

#[component]
pub fn BreadcrumbBar() -> Element {
    let desk = use_desk();
    let mut dropdown_open = use_signal(|| false);

    let months: Vec<MonthCrumb> = desk
        .read()
        .as_ref()
        .map(|d| d.data.months.clone())
        .unwrap_or_default();

    let (collapsed, visible): (&[MonthCrumb], &[MonthCrumb]) = if months.len() > VISIBLE_CRUMBS {
        months.split_at(months.len() - VISIBLE_CRUMBS)
    } else {
        (&[], &months[..])
    };

    let dropdown_html: String = collapsed
        .iter()
        .filter_map(|crumb| {
            render_dropdown_item(&BreadcrumbItem::new(crumb.label.clone(), crumb.href.clone()))
                .map_err(|e| tracing::warn!("Breadcrumb item failed to render: {}", e))
                .ok()
        })
        .collect();

    rsx! {
        nav { class: "breadcrumb-months", id: "breadcrumb_months",
            ol { class: "breadcrumb",
                if !collapsed.is_empty() {
                    li { class: "breadcrumb-toggle",
                        button {
                            class: "breadcrumb-caret",
                            onclick: move |_| {
                                let open = dropdown_open();
                                dropdown_open.set(!open);
                            },
                            "…"
                        }
                        if dropdown_open() {
                            ul {
                                class: "breadcrumb-dropdown",
                                dangerous_inner_html: "{dropdown_html}",
                            }
                        }
                    }
                }
                for crumb in visible.iter() {
                    li { class: "breadcrumb-item",
                        if let Some(href) = &crumb.href {
                            a { href: "{href}", "{crumb.label}" }
                        } else {
                            a { href: "#", "{crumb.label}" }
                        }
                    }
                }
            }
        }
    }
}
