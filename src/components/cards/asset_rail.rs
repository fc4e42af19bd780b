//! Asset rail: the home container of the cards.
//!
//! Renders the relocator's rail slots in order; a relocated card leaves a
//! placeholder div in its position until the overlay closes.

use dioxus::document;
use dioxus::prelude::*;
use reportdeck_core::modal::Slot;

use super::AssetCard;
use crate::context::use_desk;

/// Read the rail's current vertical scroll offset from the webview.
pub async fn rail_scroll_offset() -> f64 {
    let mut eval = document::eval(
        "var rail = document.getElementById('asset-rail');\
         dioxus.send(rail ? rail.scrollTop : 0);",
    );
    eval.recv::<f64>().await.unwrap_or(0.0)
}

/// Put the rail back at a previously captured offset.
pub fn restore_rail_scroll(offset: f64) {
    document::eval(&format!(
        "var rail = document.getElementById('asset-rail');\
         if (rail) rail.scrollTop = {offset};"
    ));
}

#[component]
pub fn AssetRail() -> Element {
    let desk = use_desk();
    let slots: Vec<Slot> = desk
        .read()
        .as_ref()
        .map(|d| d.relocator.rail().to_vec())
        .unwrap_or_default();

    rsx! {
        div { class: "asset-rail", id: "asset-rail",
            for slot in slots {
                {
                    match slot {
                        Slot::Card(key) => rsx! {
                            AssetCard { ticker: key.as_str().to_string() }
                        },
                        Slot::Placeholder(key) => rsx! {
                            div { class: "card asset-placeholder asset-{key}" }
                        },
                    }
                }
            }
        }
    }
}
