//! Asset Card Component
//!
//! One asset position with its copy control and expand button. The same
//! component renders at home in the rail and inside the modal overlay; the
//! relocator decides which container owns the card, and the expand control
//! only shows while the card is at home.

use dioxus::prelude::*;
use reportdeck_core::clipboard::CopyTarget;
use reportdeck_core::feedback::CopyTrigger;
use reportdeck_core::modal::CardKey;

use super::rail_scroll_offset;
use crate::components::CopyButton;
use crate::context::use_desk;

#[component]
pub fn AssetCard(
    /// Ticker symbol identifying the card
    ticker: String,
) -> Element {
    let mut desk = use_desk();
    let key = CardKey::new(ticker.clone());

    let Some(asset) = desk.read().as_ref().and_then(|d| d.asset(&key).cloned()) else {
        tracing::warn!("No asset behind card {}", ticker);
        return rsx! {};
    };
    let expand_visible = desk
        .read()
        .as_ref()
        .map(|d| d.relocator.expand_visible(&key))
        .unwrap_or(false);

    let on_expand = move |_| {
        let key = key.clone();
        spawn(async move {
            // Capture the rail offset before the card leaves the rail.
            let offset = rail_scroll_offset().await;
            if let Some(d) = desk.write().as_mut() {
                d.relocator.expand(&key, offset);
            }
        });
    };

    rsx! {
        div { class: "card asset", id: "asset-{asset.ticker}",
            div { class: "card-header",
                h3 { class: "card-ticker", "{asset.ticker}" }
                div { class: "card-actions",
                    CopyButton {
                        label: "Copy".to_string(),
                        target: CopyTarget::with_content(asset.ticker.clone()),
                        trigger: CopyTrigger::OnActivate,
                    }
                    if expand_visible {
                        button { class: "card-expand", onclick: on_expand, "Expand" }
                    }
                }
            }
            div { class: "card-body",
                p { class: "card-name", "{asset.name}" }
                p { class: "card-institution", "{asset.institution}" }
                dl { class: "card-figures",
                    dt { "Quantity" }
                    dd { "{asset.quantity}" }
                    dt { "Average price" }
                    dd { "R$ {asset.avg_price:.2}" }
                    dt { "Total" }
                    dd { "R$ {asset.total:.2}" }
                }
            }
        }
    }
}
