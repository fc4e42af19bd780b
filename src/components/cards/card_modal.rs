//! Card Modal Overlay
//!
//! One overlay per active relocation session. The backdrop click and the
//! close button both funnel into the relocator's close path, so restoration
//! runs exactly once however the overlay is dismissed.

use dioxus::prelude::*;
use reportdeck_core::modal::{CardKey, ModalEffect};

use super::{restore_rail_scroll, AssetCard};
use crate::context::{use_desk, SharedDesk};

/// Renders an overlay for every card currently relocated.
#[component]
pub fn CardModal() -> Element {
    let desk = use_desk();
    let open: Vec<String> = desk
        .read()
        .as_ref()
        .map(|d| {
            d.relocator
                .active_sessions()
                .map(|session| session.key().as_str().to_string())
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        for ticker in open {
            CardOverlay { ticker }
        }
    }
}

fn close_card(mut desk: SharedDesk, key: &CardKey) {
    let effects = desk
        .write()
        .as_mut()
        .map(|d| d.relocator.close(key))
        .unwrap_or_default();
    for effect in effects {
        // The rail re-renders with the card back home before the webview
        // runs the scroll script, so the offset lands on restored content.
        if let ModalEffect::RestoreScroll(offset) = effect {
            restore_rail_scroll(offset);
        }
    }
}

#[component]
fn CardOverlay(ticker: String) -> Element {
    let desk = use_desk();
    let key = CardKey::new(ticker.clone());

    let backdrop_key = key.clone();
    let on_backdrop = move |_| close_card(desk, &backdrop_key);

    let button_key = key.clone();
    let on_close = move |_| close_card(desk, &button_key);

    rsx! {
        div { class: "modal-overlay", onclick: on_backdrop,
            div {
                class: "modal-dialog modal-lg",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{ticker}" }
                    button { class: "modal-close", onclick: on_close, "×" }
                }
                div { class: "modal-body",
                    AssetCard { ticker: ticker.clone() }
                }
            }
        }
    }
}
