//! Shared page header with navigation.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn DeskHeader() -> Element {
    rsx! {
        header { class: "desk-header",
            h1 { class: "desk-title", "ReportDeck" }
            nav { class: "desk-nav",
                Link { class: "desk-nav__link", to: Route::Overview {}, "Assets" }
                Link { class: "desk-nav__link", to: Route::Report {}, "Report" }
            }
        }
    }
}
