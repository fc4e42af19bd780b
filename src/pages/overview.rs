//! Asset overview page: breadcrumbs, the card rail and its modal overlays.

use dioxus::prelude::*;

use crate::components::{AssetRail, BreadcrumbBar, CardModal, DeskHeader};
use crate::context::use_desk;

#[component]
pub fn Overview() -> Element {
    let desk = use_desk();
    let loaded = desk.read().is_some();

    rsx! {
        div { class: "page overview-page",
            DeskHeader {}

            if loaded {
                BreadcrumbBar {}
                AssetRail {}
                CardModal {}
            } else {
                div { class: "loading", "Loading report..." }
            }
        }
    }
}
