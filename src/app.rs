use dioxus::prelude::*;
use reportdeck_core::ReportData;

use crate::context::ReportDesk;
use crate::pages::{Overview, Report};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Asset overview with breadcrumbs, card rail and modal
/// - `/report` - Report form and spreadsheet table
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Overview {},
    #[route("/report")]
    Report {},
}

/// Root application component.
///
/// Provides global styles, the shared desk context, and routing.
#[component]
pub fn App() -> Element {
    let mut desk: Signal<Option<ReportDesk>> = use_signal(|| None);

    // Provide desk context to all child components
    use_context_provider(|| desk);

    // Load the report on mount
    use_effect(move || {
        spawn(async move {
            let data = match crate::get_report_path() {
                Some(path) => match tokio::fs::read_to_string(&path).await {
                    Ok(raw) => match ReportData::from_json(&raw) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("Failed to parse report {:?}: {}", path, e);
                            ReportData::sample()
                        }
                    },
                    Err(e) => {
                        tracing::error!("Failed to read report {:?}: {}", path, e);
                        ReportData::sample()
                    }
                },
                None => ReportData::sample(),
            };
            tracing::info!(
                "Report loaded: {} assets, {} sheet rows",
                data.assets.len(),
                data.sheet_rows.len()
            );
            desk.set(Some(ReportDesk::new(data)));
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
