//! Desk context provider for ReportDeck.
//!
//! Provides the shared interaction state to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let desk: Signal<Option<ReportDesk>> = use_signal(|| None);
//! use_context_provider(|| desk);
//!
//! // In child components
//! let desk = use_desk();
//! ```

use dioxus::prelude::*;
use reportdeck_core::form::POSITION_CONTROL;
use reportdeck_core::modal::CardKey;
use reportdeck_core::{Asset, FormGuard, ModalRelocator, ReportData};

/// All interaction state behind one report page: the card relocator, the
/// form submission guard and the loaded dataset.
///
/// The relocator and the guard are injected here once at construction, not
/// reached through any global helper, so components stay testable against a
/// plain `ReportDesk`.
pub struct ReportDesk {
    pub relocator: ModalRelocator,
    pub form: FormGuard,
    pub data: ReportData,
}

impl ReportDesk {
    pub fn new(data: ReportData) -> Self {
        let mut relocator = ModalRelocator::new();
        for asset in &data.assets {
            relocator.push_card(CardKey::new(asset.ticker.clone()));
        }

        let mut form = FormGuard::new();
        form.push_control("generate", "1");
        form.push_control("download", "xlsx");
        form.push_control(POSITION_CONTROL, "consolidated");

        Self {
            relocator,
            form,
            data,
        }
    }

    /// Look up the asset behind a card key.
    pub fn asset(&self, key: &CardKey) -> Option<&Asset> {
        self.data
            .assets
            .iter()
            .find(|asset| asset.ticker == key.as_str())
    }
}

/// Shared desk type for context. `None` until the report has loaded.
pub type SharedDesk = Signal<Option<ReportDesk>>;

/// Get the shared desk from context.
pub fn use_desk() -> SharedDesk {
    use_context::<SharedDesk>()
}
