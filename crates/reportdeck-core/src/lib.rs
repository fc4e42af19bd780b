//! ReportDeck Core Library
//!
//! Interaction state for the asset report desk, kept free of any UI
//! framework so every transition is unit-testable.
//!
//! ## Overview
//!
//! The report page has two genuinely stateful pieces and this crate models
//! both as explicit state machines:
//!
//! - **Card relocation** ([`modal::ModalRelocator`]): an asset card moves
//!   into a modal overlay for focused viewing and must come back to the
//!   exact rail position, with the expand control re-shown and the scroll
//!   offset captured at open time restored.
//! - **Submission guard** ([`form::FormGuard`]): the report form disables
//!   the submit control that fired, mirrors its name/value into a hidden
//!   echo field, supports escape-cancel, and gates the position action
//!   behind a locked checkbox.
//!
//! Around them sit the clipboard copy source with whitespace normalization
//! and legacy fallback, the copy-feedback binder, the mount-once spreadsheet
//! table, and the breadcrumb dropdown renderer.
//!
//! ## Quick Start
//!
//! ```
//! use reportdeck_core::modal::{CardKey, ModalRelocator};
//!
//! let mut relocator = ModalRelocator::new();
//! relocator.push_card(CardKey::new("PETR4"));
//!
//! let key = CardKey::new("PETR4");
//! relocator.expand(&key, 320.0);
//! assert!(relocator.is_relocated(&key));
//!
//! relocator.close(&key);
//! assert!(!relocator.is_relocated(&key));
//! ```

pub mod breadcrumb;
pub mod clipboard;
pub mod error;
pub mod feedback;
pub mod form;
pub mod modal;
pub mod table;
pub mod types;

// Re-exports
pub use breadcrumb::{render_dropdown_item, BreadcrumbClasses, BreadcrumbItem};
pub use clipboard::{copy_best_effort, extract_text, normalize, ClipboardWriter, CopyOutcome, CopyTarget};
pub use error::{ReportError, ReportResult};
pub use feedback::{CopyFeedback, CopyTrigger, FeedbackEvent};
pub use form::{EchoField, FormGuard, FormPhase, POSITION_CONTROL};
pub use modal::{CardKey, CardOwner, ModalEffect, ModalRelocator, ModalSession, Slot};
pub use table::{LocalizationProvider, SheetTable, TableViewer};
pub use types::{Asset, MonthCrumb, ReportData};
