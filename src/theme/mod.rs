//! Theme for ReportDeck.

mod styles;

pub use styles::GLOBAL_STYLES;
