//! Page components for ReportDeck.

mod overview;
mod report;

pub use overview::Overview;
pub use report::Report;
