//! UI Components for ReportDeck.

pub mod cards;

mod breadcrumb_bar;
mod copy_button;
mod desk_header;
mod report_form;
mod sheet_table;

pub use breadcrumb_bar::BreadcrumbBar;
pub use cards::{AssetCard, AssetRail, CardModal};
pub use copy_button::CopyButton;
pub use desk_header::DeskHeader;
pub use report_form::ReportForm;
pub use sheet_table::SheetTableView;
