//! Asset card system: the home rail, the expandable card and the modal
//! overlay it relocates into.

mod asset_card;
mod asset_rail;
mod card_modal;

pub use asset_card::AssetCard;
pub use asset_rail::{rail_scroll_offset, restore_rail_scroll, AssetRail};
pub use card_modal::CardModal;
