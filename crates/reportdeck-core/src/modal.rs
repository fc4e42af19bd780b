//! Card relocation and modal overlay lifecycle.
//!
//! An asset card lives in the home rail until its expand control moves it
//! into a modal overlay for focused viewing. While relocated, a placeholder
//! slot marks the card's home position so closing the overlay puts the card
//! back exactly where it was, in the same sibling order, and then restores
//! the scroll offset captured when the overlay opened.

use std::collections::BTreeMap;
use std::fmt;

/// Stable identity of a card (the asset ticker).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardKey(String);

impl CardKey {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self(ticker.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One position in the home rail.
///
/// `Placeholder` marks where a relocated card belongs; it exists exactly
/// while the card is inside the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Card(CardKey),
    Placeholder(CardKey),
}

/// Which container currently owns a card. A card is owned by exactly one
/// container at a time; ownership changes only inside `expand`/`close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOwner {
    Home,
    Overlay,
}

#[derive(Debug, Clone)]
struct CardRecord {
    owner: CardOwner,
    expand_visible: bool,
}

/// One open-overlay episode for a single card.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSession {
    key: CardKey,
    scroll_offset: f64,
}

impl ModalSession {
    pub fn key(&self) -> &CardKey {
        &self.key
    }

    /// Vertical scroll offset of the rail at expand time.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }
}

/// Side effects for the view layer, emitted in the order they must run.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalEffect {
    HideExpand(CardKey),
    ShowExpand(CardKey),
    ShowOverlay(CardKey),
    DestroyOverlay(CardKey),
    RestoreScroll(f64),
}

/// State machine moving cards between the home rail and modal overlays.
///
/// # Example
///
/// ```
/// use reportdeck_core::modal::{CardKey, ModalRelocator};
///
/// let mut relocator = ModalRelocator::new();
/// let key = CardKey::new("BBAS3");
/// relocator.push_card(key.clone());
///
/// let before = relocator.rail().to_vec();
/// relocator.expand(&key, 120.0);
/// relocator.close(&key);
/// assert_eq!(relocator.rail(), &before[..]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModalRelocator {
    rail: Vec<Slot>,
    cards: BTreeMap<CardKey, CardRecord>,
    sessions: BTreeMap<CardKey, ModalSession>,
}

impl ModalRelocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card at the end of the home rail.
    ///
    /// A key can only be registered once; duplicates are ignored.
    pub fn push_card(&mut self, key: CardKey) {
        if self.cards.contains_key(&key) {
            tracing::warn!("Card {} already registered, ignoring duplicate", key);
            return;
        }
        self.rail.push(Slot::Card(key.clone()));
        self.cards.insert(
            key,
            CardRecord {
                owner: CardOwner::Home,
                expand_visible: true,
            },
        );
    }

    /// Home rail contents in render order.
    pub fn rail(&self) -> &[Slot] {
        &self.rail
    }

    /// Whether the card's expand control should be shown.
    pub fn expand_visible(&self, key: &CardKey) -> bool {
        self.cards
            .get(key)
            .map(|record| record.expand_visible)
            .unwrap_or(false)
    }

    pub fn is_relocated(&self, key: &CardKey) -> bool {
        self.cards
            .get(key)
            .map(|record| record.owner == CardOwner::Overlay)
            .unwrap_or(false)
    }

    pub fn session(&self, key: &CardKey) -> Option<&ModalSession> {
        self.sessions.get(key)
    }

    /// Sessions with an open overlay, for rendering.
    pub fn active_sessions(&self) -> impl Iterator<Item = &ModalSession> {
        self.sessions.values()
    }

    /// Move a card into a modal overlay.
    ///
    /// Captures `scroll_offset`, leaves a placeholder in the card's rail
    /// position, hides the expand control and opens a session. A card that
    /// is already relocated, or an unknown key, is a no-op: the expand
    /// control is hidden during a session, so a second call can only come
    /// from a stale event and must not create a duplicate placeholder.
    pub fn expand(&mut self, key: &CardKey, scroll_offset: f64) -> Vec<ModalEffect> {
        if self.sessions.contains_key(key) {
            tracing::debug!("Card {} already relocated, ignoring expand", key);
            return Vec::new();
        }
        let Some(record) = self.cards.get_mut(key) else {
            tracing::warn!("Expand on unknown card {}", key);
            return Vec::new();
        };
        let Some(index) = self
            .rail
            .iter()
            .position(|slot| matches!(slot, Slot::Card(k) if k == key))
        else {
            return Vec::new();
        };

        // Placeholder goes in right after the card, then the card detaches.
        self.rail.insert(index + 1, Slot::Placeholder(key.clone()));
        self.rail.remove(index);

        record.owner = CardOwner::Overlay;
        record.expand_visible = false;
        self.sessions.insert(
            key.clone(),
            ModalSession {
                key: key.clone(),
                scroll_offset,
            },
        );

        vec![
            ModalEffect::HideExpand(key.clone()),
            ModalEffect::ShowOverlay(key.clone()),
        ]
    }

    /// Return a relocated card to its home position and end the session.
    ///
    /// The explicit close control and the overlay's own hidden event both
    /// land here, so restoration runs exactly once per session; a second
    /// call is a no-op. `RestoreScroll` is emitted last: the card must be
    /// back in the rail before the offset is reapplied, or the target
    /// position would be measured against a rail missing that content.
    pub fn close(&mut self, key: &CardKey) -> Vec<ModalEffect> {
        let Some(session) = self.sessions.remove(key) else {
            tracing::debug!("Close with no session for card {}, ignoring", key);
            return Vec::new();
        };

        if let Some(index) = self
            .rail
            .iter()
            .position(|slot| matches!(slot, Slot::Placeholder(k) if k == key))
        {
            // Card returns right after its placeholder, then the marker goes.
            self.rail.insert(index + 1, Slot::Card(key.clone()));
            self.rail.remove(index);
        }

        if let Some(record) = self.cards.get_mut(key) {
            record.owner = CardOwner::Home;
            record.expand_visible = true;
        }

        vec![
            ModalEffect::ShowExpand(key.clone()),
            ModalEffect::DestroyOverlay(key.clone()),
            ModalEffect::RestoreScroll(session.scroll_offset),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relocator_with(tickers: &[&str]) -> ModalRelocator {
        let mut relocator = ModalRelocator::new();
        for ticker in tickers {
            relocator.push_card(CardKey::new(*ticker));
        }
        relocator
    }

    #[test]
    fn test_expand_close_roundtrip_preserves_rail_order() {
        let mut relocator = relocator_with(&["PETR4", "VALE3", "ITUB4"]);
        let before = relocator.rail().to_vec();
        let key = CardKey::new("VALE3");

        relocator.expand(&key, 240.0);
        assert!(relocator.is_relocated(&key));
        assert_eq!(relocator.rail()[1], Slot::Placeholder(key.clone()));

        relocator.close(&key);
        assert_eq!(relocator.rail(), &before[..]);
        assert!(!relocator.is_relocated(&key));
        assert!(relocator.expand_visible(&key));
    }

    #[test]
    fn test_close_restores_captured_scroll_last() {
        let mut relocator = relocator_with(&["PETR4"]);
        let key = CardKey::new("PETR4");

        relocator.expand(&key, 512.5);
        let effects = relocator.close(&key);
        assert_eq!(effects.last(), Some(&ModalEffect::RestoreScroll(512.5)));
    }

    #[test]
    fn test_double_expand_is_noop() {
        let mut relocator = relocator_with(&["PETR4", "VALE3"]);
        let key = CardKey::new("PETR4");

        assert!(!relocator.expand(&key, 0.0).is_empty());
        assert!(relocator.expand(&key, 99.0).is_empty());

        let placeholders = relocator
            .rail()
            .iter()
            .filter(|slot| matches!(slot, Slot::Placeholder(_)))
            .count();
        assert_eq!(placeholders, 1);
        assert_eq!(relocator.active_sessions().count(), 1);
        // The original offset survives the stale second click.
        assert_eq!(relocator.session(&key).unwrap().scroll_offset(), 0.0);
    }

    #[test]
    fn test_close_without_session_is_noop() {
        let mut relocator = relocator_with(&["PETR4"]);
        let key = CardKey::new("PETR4");
        assert!(relocator.close(&key).is_empty());

        relocator.expand(&key, 0.0);
        assert!(!relocator.close(&key).is_empty());
        assert!(relocator.close(&key).is_empty());
    }

    #[test]
    fn test_expand_unknown_card_is_noop() {
        let mut relocator = relocator_with(&["PETR4"]);
        let before = relocator.rail().to_vec();
        assert!(relocator.expand(&CardKey::new("XXXX9"), 0.0).is_empty());
        assert_eq!(relocator.rail(), &before[..]);
    }

    #[test]
    fn test_expand_hides_control_and_opens_overlay_in_order() {
        let mut relocator = relocator_with(&["PETR4"]);
        let key = CardKey::new("PETR4");
        let effects = relocator.expand(&key, 10.0);
        assert_eq!(
            effects,
            vec![
                ModalEffect::HideExpand(key.clone()),
                ModalEffect::ShowOverlay(key.clone()),
            ]
        );
        assert!(!relocator.expand_visible(&key));
    }

    #[test]
    fn test_concurrent_sessions_for_distinct_cards() {
        let mut relocator = relocator_with(&["PETR4", "VALE3", "ITUB4"]);
        let before = relocator.rail().to_vec();
        let first = CardKey::new("PETR4");
        let second = CardKey::new("ITUB4");

        relocator.expand(&first, 1.0);
        relocator.expand(&second, 2.0);
        assert_eq!(relocator.active_sessions().count(), 2);

        // Close order does not matter for restoration.
        relocator.close(&second);
        relocator.close(&first);
        assert_eq!(relocator.rail(), &before[..]);
    }
}
