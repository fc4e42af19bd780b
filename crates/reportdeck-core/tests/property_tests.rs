//! Property-based tests for the interaction state machines
//!
//! Uses proptest to verify that arbitrary event sequences never corrupt the
//! card rail or the submission guard.

use proptest::prelude::*;
use reportdeck_core::clipboard::normalize;
use reportdeck_core::form::{FormGuard, POSITION_CONTROL};
use reportdeck_core::modal::{CardKey, ModalRelocator, Slot};

// ============================================================================
// Strategy Generators
// ============================================================================

const TICKERS: [&str; 4] = ["PETR4", "VALE3", "ITUB4", "BBAS3"];
const CONTROLS: [&str; 3] = ["generate", "download", POSITION_CONTROL];

/// Operations a user can drive against the card rail
#[derive(Debug, Clone)]
enum DeskOp {
    Expand(usize, f64), // index into TICKERS, scroll offset
    Close(usize),
}

fn desk_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<DeskOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => ((0..TICKERS.len()), 0.0..10_000.0f64)
                .prop_map(|(i, off)| DeskOp::Expand(i, off)),
            1 => (0..TICKERS.len()).prop_map(DeskOp::Close),
        ],
        0..max_ops,
    )
}

/// Operations a user can drive against the report form
#[derive(Debug, Clone)]
enum FormOp {
    Submit(usize), // index into CONTROLS
    CancelKey,
    SetLocked(bool),
}

fn form_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<FormOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..CONTROLS.len()).prop_map(FormOp::Submit),
            2 => Just(FormOp::CancelKey),
            1 => any::<bool>().prop_map(FormOp::SetLocked),
        ],
        0..max_ops,
    )
}

fn fresh_rail() -> ModalRelocator {
    let mut relocator = ModalRelocator::new();
    for ticker in TICKERS {
        relocator.push_card(CardKey::new(ticker));
    }
    relocator
}

fn fresh_form() -> FormGuard {
    let mut guard = FormGuard::new();
    for control in CONTROLS {
        guard.push_control(control, "1");
    }
    guard
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The rail always holds exactly one slot per card, and a placeholder
    /// appears exactly for relocated cards
    #[test]
    fn rail_structure_invariant(ops in desk_ops_strategy(40)) {
        let mut relocator = fresh_rail();

        for op in ops {
            match op {
                DeskOp::Expand(i, offset) => {
                    relocator.expand(&CardKey::new(TICKERS[i]), offset);
                }
                DeskOp::Close(i) => {
                    relocator.close(&CardKey::new(TICKERS[i]));
                }
            }

            prop_assert_eq!(relocator.rail().len(), TICKERS.len());
            for ticker in TICKERS {
                let key = CardKey::new(ticker);
                let has_placeholder = relocator
                    .rail()
                    .iter()
                    .any(|slot| matches!(slot, Slot::Placeholder(k) if *k == key));
                prop_assert_eq!(has_placeholder, relocator.is_relocated(&key));
                prop_assert_eq!(relocator.session(&key).is_some(), relocator.is_relocated(&key));
            }
        }
    }

    /// Closing every open session restores the initial rail order exactly
    #[test]
    fn closing_everything_restores_rail(ops in desk_ops_strategy(40)) {
        let mut relocator = fresh_rail();
        let before = relocator.rail().to_vec();

        for op in ops {
            match op {
                DeskOp::Expand(i, offset) => {
                    relocator.expand(&CardKey::new(TICKERS[i]), offset);
                }
                DeskOp::Close(i) => {
                    relocator.close(&CardKey::new(TICKERS[i]));
                }
            }
        }
        for ticker in TICKERS {
            relocator.close(&CardKey::new(ticker));
        }

        prop_assert_eq!(relocator.rail(), &before[..]);
        prop_assert_eq!(relocator.active_sessions().count(), 0);
    }

    /// At most one echo field ever exists per submitter name
    #[test]
    fn echo_fields_never_accumulate(ops in form_ops_strategy(60)) {
        let mut guard = fresh_form();

        for op in ops {
            match op {
                FormOp::Submit(i) => guard.submit(CONTROLS[i]),
                FormOp::CancelKey => guard.cancel_key(),
                FormOp::SetLocked(checked) => guard.set_locked(checked),
            }

            for control in CONTROLS {
                let count = guard
                    .echo_fields()
                    .filter(|field| field.name == control)
                    .count();
                prop_assert!(count <= 1);
            }
        }
    }

    /// Only registered controls are ever recorded, and cancel always leaves
    /// no submitter behind
    #[test]
    fn submitter_tracking_is_consistent(ops in form_ops_strategy(60)) {
        let mut guard = fresh_form();

        for op in ops {
            let cancelled = matches!(op, FormOp::CancelKey);
            let was_submit = matches!(op, FormOp::Submit(_));
            match op {
                FormOp::Submit(i) => guard.submit(CONTROLS[i]),
                FormOp::CancelKey => guard.cancel_key(),
                FormOp::SetLocked(checked) => guard.set_locked(checked),
            }

            if let Some(name) = guard.submitter() {
                prop_assert!(CONTROLS.contains(&name));
                // The gate may re-enable position later, but a submit never
                // leaves its own submitter interactive.
                if was_submit {
                    prop_assert!(!guard.is_enabled(name));
                }
            }
            if cancelled {
                prop_assert!(guard.submitter().is_none());
            }
        }
    }

    /// Normalization is idempotent and never leaves edge whitespace
    #[test]
    fn normalize_idempotent(raw in ".{0,200}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
        prop_assert!(!once.contains("  "));
    }
}
