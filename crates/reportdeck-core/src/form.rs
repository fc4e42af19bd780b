//! Report form submission guard.
//!
//! The report form carries several named submit controls (generate,
//! download, position). Submitting disables the control that fired so a
//! double-click cannot submit twice, and mirrors its name/value into a
//! hidden "echo" field: browsers omit disabled controls from submitted form
//! data, so without the echo the chosen action would be lost. Escape cancels
//! a pending submission and re-enables the control. A "position locked"
//! checkbox gates the position control.

use std::collections::BTreeMap;

/// Name of the submit control gated by the locked checkbox.
pub const POSITION_CONTROL: &str = "position";

/// Submission phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Cancelled,
}

/// Hidden field mirroring a submitter's name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoField {
    /// Marker class grouping echo fields per submitter, `{name}_submit`.
    pub class: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone)]
struct ControlRecord {
    value: String,
    enabled: bool,
}

/// State machine guarding the report form against double submission.
///
/// # Example
///
/// ```
/// use reportdeck_core::form::{FormGuard, FormPhase};
///
/// let mut guard = FormGuard::new();
/// guard.push_control("generate", "1");
/// guard.submit("generate");
/// assert!(!guard.is_enabled("generate"));
/// guard.cancel_key();
/// assert!(guard.is_enabled("generate"));
/// assert_eq!(guard.phase(), FormPhase::Cancelled);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormGuard {
    controls: BTreeMap<String, ControlRecord>,
    echo: BTreeMap<String, EchoField>,
    submitter: Option<String>,
    phase: FormPhase,
    locked: bool,
}

impl Default for FormPhase {
    fn default() -> Self {
        FormPhase::Idle
    }
}

impl FormGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named submit control with the value it would send.
    ///
    /// The position control starts disabled; it only becomes interactive
    /// once the locked checkbox is checked.
    pub fn push_control(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let enabled = name != POSITION_CONTROL || self.locked;
        self.controls.insert(
            name,
            ControlRecord {
                value: value.into(),
                enabled,
            },
        );
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Control that initiated the pending submission, if any.
    pub fn submitter(&self) -> Option<&str> {
        self.submitter.as_deref()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.controls
            .get(name)
            .map(|control| control.enabled)
            .unwrap_or(false)
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Hidden echo fields in render order.
    pub fn echo_fields(&self) -> impl Iterator<Item = &EchoField> {
        self.echo.values()
    }

    /// Handle a submit event initiated by the named control.
    ///
    /// Disables the submitter, records it, and replaces its echo field.
    /// An unknown or disabled submitter skips every side effect: a missing
    /// name is a markup error and a disabled control cannot fire a submit,
    /// so either way the event is stale.
    pub fn submit(&mut self, name: &str) {
        let Some(control) = self.controls.get_mut(name) else {
            tracing::warn!("Submit from unknown control {:?}", name);
            return;
        };
        if !control.enabled {
            tracing::debug!("Submit from disabled control {:?}, ignoring", name);
            return;
        }
        control.enabled = false;
        let value = control.value.clone();
        self.replace_echo(name, value);
        self.submitter = Some(name.to_string());
        self.phase = FormPhase::Submitting;
    }

    /// Handle the cancel key (Escape).
    ///
    /// Re-enables the pending submitter and clears it. With no submitter
    /// recorded this is a no-op, so a second press changes nothing.
    pub fn cancel_key(&mut self) {
        let Some(name) = self.submitter.take() else {
            return;
        };
        if let Some(control) = self.controls.get_mut(&name) {
            control.enabled = true;
        }
        self.phase = FormPhase::Cancelled;
    }

    /// Toggle the locked checkbox gating the position control.
    ///
    /// Also refreshes the position echo field, mirroring the original
    /// handler, so the pair is in place whichever control submits next.
    pub fn set_locked(&mut self, checked: bool) {
        self.locked = checked;
        if let Some(control) = self.controls.get_mut(POSITION_CONTROL) {
            control.enabled = checked;
            let value = control.value.clone();
            self.replace_echo(POSITION_CONTROL, value);
        }
    }

    // Replace, never accumulate: one echo field per submitter name.
    fn replace_echo(&mut self, name: &str, value: String) {
        self.echo.insert(
            name.to_string(),
            EchoField {
                class: format!("{name}_submit"),
                name: name.to_string(),
                value,
            },
        );
    }
}
