//! Report generation form with submission guard.
//!
//! Named submit controls go through the core `FormGuard`: the control that
//! fires is disabled and its name/value mirrored into hidden echo fields,
//! Escape cancels a pending submission, and the locked checkbox gates the
//! position action.

use dioxus::prelude::*;
use reportdeck_core::clipboard::CopyTarget;
use reportdeck_core::feedback::CopyTrigger;
use reportdeck_core::form::{EchoField, FormPhase, POSITION_CONTROL};

use crate::components::CopyButton;
use crate::context::use_desk;

#[component]
pub fn ReportForm() -> Element {
    let mut desk = use_desk();
    let mut reference = use_signal(|| String::from("IRPF-2023"));

    let (echo_fields, locked, phase): (Vec<EchoField>, bool, FormPhase) = {
        let read = desk.read();
        match read.as_ref() {
            Some(d) => (
                d.form.echo_fields().cloned().collect(),
                d.form.locked(),
                d.form.phase(),
            ),
            None => (Vec::new(), false, FormPhase::Idle),
        }
    };
    let enabled = |name: &str| {
        desk.read()
            .as_ref()
            .map(|d| d.form.is_enabled(name))
            .unwrap_or(false)
    };
    let generate_enabled = enabled("generate");
    let download_enabled = enabled("download");
    let position_enabled = enabled(POSITION_CONTROL);

    let mut submit = move |name: &str| {
        if let Some(d) = desk.write().as_mut() {
            d.form.submit(name);
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            if let Some(d) = desk.write().as_mut() {
                d.form.cancel_key();
            }
        }
    };

    rsx! {
        form {
            class: "exform report-form",
            tabindex: 0,
            onkeydown: on_keydown,
            onsubmit: move |e| e.prevent_default(),

            // Hidden echo fields carry the disabled submitter's name/value
            for field in echo_fields {
                input {
                    class: "{field.class}",
                    r#type: "hidden",
                    name: "{field.name}",
                    value: "{field.value}",
                }
            }

            div { class: "form-row",
                label { class: "reference-label",
                    "Report reference"
                    input {
                        class: "reference-input",
                        r#type: "text",
                        value: "{reference()}",
                        oninput: move |e| reference.set(e.value()),
                    }
                }
                // Copies the (selectable) input value; the confirmation
                // popover carries the copy under the reveal policy.
                CopyButton {
                    label: "Copy".to_string(),
                    target: CopyTarget::editable(reference()),
                    trigger: CopyTrigger::OnReveal,
                }
            }

            div { class: "form-row",
                label { class: "lock-label",
                    input {
                        id: "position_locked",
                        r#type: "checkbox",
                        checked: locked,
                        onchange: move |e| {
                            if let Some(d) = desk.write().as_mut() {
                                d.form.set_locked(e.checked());
                            }
                        },
                    }
                    "Include consolidated position"
                }
            }

            div { class: "form-actions",
                button {
                    r#type: "submit",
                    name: "generate",
                    value: "1",
                    disabled: !generate_enabled,
                    onclick: move |_| submit("generate"),
                    "Generate report"
                }
                button {
                    r#type: "submit",
                    name: "download",
                    value: "xlsx",
                    disabled: !download_enabled,
                    onclick: move |_| submit("download"),
                    "Download XLSX"
                }
                button {
                    r#type: "submit",
                    name: "position",
                    value: "consolidated",
                    disabled: !position_enabled,
                    onclick: move |_| submit(POSITION_CONTROL),
                    "Consolidated position"
                }
            }

            if phase == FormPhase::Submitting {
                p { class: "form-hint", "Submitting... press Esc to cancel" }
            }
        }
    }
}
