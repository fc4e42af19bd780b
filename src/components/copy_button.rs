//! Copy control with transient confirmation popover.
//!
//! The platform clipboard (arboard) is tried first; when it is unavailable
//! the text goes through a legacy webview script instead. Copying is
//! best-effort and never raises a visible error.

use dioxus::document;
use dioxus::prelude::*;
use reportdeck_core::clipboard::{copy_best_effort, ClipboardWriter, CopyTarget};
use reportdeck_core::feedback::{CopyFeedback, CopyTrigger, FeedbackEvent};
use reportdeck_core::{ReportError, ReportResult};

/// Platform clipboard via arboard (desktop clipboard).
struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> ReportResult<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ReportError::ClipboardUnavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ReportError::ClipboardUnavailable(e.to_string()))
    }
}

/// Legacy path through the webview: a temporary off-screen textarea takes
/// the text, the copy command runs, and the textarea is removed before it
/// ever paints.
struct WebviewClipboard;

impl ClipboardWriter for WebviewClipboard {
    fn write_text(&mut self, text: &str) -> ReportResult<()> {
        let script = format!(
            "var area = document.createElement('textarea');\
             area.style.position = 'fixed';\
             area.style.left = '-9999px';\
             area.value = {text:?};\
             document.body.appendChild(area);\
             area.select();\
             document.execCommand('copy');\
             area.remove();"
        );
        document::eval(&script);
        Ok(())
    }
}

#[component]
pub fn CopyButton(
    /// Button label
    label: String,
    /// What to copy
    target: CopyTarget,
    /// Copy at click time or when the popover reveals
    #[props(default = CopyTrigger::OnActivate)]
    trigger: CopyTrigger,
) -> Element {
    let mut feedback = use_signal(move || CopyFeedback::new(trigger));

    let on_click = move |_| {
        let mut copy_now = feedback.write().handle(FeedbackEvent::Activated);
        // The popover shows with this render pass, so the reveal event
        // fires here; under the reveal policy this is where the copy runs.
        copy_now |= feedback.write().handle(FeedbackEvent::PopoverShown);

        if copy_now {
            copy_best_effort(&mut SystemClipboard, &mut WebviewClipboard, &target);
        }

        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            feedback.write().handle(FeedbackEvent::PopoverHidden);
        });
    };

    let visible = feedback.read().popover_visible();

    rsx! {
        span { class: "copy-control",
            button {
                class: if visible { "copy-button copied" } else { "copy-button" },
                onclick: on_click,
                "{label}"
            }
            if visible {
                span { class: "copy-popover", "Copied" }
            }
        }
    }
}
