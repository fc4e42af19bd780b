//! Copy confirmation feedback.
//!
//! A copy control shows a transient popover as confirmation. Two bindings
//! exist: copy at click time, or copy at the moment the popover becomes
//! visible (copy-on-reveal). The trigger policy is configured per control.

/// When the copy itself runs relative to the confirmation popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTrigger {
    /// Copy when the control is activated, then reveal the popover.
    OnActivate,
    /// Copy when the popover becomes visible.
    OnReveal,
}

/// Events the bound control and its popover feed back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    Activated,
    PopoverShown,
    PopoverHidden,
}

/// Binds a copy control to its confirmation popover.
///
/// `handle` returns `true` exactly once per activation, at the moment the
/// configured policy says the copy should run.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    trigger: CopyTrigger,
    popover_visible: bool,
    pending: bool,
}

impl CopyFeedback {
    pub fn new(trigger: CopyTrigger) -> Self {
        Self {
            trigger,
            popover_visible: false,
            pending: false,
        }
    }

    pub fn trigger(&self) -> CopyTrigger {
        self.trigger
    }

    pub fn popover_visible(&self) -> bool {
        self.popover_visible
    }

    /// Advance on an event; `true` means perform the copy now.
    pub fn handle(&mut self, event: FeedbackEvent) -> bool {
        match event {
            FeedbackEvent::Activated => {
                self.popover_visible = true;
                match self.trigger {
                    CopyTrigger::OnActivate => true,
                    CopyTrigger::OnReveal => {
                        self.pending = true;
                        false
                    }
                }
            }
            FeedbackEvent::PopoverShown => {
                // Only a reveal that an activation asked for copies; a
                // popover re-shown by hover must not copy again.
                let fire = self.trigger == CopyTrigger::OnReveal && self.pending;
                self.pending = false;
                fire
            }
            FeedbackEvent::PopoverHidden => {
                self.popover_visible = false;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_activate_copies_at_click() {
        let mut feedback = CopyFeedback::new(CopyTrigger::OnActivate);
        assert!(feedback.handle(FeedbackEvent::Activated));
        assert!(feedback.popover_visible());
        assert!(!feedback.handle(FeedbackEvent::PopoverShown));
        assert!(!feedback.handle(FeedbackEvent::PopoverHidden));
        assert!(!feedback.popover_visible());
    }

    #[test]
    fn test_on_reveal_copies_when_popover_shows() {
        let mut feedback = CopyFeedback::new(CopyTrigger::OnReveal);
        assert!(!feedback.handle(FeedbackEvent::Activated));
        assert!(feedback.handle(FeedbackEvent::PopoverShown));
        assert!(!feedback.handle(FeedbackEvent::PopoverHidden));
    }

    #[test]
    fn test_one_copy_per_activation() {
        let mut feedback = CopyFeedback::new(CopyTrigger::OnReveal);
        feedback.handle(FeedbackEvent::Activated);
        assert!(feedback.handle(FeedbackEvent::PopoverShown));
        // Re-shown without a new activation: no second copy.
        assert!(!feedback.handle(FeedbackEvent::PopoverShown));
    }
}
