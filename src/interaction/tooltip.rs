//! Page-wide cursor tooltip state.
//!
//! A single [`TooltipState`] is shared by every trigger on the page. Writes
//! are last-write-wins: if the pointer crosses from one trigger into an
//! overlapping one, the latest enter shows and the next leave clears it,
//! whichever trigger it came from.

use std::rc::Rc;

use super::pointer::PointerSample;

pub const DEFAULT_TOOLTIP_OFFSET: (f64, f64) = (16.0, 16.0);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TooltipAction {
    Show(Rc<str>),
    Hide,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TooltipState {
    pub active_text: Option<Rc<str>>,
}

impl TooltipState {
    pub fn apply(&self, action: TooltipAction) -> Self {
        match action {
            TooltipAction::Show(text) => Self {
                active_text: Some(text),
            },
            TooltipAction::Hide => Self { active_text: None },
        }
    }
}

/// Read/write access to the shared tooltip, injected into triggers and the
/// overlay instead of living in a global.
pub trait TooltipChannel {
    fn set_active_text(&self, text: Option<Rc<str>>);
    fn active_text(&self) -> Option<Rc<str>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerPhase {
    Idle,
    Active,
}

/// Hover state machine for one element that shows a tooltip label.
#[derive(Clone, Debug)]
pub struct TriggerRegion {
    label: Rc<str>,
    phase: TriggerPhase,
}

impl TriggerRegion {
    pub fn new(label: impl Into<Rc<str>>) -> Self {
        Self {
            label: label.into(),
            phase: TriggerPhase::Idle,
        }
    }

    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Repeated enters re-set the same text.
    pub fn on_enter(&mut self, channel: &impl TooltipChannel) {
        self.phase = TriggerPhase::Active;
        channel.set_active_text(Some(Rc::clone(&self.label)));
    }

    /// Swaps the label in place. An active trigger republishes it so the
    /// tooltip shows the new text and the next leave still clears it.
    pub fn relabel(&mut self, label: impl Into<Rc<str>>, channel: &impl TooltipChannel) {
        let label = label.into();
        if label == self.label {
            return;
        }

        self.label = label;
        if self.phase == TriggerPhase::Active {
            channel.set_active_text(Some(Rc::clone(&self.label)));
        }
    }

    pub fn on_leave(&mut self, channel: &impl TooltipChannel) {
        if self.phase == TriggerPhase::Idle {
            return;
        }

        self.phase = TriggerPhase::Idle;
        channel.set_active_text(None);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayPlacement {
    pub x: f64,
    pub y: f64,
    pub text: Rc<str>,
}

/// Where the floating label goes, or `None` when it must be hidden: no
/// active text, or the pointer is outside the viewport.
pub fn overlay_placement(
    state: &TooltipState,
    pointer: &PointerSample,
    offset: (f64, f64),
) -> Option<OverlayPlacement> {
    let text = state.active_text.clone()?;
    if !pointer.is_inside {
        return None;
    }

    Some(OverlayPlacement {
        x: pointer.x + offset.0,
        y: pointer.y + offset.1,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Non-reactive channel over a plain cell.
    #[derive(Clone, Debug, Default)]
    struct SharedTooltip {
        state: Rc<RefCell<TooltipState>>,
    }

    impl SharedTooltip {
        fn new() -> Self {
            Self::default()
        }

        fn snapshot(&self) -> TooltipState {
            self.state.borrow().clone()
        }
    }

    impl TooltipChannel for SharedTooltip {
        fn set_active_text(&self, text: Option<Rc<str>>) {
            let action = match text {
                Some(text) => TooltipAction::Show(text),
                None => TooltipAction::Hide,
            };
            let next = self.state.borrow().apply(action);
            *self.state.borrow_mut() = next;
        }

        fn active_text(&self) -> Option<Rc<str>> {
            self.state.borrow().active_text.clone()
        }
    }

    fn pointer_at(x: f64, y: f64, is_inside: bool) -> PointerSample {
        PointerSample {
            x,
            y,
            is_inside,
            ..PointerSample::default()
        }
    }

    #[test]
    fn leaving_the_trigger_clears_the_text() {
        let tooltip = SharedTooltip::new();
        let mut copy = TriggerRegion::new("Copy");
        let _never_entered = TriggerRegion::new("Share");

        copy.on_enter(&tooltip);
        assert_eq!(tooltip.active_text().as_deref(), Some("Copy"));

        copy.on_leave(&tooltip);
        assert_eq!(tooltip.active_text(), None);
        assert_eq!(copy.phase(), TriggerPhase::Idle);
    }

    #[test]
    fn repeated_enter_is_idempotent() {
        let tooltip = SharedTooltip::new();
        let mut trigger = TriggerRegion::new("Email");

        trigger.on_enter(&tooltip);
        trigger.on_enter(&tooltip);

        assert_eq!(trigger.phase(), TriggerPhase::Active);
        assert_eq!(tooltip.active_text().as_deref(), Some("Email"));
    }

    #[test]
    fn leave_while_idle_does_not_clear_another_trigger() {
        let tooltip = SharedTooltip::new();
        let mut active = TriggerRegion::new("GitHub");
        let mut idle = TriggerRegion::new("LinkedIn");

        active.on_enter(&tooltip);
        idle.on_leave(&tooltip);

        assert_eq!(tooltip.active_text().as_deref(), Some("GitHub"));
    }

    #[test]
    fn overlapping_triggers_are_last_write_wins() {
        let tooltip = SharedTooltip::new();
        let mut outer = TriggerRegion::new("Outer");
        let mut inner = TriggerRegion::new("Inner");

        outer.on_enter(&tooltip);
        inner.on_enter(&tooltip);
        assert_eq!(tooltip.active_text().as_deref(), Some("Inner"));

        outer.on_leave(&tooltip);
        assert_eq!(tooltip.active_text(), None);
    }

    #[test]
    fn many_triggers_show_at_most_one_text() {
        let tooltip = SharedTooltip::new();
        let mut triggers: Vec<_> = (0..8)
            .map(|index| TriggerRegion::new(format!("Label {index}")))
            .collect();

        for trigger in triggers.iter_mut() {
            trigger.on_enter(&tooltip);
            let visible = tooltip.snapshot().active_text.into_iter().count();
            assert_eq!(visible, 1);
            assert_eq!(tooltip.active_text().as_deref(), Some(trigger.label()));
            trigger.on_leave(&tooltip);
        }

        assert_eq!(tooltip.snapshot(), TooltipState::default());
    }

    #[test]
    fn relabel_while_active_keeps_leave_working() {
        let tooltip = SharedTooltip::new();
        let mut trigger = TriggerRegion::new("Copy");

        trigger.on_enter(&tooltip);
        trigger.relabel("Copied!", &tooltip);
        assert_eq!(trigger.phase(), TriggerPhase::Active);
        assert_eq!(tooltip.active_text().as_deref(), Some("Copied!"));

        trigger.on_leave(&tooltip);
        assert_eq!(tooltip.active_text(), None);
    }

    #[test]
    fn relabel_while_idle_stays_hidden() {
        let tooltip = SharedTooltip::new();
        let mut trigger = TriggerRegion::new("Copy");

        trigger.relabel("Copied!", &tooltip);

        assert_eq!(trigger.label(), "Copied!");
        assert_eq!(trigger.phase(), TriggerPhase::Idle);
        assert_eq!(tooltip.active_text(), None);
    }

    #[test]
    fn overlay_follows_pointer_with_offset() {
        let state = TooltipState::default().apply(TooltipAction::Show(Rc::from("Copy")));

        let placement = overlay_placement(&state, &pointer_at(100.0, 40.0, true), DEFAULT_TOOLTIP_OFFSET)
            .expect("visible while text is set and pointer is inside");

        assert_eq!(placement.x, 116.0);
        assert_eq!(placement.y, 56.0);
        assert_eq!(&*placement.text, "Copy");
    }

    #[test]
    fn overlay_hides_when_pointer_leaves_viewport() {
        let state = TooltipState::default().apply(TooltipAction::Show(Rc::from("Copy")));

        let placement = overlay_placement(&state, &pointer_at(100.0, 40.0, false), DEFAULT_TOOLTIP_OFFSET);

        assert!(placement.is_none());
    }

    #[test]
    fn overlay_hides_without_text() {
        let state = TooltipState::default()
            .apply(TooltipAction::Show(Rc::from("Copy")))
            .apply(TooltipAction::Hide);

        assert!(overlay_placement(&state, &pointer_at(1.0, 1.0, true), (0.0, 0.0)).is_none());
    }
}
