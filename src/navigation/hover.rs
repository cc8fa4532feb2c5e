//! Hover-intent popup for the navigation bar.
//!
//! Showing is immediate; hiding is deferred by
//! [`HOVER_CLOSE_DELAY`](crate::config::HOVER_CLOSE_DELAY) so the pointer
//! can travel from a button into its popup. Each leave hands out a
//! [`PendingHide`] ticket, and only the most recent uncancelled ticket can
//! hide the popup when its timer fires.

use crate::config::POPUP_OFFSET_PX;
use crate::content::{menu_item, SectionId};

/// Viewport bounds of the hovered navigation button, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    pub left: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopupPosition {
    pub top: f64,
    pub left: f64,
}

impl PopupPosition {
    /// Anchor below-left of the trigger.
    pub fn below(anchor: AnchorRect) -> Self {
        Self {
            top: anchor.bottom + POPUP_OFFSET_PX,
            left: anchor.left,
        }
    }
}

/// Ticket for a scheduled hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingHide(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverIntent {
    hovered: Option<SectionId>,
    position: PopupPosition,
    pending: Option<PendingHide>,
    tickets: u64,
}

impl HoverIntent {
    /// Pointer entered a navigation button.
    pub fn enter_trigger(&mut self, section: SectionId, anchor: AnchorRect) {
        self.pending = None;
        self.position = PopupPosition::below(anchor);
        self.hovered = Some(section);
    }

    /// Pointer entered the popup itself.
    pub fn enter_popup(&mut self) {
        self.pending = None;
    }

    /// Pointer left a button or the popup. Schedule the returned ticket.
    pub fn leave(&mut self) -> PendingHide {
        self.tickets += 1;
        let ticket = PendingHide(self.tickets);
        self.pending = Some(ticket);
        ticket
    }

    /// A hide timer fired. Returns whether the popup was hidden.
    pub fn expire(&mut self, ticket: PendingHide) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.hovered = None;
        true
    }

    /// Hide right away, e.g. after a popup entry was chosen.
    pub fn dismiss(&mut self) {
        self.pending = None;
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<SectionId> {
        self.hovered
    }

    /// Section whose popup is on screen. Sections without sub-items never
    /// show one even while hovered.
    pub fn visible_popup(&self) -> Option<SectionId> {
        self.hovered
            .filter(|section| menu_item(*section).has_sub_items())
    }

    pub fn position(&self) -> PopupPosition {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: AnchorRect = AnchorRect { left: 120.0, bottom: 96.0 };

    #[test]
    fn test_enter_shows_popup_below_left() {
        let mut hover = HoverIntent::default();
        hover.enter_trigger(SectionId::Equipment, ANCHOR);
        assert_eq!(hover.visible_popup(), Some(SectionId::Equipment));
        assert_eq!(hover.position(), PopupPosition { top: 104.0, left: 120.0 });
    }

    #[test]
    fn test_leave_then_expire_hides() {
        let mut hover = HoverIntent::default();
        hover.enter_trigger(SectionId::Material, ANCHOR);
        let ticket = hover.leave();
        // Still visible until the delay elapses
        assert_eq!(hover.visible_popup(), Some(SectionId::Material));
        assert!(hover.expire(ticket));
        assert_eq!(hover.visible_popup(), None);
    }

    #[test]
    fn test_reenter_within_delay_keeps_popup() {
        let mut hover = HoverIntent::default();
        hover.enter_trigger(SectionId::Activities, ANCHOR);
        let ticket = hover.leave();
        hover.enter_trigger(SectionId::Activities, ANCHOR);

        // The stale timer fires after re-entry
        assert!(!hover.expire(ticket), "Cancelled hide must not hide the popup");
        assert_eq!(hover.visible_popup(), Some(SectionId::Activities));
    }

    #[test]
    fn test_moving_into_popup_cancels_hide() {
        let mut hover = HoverIntent::default();
        hover.enter_trigger(SectionId::Protocols, ANCHOR);
        let ticket = hover.leave();
        hover.enter_popup();
        assert!(!hover.expire(ticket));
        assert_eq!(hover.visible_popup(), Some(SectionId::Protocols));

        // Leaving the popup schedules a fresh hide
        let ticket = hover.leave();
        assert!(hover.expire(ticket));
        assert_eq!(hover.visible_popup(), None);
    }

    #[test]
    fn test_only_latest_ticket_hides() {
        let mut hover = HoverIntent::default();
        hover.enter_trigger(SectionId::Equipment, ANCHOR);
        let first = hover.leave();
        hover.enter_trigger(SectionId::Material, ANCHOR);
        let second = hover.leave();
        assert!(!hover.expire(first));
        assert_eq!(hover.visible_popup(), Some(SectionId::Material));
        assert!(hover.expire(second));
    }

    #[test]
    fn test_switching_target_moves_single_popup() {
        let mut hover = HoverIntent::default();
        hover.enter_trigger(SectionId::Equipment, ANCHOR);
        hover.enter_trigger(SectionId::Documentation, AnchorRect { left: 500.0, bottom: 96.0 });
        assert_eq!(hover.visible_popup(), Some(SectionId::Documentation));
        assert_eq!(hover.position().left, 500.0);
    }

    #[test]
    fn test_no_popup_for_section_without_sub_items() {
        let mut hover = HoverIntent::default();
        hover.enter_trigger(SectionId::Introduction, ANCHOR);
        assert_eq!(hover.hovered(), Some(SectionId::Introduction));
        assert_eq!(hover.visible_popup(), None);
    }

    #[test]
    fn test_dismiss_invalidates_pending_ticket() {
        let mut hover = HoverIntent::default();
        hover.enter_trigger(SectionId::Equipment, ANCHOR);
        let ticket = hover.leave();
        hover.dismiss();
        assert!(!hover.expire(ticket));
        assert_eq!(hover.visible_popup(), None);
    }
}
