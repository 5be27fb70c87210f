use num_traits::FromPrimitive;

use crate::effects::{Effects, ScreenId};
use crate::navigation::NavigationController;

#[derive(Clone, Copy, PartialEq, Eq, Debug, num_derive::FromPrimitive, num_derive::ToPrimitive)]
pub enum Button {
    StartStop = 0,
    Reset,
    SaveTime,
    Info,
    BackFromInfo,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::StartStop,
        Button::Reset,
        Button::SaveTime,
        Button::Info,
        Button::BackFromInfo,
    ];

    pub fn from_id(id: u32) -> Option<Self> {
        FromPrimitive::from_u32(id)
    }

    /// The screen this button lives on.
    pub fn screen(self) -> ScreenId {
        match self {
            Button::BackFromInfo => ScreenId::Info,
            _ => ScreenId::Main,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Hand {
    Left,
    Right,
}

/// A debounced pinch-down from one hand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PinchEvent {
    pub hand: Hand,
    /// The hand's ray was on an interactable when the pinch fired.
    pub targeting_interactable: bool,
}

impl PinchEvent {
    pub fn new(hand: Hand, targeting_interactable: bool) -> Self {
        Self { hand, targeting_interactable }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    Press(Button),
    Pinch(PinchEvent),
    Tick,
}

/// Deliver one host event to the controller.
pub fn route(nav: &mut NavigationController, event: InputEvent, now_ms: u64) -> Effects {
    match event {
        InputEvent::Press(button) => nav.press(button, now_ms),
        InputEvent::Pinch(pinch) => nav.pinch(pinch, now_ms),
        InputEvent::Tick => nav.tick(now_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FlagKey, FlagStore, MemoryFlagStore};
    use num_traits::ToPrimitive;

    #[test]
    fn test_button_ids() {
        for button in Button::ALL {
            let id = button.to_u32().unwrap();
            assert_eq!(Button::from_id(id), Some(button));
        }
        assert_eq!(Button::from_id(0), Some(Button::StartStop));
        assert_eq!(Button::from_id(4), Some(Button::BackFromInfo));
        assert_eq!(Button::from_id(5), None);
    }

    #[test]
    fn test_route_session() {
        let mut store = MemoryFlagStore::new();
        store.put_bool(FlagKey::HasBeenRun, true);
        let mut nav = NavigationController::new();
        nav.start_up(&mut store);

        route(&mut nav, InputEvent::Press(Button::StartStop), 0);
        let mut rendered = Vec::new();
        for frame in 1..=40u64 {
            let fx = route(&mut nav, InputEvent::Tick, frame * 16);
            if let Some(text) = fx.timer_text() {
                rendered.push(text.to_string());
            }
        }
        // 640 ms of frames at a 120 ms throttle.
        assert_eq!(rendered.len(), 5);
        assert_eq!(rendered[0], "00:00:12");

        route(&mut nav, InputEvent::Pinch(PinchEvent::new(Hand::Right, false)), 700);
        assert_eq!(nav.engine().save_count(), 1);
        let fx = route(&mut nav, InputEvent::Pinch(PinchEvent::new(Hand::Left, false)), 1_000);
        assert_eq!(fx.timer_text(), Some("00:01:00"));
    }
}
