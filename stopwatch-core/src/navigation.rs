use crate::effects::{Effect, Effects, ScreenId};
use crate::engine::StopwatchEngine;
use crate::input::{Button, Hand, PinchEvent};
use crate::store::{FlagKey, FlagStore};

/// Whether a screen's button handlers have been hooked up yet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Wiring {
    Unwired,
    Wired,
}

/// A screen and its one-time handler wiring.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Screen {
    pub id: ScreenId,
    pub wiring: Wiring,
}

impl Screen {
    fn new(id: ScreenId) -> Self {
        Self { id, wiring: Wiring::Unwired }
    }

    /// Runs on every entry. Wires handlers the first time only.
    fn enter(&mut self, fx: &mut Effects) {
        if self.wiring == Wiring::Unwired {
            self.wiring = Wiring::Wired;
            fx.push(Effect::HandlersWired(self.id));
        }
    }
}

/// Main/info screen state machine in front of the stopwatch engine.
///
/// Only the current screen's buttons are live, and the engine's display
/// writes, saves and pinch shortcuts are suppressed while the info screen
/// is up. The engine keeps timing regardless.
pub struct NavigationController {
    current: Option<ScreenId>,
    main: Screen,
    info: Screen,
    engine: StopwatchEngine,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            current: None,
            main: Screen::new(ScreenId::Main),
            info: Screen::new(ScreenId::Info),
            engine: StopwatchEngine::new(),
        }
    }

    /// Pick the initial screen: info on the very first run, main afterwards.
    pub fn start_up<S: FlagStore + ?Sized>(&mut self, store: &mut S) -> Effects {
        if store.get_bool(FlagKey::HasBeenRun) {
            self.show(ScreenId::Main)
        } else {
            store.put_bool(FlagKey::HasBeenRun, true);
            self.show(ScreenId::Info)
        }
    }

    pub fn current_screen(&self) -> Option<ScreenId> {
        self.current
    }

    pub fn is_main(&self) -> bool {
        self.current == Some(ScreenId::Main)
    }

    pub fn screen(&self, id: ScreenId) -> &Screen {
        match id {
            ScreenId::Main => &self.main,
            ScreenId::Info => &self.info,
        }
    }

    pub fn engine(&self) -> &StopwatchEngine {
        &self.engine
    }

    /// Make `id` the only enabled screen.
    pub fn show(&mut self, id: ScreenId) -> Effects {
        let mut fx = Effects::new();
        self.current = Some(id);
        fx.push(Effect::SetScreenEnabled(ScreenId::Info, id == ScreenId::Info));
        fx.push(Effect::SetScreenEnabled(ScreenId::Main, id == ScreenId::Main));
        match id {
            ScreenId::Main => self.main.enter(&mut fx),
            ScreenId::Info => self.info.enter(&mut fx),
        }
        match id {
            ScreenId::Main => log::info!("Main screen shown"),
            ScreenId::Info => log::info!("Info screen shown"),
        }
        fx
    }

    pub fn press(&mut self, button: Button, now_ms: u64) -> Effects {
        let owner = button.screen();
        if self.current != Some(owner) || self.screen(owner).wiring != Wiring::Wired {
            log::debug!("{:?} press ignored, screen not active", button);
            return Effects::new();
        }
        match button {
            Button::StartStop => self.engine.toggle(now_ms),
            Button::Reset => self.engine.reset(now_ms),
            Button::SaveTime => self.engine.save(now_ms),
            Button::Info => self.show(ScreenId::Info),
            Button::BackFromInfo => self.show(ScreenId::Main),
        }
    }

    /// Pinch shortcuts: left hand toggles, right hand saves. Ignored off the
    /// main screen or when the hand is pointing at a button.
    pub fn pinch(&mut self, pinch: PinchEvent, now_ms: u64) -> Effects {
        if !self.is_main() || pinch.targeting_interactable {
            log::debug!("{:?} pinch ignored", pinch.hand);
            return Effects::new();
        }
        match pinch.hand {
            Hand::Left => {
                log::info!("Left Hand Pinch Down");
                self.engine.toggle(now_ms)
            }
            Hand::Right => {
                log::info!("Right Hand Pinch Down");
                self.engine.save(now_ms)
            }
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> Effects {
        let visible = self.is_main();
        self.engine.tick(now_ms, visible)
    }
}
