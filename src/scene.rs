use stopwatch_core::{Effect, Effects, Icon, ScreenId, Slot, ZERO_TIME};

use crate::config::{ComponentKind, SceneObjectConfig};
use crate::error::BindError;

const STOPWATCH_TEXT: &str = "stopwatch_text";
const SAVED_TEXT_1: &str = "saved_time_text_1";
const SAVED_TEXT_2: &str = "saved_time_text_2";
const MAIN_SCREEN: &str = "main_screen";
const INFO_SCREEN: &str = "info_screen";
const START_STOP_BUTTON: &str = "start_stop_button";

/// Interactable objects that must be present, besides the start/stop button.
const BUTTONS: [&str; 4] = [
    "reset_button",
    "save_time_button",
    "info_button",
    "back_from_info_button",
];

pub struct TextHandle {
    pub text: String,
}

pub struct ScreenHandle {
    pub name: String,
    pub enabled: bool,
}

/// Display handles the stopwatch drives, bound by object name.
pub struct Scene {
    pub timer_text: TextHandle,
    pub slot_a: TextHandle,
    pub slot_b: TextHandle,
    pub main_screen: ScreenHandle,
    pub info_screen: ScreenHandle,
    pub icon: Icon,
    dirty: bool,
}

impl Scene {
    /// Resolve every required handle, failing on the first one missing.
    pub fn bind(objects: &[SceneObjectConfig]) -> Result<Self, BindError> {
        let text = |name: &str| -> Result<TextHandle, BindError> {
            require(objects, name, ComponentKind::Text)?;
            Ok(TextHandle { text: String::new() })
        };
        let screen = |name: &str| -> Result<ScreenHandle, BindError> {
            require(objects, name, ComponentKind::Screen)?;
            Ok(ScreenHandle { name: name.to_string(), enabled: false })
        };

        require(objects, START_STOP_BUTTON, ComponentKind::Interactable)?;
        require(objects, START_STOP_BUTTON, ComponentKind::ButtonFeedback)?;
        for name in BUTTONS {
            require(objects, name, ComponentKind::Interactable)?;
        }

        let mut timer_text = text(STOPWATCH_TEXT)?;
        timer_text.text = ZERO_TIME.to_string();
        Ok(Self {
            timer_text,
            slot_a: text(SAVED_TEXT_1)?,
            slot_b: text(SAVED_TEXT_2)?,
            main_screen: screen(MAIN_SCREEN)?,
            info_screen: screen(INFO_SCREEN)?,
            icon: Icon::Play,
            dirty: true,
        })
    }

    pub fn slot(&self, slot: Slot) -> &TextHandle {
        match slot {
            Slot::A => &self.slot_a,
            Slot::B => &self.slot_b,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut TextHandle {
        match slot {
            Slot::A => &mut self.slot_a,
            Slot::B => &mut self.slot_b,
        }
    }

    fn screen_mut(&mut self, id: ScreenId) -> &mut ScreenHandle {
        match id {
            ScreenId::Main => &mut self.main_screen,
            ScreenId::Info => &mut self.info_screen,
        }
    }

    pub fn apply(&mut self, effects: &Effects) {
        for effect in effects {
            match effect {
                Effect::SetTimerText(text) => self.timer_text.text.clone_from(text),
                Effect::AppendSlot(slot, line) => self.slot_mut(*slot).text.push_str(line),
                Effect::ClearSlot(slot) => self.slot_mut(*slot).text.clear(),
                Effect::SetIcon(icon) => {
                    self.icon = *icon;
                    log::debug!("icon -> {}", icon.asset_path());
                }
                Effect::SetScreenEnabled(id, enabled) => {
                    let screen = self.screen_mut(*id);
                    screen.enabled = *enabled;
                    log::debug!("{} enabled={}", screen.name, enabled);
                }
                Effect::HandlersWired(id) => log::debug!("{:?} screen handlers wired", id),
            }
            self.dirty = true;
        }
    }

    /// True once per batch of changes since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

fn require(objects: &[SceneObjectConfig], name: &str, kind: ComponentKind) -> Result<(), BindError> {
    let object = objects
        .iter()
        .find(|o| o.name == name)
        .ok_or_else(|| BindError::MissingObject(name.to_string()))?;
    if object.has(kind) {
        Ok(())
    } else {
        Err(BindError::MissingComponent {
            object: name.to_string(),
            component: format!("{:?}", kind),
        })
    }
}
