use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LensError, Result};

pub const CONFIG_ENV: &str = "LENS_STOPWATCH_CONFIG";
const DEFAULT_STORE_PATH: &str = "lens-stopwatch.json";
const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    Text,
    Screen,
    Interactable,
    ButtonFeedback,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObjectConfig {
    pub name: String,
    #[serde(default)]
    pub components: Vec<ComponentKind>,
}

impl SceneObjectConfig {
    fn new(name: &str, components: &[ComponentKind]) -> Self {
        Self {
            name: name.to_string(),
            components: components.to_vec(),
        }
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        self.components.contains(&kind)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    pub store_path: String,
    pub frame_interval_ms: u64,
    pub scene: Vec<SceneObjectConfig>,
}

impl Default for LensConfig {
    fn default() -> Self {
        use ComponentKind::*;
        Self {
            store_path: DEFAULT_STORE_PATH.to_string(),
            frame_interval_ms: DEFAULT_FRAME_MS,
            scene: vec![
                SceneObjectConfig::new("stopwatch_text", &[Text]),
                SceneObjectConfig::new("saved_time_text_1", &[Text]),
                SceneObjectConfig::new("saved_time_text_2", &[Text]),
                SceneObjectConfig::new("main_screen", &[Screen]),
                SceneObjectConfig::new("info_screen", &[Screen]),
                SceneObjectConfig::new("start_stop_button", &[Interactable, ButtonFeedback]),
                SceneObjectConfig::new("reset_button", &[Interactable]),
                SceneObjectConfig::new("save_time_button", &[Interactable]),
                SceneObjectConfig::new("info_button", &[Interactable]),
                SceneObjectConfig::new("back_from_info_button", &[Interactable]),
            ],
        }
    }
}

impl LensConfig {
    /// Config from the file named by `LENS_STOPWATCH_CONFIG`, or defaults.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| LensError::ConfigFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&text).map_err(|e| match e {
            LensError::ConfigFile { reason, .. } => LensError::ConfigFile {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| LensError::ConfigFile {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn frame_interval(&self) -> Duration {
        let ms = if self.frame_interval_ms == 0 {
            DEFAULT_FRAME_MS
        } else {
            self.frame_interval_ms
        };
        Duration::from_millis(ms)
    }
}
