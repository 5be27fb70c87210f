//! Pure stopwatch logic with no platform dependencies.
//! Testable on host; the lens host applies the returned effects to its scene.

mod effects;
mod engine;
mod input;
mod navigation;
mod save_log;
mod store;

pub use effects::{Effect, Effects, Icon, ScreenId, Slot};
pub use engine::{StopwatchEngine, RENDER_INTERVAL_MS};
pub use input::{route, Button, Hand, InputEvent, PinchEvent};
pub use navigation::{NavigationController, Screen, Wiring};
pub use save_log::{SaveLog, MAX_SAVES};
pub use store::{FlagKey, FlagStore, MemoryFlagStore};

/// Text shown on the timer display after a reset.
pub const ZERO_TIME: &str = "00:00:00";

/// Format milliseconds as "MM:SS:CC" (centiseconds).
///
/// There is no hour field: minutes wrap at 60, so one hour reads "00:00:00".
pub fn format_elapsed(ms: u64) -> String {
    let cs = (ms / 10) % 100;
    let s = (ms / 1000) % 60;
    let m = (ms / 60_000) % 60;
    format!("{:02}:{:02}:{:02}", m, s, cs)
}
