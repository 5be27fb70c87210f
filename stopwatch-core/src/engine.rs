use crate::effects::{Effect, Effects, Icon};
use crate::save_log::SaveLog;
use crate::{format_elapsed, ZERO_TIME};

/// Minimum spacing between live timer-text writes.
pub const RENDER_INTERVAL_MS: u64 = 120;

/// Stopwatch timing state plus its saved readings.
///
/// Elapsed time is always derived from `start_ms` and the caller's clock,
/// never accumulated per tick, so irregular or missed ticks cannot drift it.
pub struct StopwatchEngine {
    running: bool,
    start_ms: u64,
    elapsed_ms: u64,
    last_render_ms: u64,
    saves: SaveLog,
}

impl StopwatchEngine {
    pub fn new() -> Self {
        Self {
            running: false,
            start_ms: 0,
            elapsed_ms: 0,
            last_render_ms: 0,
            saves: SaveLog::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn saves(&self) -> &SaveLog {
        &self.saves
    }

    pub fn save_count(&self) -> usize {
        self.saves.count()
    }

    /// Elapsed time as of the last stop or tick.
    pub fn last_elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        if self.running {
            now_ms.saturating_sub(self.start_ms)
        } else {
            self.elapsed_ms
        }
    }

    pub fn start(&mut self, now_ms: u64) -> Effects {
        let mut fx = Effects::new();
        if self.running {
            log::warn!("start ignored, stopwatch already running");
            return fx;
        }
        self.running = true;
        // Rebase so a resume keeps the time already on the clock.
        self.start_ms = now_ms.saturating_sub(self.elapsed_ms);
        self.last_render_ms = now_ms;
        fx.push(Effect::SetIcon(Icon::Pause));
        log::info!("Stopwatch started");
        fx
    }

    pub fn stop(&mut self, now_ms: u64) -> Effects {
        let mut fx = Effects::new();
        if !self.running {
            log::warn!("stop ignored, stopwatch not running");
            return fx;
        }
        self.running = false;
        self.elapsed_ms = now_ms.saturating_sub(self.start_ms);
        fx.push(Effect::SetTimerText(format_elapsed(self.elapsed_ms)));
        fx.push(Effect::SetIcon(Icon::Play));
        log::info!("Stopwatch stopped");
        fx
    }

    pub fn toggle(&mut self, now_ms: u64) -> Effects {
        if self.running {
            self.stop(now_ms)
        } else {
            self.start(now_ms)
        }
    }

    /// Clear saves and zero the clock. Safe in any state; stops a running watch.
    pub fn reset(&mut self, now_ms: u64) -> Effects {
        let mut fx = self.saves.clear();
        self.elapsed_ms = 0;
        self.start_ms = now_ms;
        fx.push(Effect::SetTimerText(ZERO_TIME.to_string()));
        if self.running {
            fx.extend(self.stop(now_ms));
        }
        log::info!("Stopwatch reset");
        fx
    }

    /// Per-frame update. Writes the timer text at most once per
    /// `RENDER_INTERVAL_MS`, and only while the display is visible.
    pub fn tick(&mut self, now_ms: u64, visible: bool) -> Effects {
        let mut fx = Effects::new();
        if !self.running || !visible {
            return fx;
        }
        self.elapsed_ms = now_ms.saturating_sub(self.start_ms);
        if now_ms.saturating_sub(self.last_render_ms) >= RENDER_INTERVAL_MS {
            fx.push(Effect::SetTimerText(format_elapsed(self.elapsed_ms)));
            self.last_render_ms = now_ms;
        }
        fx
    }

    /// Record the current reading. Ignored once the save log is full.
    pub fn save(&mut self, now_ms: u64) -> Effects {
        let formatted = format_elapsed(self.elapsed_ms(now_ms));
        self.saves.record(formatted)
    }
}
