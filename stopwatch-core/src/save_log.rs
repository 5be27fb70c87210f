use crate::effects::{Effect, Effects, Slot};

pub const MAX_SAVES: usize = 14;

/// Saved time readings, split across two display columns.
pub struct SaveLog {
    entries: Vec<String>,
}

impl SaveLog {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_SAVES
    }

    /// Lines currently shown in `slot`, in order.
    pub fn slot_lines(&self, slot: Slot) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(i, _)| slot_for(i + 1) == slot)
            .map(|(i, formatted)| line(i + 1, formatted))
    }

    /// Record a reading. Silently ignored once the log holds `MAX_SAVES`.
    pub fn record(&mut self, formatted: String) -> Effects {
        let mut fx = Effects::new();
        if self.is_full() {
            log::debug!("save ignored, log full");
            return fx;
        }
        self.entries.push(formatted);
        let n = self.entries.len();
        fx.push(Effect::AppendSlot(slot_for(n), line(n, &self.entries[n - 1])));
        fx
    }

    pub fn clear(&mut self) -> Effects {
        self.entries.clear();
        let mut fx = Effects::new();
        fx.push(Effect::ClearSlot(Slot::A));
        fx.push(Effect::ClearSlot(Slot::B));
        fx
    }
}

fn slot_for(n: usize) -> Slot {
    if n % 2 == 1 {
        Slot::A
    } else {
        Slot::B
    }
}

fn line(n: usize, formatted: &str) -> String {
    format!("{}.{}\n", n, formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_alternates_slots() {
        let mut log = SaveLog::new();
        let fx = log.record("00:01:00".to_string());
        assert!(fx.contains(&Effect::AppendSlot(Slot::A, "1.00:01:00\n".to_string())));
        let fx = log.record("00:02:00".to_string());
        assert!(fx.contains(&Effect::AppendSlot(Slot::B, "2.00:02:00\n".to_string())));
        assert_eq!(log.count(), 2);
    }

    #[test]
    fn test_cap() {
        let mut log = SaveLog::new();
        for i in 0..MAX_SAVES {
            assert!(!log.record(format!("00:00:{:02}", i)).is_empty());
        }
        assert!(log.is_full());
        let fx = log.record("59:59:99".to_string());
        assert!(fx.is_empty());
        assert_eq!(log.count(), MAX_SAVES);
    }

    #[test]
    fn test_slot_lines() {
        let mut log = SaveLog::new();
        for i in 1..=5 {
            log.record(format!("00:0{}:00", i));
        }
        let a: Vec<String> = log.slot_lines(Slot::A).collect();
        let b: Vec<String> = log.slot_lines(Slot::B).collect();
        assert_eq!(a, vec!["1.00:01:00\n", "3.00:03:00\n", "5.00:05:00\n"]);
        assert_eq!(b, vec!["2.00:02:00\n", "4.00:04:00\n"]);
    }

    #[test]
    fn test_clear() {
        let mut log = SaveLog::new();
        log.record("00:01:00".to_string());
        let fx = log.clear();
        assert_eq!(log.count(), 0);
        assert!(fx.contains(&Effect::ClearSlot(Slot::A)));
        assert!(fx.contains(&Effect::ClearSlot(Slot::B)));
    }
}
