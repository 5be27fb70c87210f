use std::collections::HashMap;

/// Keys of the persisted boolean flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FlagKey {
    HasBeenRun,
}

impl FlagKey {
    /// Key name as written to persistent storage.
    pub fn as_str(self) -> &'static str {
        match self {
            FlagKey::HasBeenRun => "hasBeenRun",
        }
    }
}

/// Persistent boolean flags. Unset keys read as `false`.
pub trait FlagStore {
    fn get_bool(&self, key: FlagKey) -> bool;
    fn put_bool(&mut self, key: FlagKey, value: bool);
}

#[derive(Default, Debug)]
pub struct MemoryFlagStore {
    flags: HashMap<FlagKey, bool>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get_bool(&self, key: FlagKey) -> bool {
        self.flags.get(&key).copied().unwrap_or(false)
    }

    fn put_bool(&mut self, key: FlagKey, value: bool) {
        self.flags.insert(key, value);
    }
}
