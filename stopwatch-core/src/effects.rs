/// Play/pause feedback icon on the start/stop button.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Play,
    Pause,
}

impl Icon {
    pub fn asset_path(self) -> &'static str {
        match self {
            Icon::Play => "Icons/play.png",
            Icon::Pause => "Icons/pause.png",
        }
    }
}

/// The two saved-time display columns. Odd saves go to `A`, even saves to `B`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Slot {
    A,
    B,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScreenId {
    Main,
    Info,
}

/// A change the host must apply to its display handles.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Effect {
    SetTimerText(String),
    AppendSlot(Slot, String),
    ClearSlot(Slot),
    SetIcon(Icon),
    SetScreenEnabled(ScreenId, bool),
    /// First entry into a screen; its buttons now accept presses.
    HandlersWired(ScreenId),
}

/// Ordered effects produced by one core operation.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Effects(Vec<Effect>);

impl Effects {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, effect: Effect) {
        self.0.push(effect);
    }

    pub fn extend(&mut self, other: Effects) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Last timer text written, if any.
    pub fn timer_text(&self) -> Option<&str> {
        self.0.iter().rev().find_map(|e| match e {
            Effect::SetTimerText(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains(&self, effect: &Effect) -> bool {
        self.0.contains(effect)
    }
}

impl IntoIterator for Effects {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Effects {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
