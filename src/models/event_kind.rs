#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Wakeup,
    Sleep,
}

impl EventKind {
    pub fn ek_as_str(&self) -> &'static str {
        match self {
            EventKind::Wakeup => "wakeup",
            EventKind::Sleep => "sleep",
        }
    }

    /// Human label used in CLI messages.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Wakeup => "wake up",
            EventKind::Sleep => "sleep",
        }
    }

    /// Table holding the events of this kind.
    pub fn table(&self) -> &'static str {
        match self {
            EventKind::Wakeup => "wakeups",
            EventKind::Sleep => "sleeps",
        }
    }

    /// Aggregate picking the effective time when no event is forced:
    /// the earliest wake up and the latest sleep of the day.
    pub fn aggregate(&self) -> &'static str {
        match self {
            EventKind::Wakeup => "MIN",
            EventKind::Sleep => "MAX",
        }
    }
}
