use crate::Mode;
use serde::{Deserialize, Serialize};

/// Fire-and-forget notifications for the presentation layer. The engine never
/// reads these back; `WinnerDrawn` is what triggers the celebration animation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RosterImported { added: usize, total: usize },
    ModeChanged { mode: Option<Mode>, eligible: usize },
    WinnerDrawn {
        name: String,
        weight: u32,
        remaining: usize,
    },
    RosterCleared,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
