use crate::core::stage::Stage;

/// Input events the card understands.
/// The DOM layer writes events into the queue; the card reads and drains
/// them once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardInput {
    /// A theme swatch was activated; index into the registry.
    SelectTheme { index: usize },
    /// Programmatic stage change (reserved driver surface for Pulse/Birthday).
    SetStage { stage: Stage },
    /// The hosting viewport changed size.
    Resize { width: f32, height: f32 },
}

/// A queue of pending card inputs.
pub struct InputQueue {
    events: Vec<CardInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new input event (called from the DOM event closures).
    pub fn push(&mut self, event: CardInput) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<CardInput> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
