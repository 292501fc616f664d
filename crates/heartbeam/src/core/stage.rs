/// Display stage of the card.
///
/// `Forming` is the initial stage; the reveal timer moves it to `Stable`
/// once. `Scattered` disperses the heart into an orbiting swirl. `Pulse` and
/// `Birthday` are reserved for external drivers: representable and settable,
/// never triggered by the shipped UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    Scattered,
    #[default]
    Forming,
    Stable,
    Pulse,
    Birthday,
}

impl Stage {
    /// Whether the overlay content (text + photo) is shown.
    pub fn shows_overlay(self) -> bool {
        !matches!(self, Stage::Scattered)
    }

    /// Whether the heart target breathes in and out.
    /// Stable and Forming hold the silhouette at rest size.
    pub fn pulses(self) -> bool {
        matches!(self, Stage::Pulse | Stage::Birthday)
    }
}

/// One-shot timer for the Forming → Stable reveal.
///
/// Driven by frame deltas rather than a host timer so cancellation cannot
/// race a disposed view: once the owning card stops ticking, the timer stops
/// with it, and `cancel` makes it permanently inert.
pub struct RevealTimer {
    remaining: f32,
    armed: bool,
}

impl RevealTimer {
    pub fn new(delay: f32) -> Self {
        Self {
            remaining: delay,
            armed: true,
        }
    }

    /// Advance by `dt` seconds. Returns true exactly once, on the frame the
    /// delay elapses.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.armed {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.armed = false;
            return true;
        }
        false
    }

    /// Disarm the timer; it will never fire after this.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
