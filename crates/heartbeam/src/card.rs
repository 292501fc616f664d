//! The card root: owns the stage, the active theme and the field.
//!
//! State flows one direction: the card mutates its own state from queued
//! inputs and the frame clock, then the field and overlay read it. Per frame,
//! `tick` fully completes before `render` reads particle positions.

use crate::config::CardConfig;
use crate::core::stage::{RevealTimer, Stage};
use crate::core::time::FrameClock;
use crate::field::ParticleField;
use crate::input::{CardInput, InputQueue};
use crate::overlay::OverlayStyle;
use crate::render::{render_field, Surface};
use crate::theme::{Theme, DEFAULT_THEME_INDEX, THEMES};

/// RNG seed for field initialization.
const FIELD_SEED: u64 = 42;

pub struct GreetingCard {
    config: CardConfig,
    stage: Stage,
    theme_index: usize,
    field: ParticleField,
    reveal: RevealTimer,
    clock: FrameClock,
    input: InputQueue,
}

impl GreetingCard {
    pub fn new(config: CardConfig) -> Self {
        let field = ParticleField::new(config.clone(), FIELD_SEED);
        let reveal = RevealTimer::new(config.reveal_delay);
        Self {
            config,
            stage: Stage::Forming,
            theme_index: DEFAULT_THEME_INDEX,
            field,
            reveal,
            clock: FrameClock::new(),
            input: InputQueue::new(),
        }
    }

    /// Size (or resize) the card's viewport. Rebuilds the field wholesale.
    pub fn init(&mut self, width: f32, height: f32) {
        self.field.init(width, height);
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: CardInput) {
        self.input.push(event);
    }

    /// Advance one frame: apply queued inputs, run the reveal timer, then
    /// integrate the field.
    pub fn tick(&mut self, dt: f32) {
        let dt = self.clock.advance(dt);

        for event in self.input.drain() {
            match event {
                CardInput::SelectTheme { index } => {
                    if index < THEMES.len() {
                        self.theme_index = index;
                    } else {
                        log::warn!("ignoring out-of-range theme index {}", index);
                    }
                }
                CardInput::SetStage { stage } => {
                    self.stage = stage;
                }
                CardInput::Resize { width, height } => {
                    log::debug!("viewport resize to {}x{}, rebuilding field", width, height);
                    self.field.init(width, height);
                }
            }
        }

        // The reveal only completes the initial Forming stage; an explicit
        // stage change before it fires wins.
        if self.reveal.tick(dt) && self.stage == Stage::Forming {
            self.stage = Stage::Stable;
        }

        self.field
            .advance(self.stage, self.clock.phase(self.config.time_rate));
    }

    /// Draw the current frame. Call after `tick`.
    pub fn render(&self, surface: &mut dyn Surface) {
        render_field(
            surface,
            &self.field,
            self.theme(),
            self.stage,
            self.clock.phase(self.config.hue_rate),
        );
    }

    /// Overlay style for the current stage and theme.
    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle::compute(self.stage, self.theme())
    }

    /// Cancel deferred work before the hosting view is torn down.
    pub fn teardown(&mut self) {
        self.reveal.cancel();
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn theme(&self) -> &'static Theme {
        &THEMES[self.theme_index]
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}
