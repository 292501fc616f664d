//! Card runner: owns the card, the canvas surface and the overlay handles,
//! and turns rAF timestamps into ticks.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use heartbeam::{CardConfig, CardInput, GreetingCard, OverlayStyle};

use crate::dom::OverlayDom;
use crate::surface::CanvasSurface;

pub struct CardRunner {
    card: GreetingCard,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    overlay: OverlayDom,
    /// Timestamp of the previous animation frame, in milliseconds.
    last_frame_ms: Option<f64>,
    /// Last overlay state pushed to the DOM, to skip redundant style writes.
    applied: Option<(OverlayStyle, usize)>,
}

impl CardRunner {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("field")
            .ok_or("canvas #field not found")?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

        Ok(Self {
            card: GreetingCard::new(CardConfig::default()),
            canvas,
            surface: CanvasSurface::new(ctx),
            overlay: OverlayDom::new(&document)?,
            last_frame_ms: None,
            applied: None,
        })
    }

    /// Queue an input for the next tick.
    pub fn push_input(&mut self, event: CardInput) {
        self.card.push_input(event);
    }

    /// Measure the canvas container and rebuild the field for the new size.
    /// A zero-size container leaves the field empty; the frame loop then
    /// clears and waits for a real layout.
    pub fn resize(&mut self) {
        let rect = match self.canvas.parent_element() {
            Some(parent) => parent.get_bounding_client_rect(),
            None => return,
        };
        let (width, height) = (rect.width(), rect.height());
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.surface.set_size(width, height);
        self.card.push_input(CardInput::Resize {
            width: width as f32,
            height: height as f32,
        });
    }

    /// One animation frame: advance, then draw, then sync the overlay.
    pub fn frame(&mut self, now_ms: f64) {
        let dt = match self.last_frame_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        self.card.tick(dt);
        self.card.render(&mut self.surface);

        let style = self.card.overlay_style();
        let theme_index = self.card.theme_index();
        let dirty = self
            .applied
            .as_ref()
            .map_or(true, |(s, t)| *s != style || *t != theme_index);
        if dirty {
            if let Err(err) = self.overlay.apply(&style) {
                log::warn!("overlay style update failed: {:?}", err);
            }
            self.overlay.set_active_swatch(theme_index);
            self.applied = Some((style, theme_index));
        }
    }

    /// Cancel deferred work before the runner is dropped.
    pub fn teardown(&mut self) {
        self.card.teardown();
    }
}
