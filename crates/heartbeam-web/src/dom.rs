//! DOM composition: overlay, theme switcher and the page glow.
//!
//! The static skeleton (frame, masks, ids) lives in `static/index.html`;
//! this module looks the nodes up, fills in registry-driven content, wires
//! the swatch clicks, and applies the computed `OverlayStyle` whenever the
//! stage or theme changes.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement};

use heartbeam::theme::ThemePaint;
use heartbeam::{CardInput, OverlayStyle, HEADING, PHOTO_PATH, SUBLINE, THEMES};

/// Swatch background for the rainbow entry, which has no single color.
const RAINBOW_SWATCH: &str = "linear-gradient(45deg, #ff3366, #ffcc00, #33ccff)";

fn element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an HtmlElement")))
}

/// Handles to every themed DOM node.
pub struct OverlayDom {
    page_glow: HtmlElement,
    overlay: HtmlElement,
    heading: HtmlElement,
    halo: HtmlElement,
    photo_frame: HtmlElement,
    border: HtmlElement,
    swatches: Vec<HtmlElement>,
}

impl OverlayDom {
    /// Look up the skeleton, fill in the text and photo, and build one
    /// swatch button per registry entry (registry order = button order).
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let heading = element(document, "heading")?;
        heading.set_text_content(Some(HEADING));
        element(document, "subline")?.set_text_content(Some(SUBLINE));

        let photo = element(document, "photo")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| JsValue::from_str("#photo is not an <img>"))?;
        photo.set_src(PHOTO_PATH);
        photo.set_alt("Birthday Girl");

        let switcher = element(document, "switcher")?;
        let mut swatches = Vec::with_capacity(THEMES.len());
        for (i, theme) in THEMES.iter().enumerate() {
            let button = document
                .create_element("button")?
                .dyn_into::<HtmlElement>()?;
            button.set_class_name("swatch");
            button.set_attribute("aria-label", &format!("Switch to {} theme", theme.name))?;
            let background = match theme.paint {
                ThemePaint::Rainbow => RAINBOW_SWATCH.to_string(),
                ThemePaint::Solid { primary, .. } => primary.to_css(),
            };
            button.style().set_property("background", &background)?;

            let on_click = Closure::<dyn FnMut()>::new(move || {
                crate::enqueue(CardInput::SelectTheme { index: i });
            });
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            // Listener lives as long as the page.
            on_click.forget();

            switcher.append_child(&button)?;
            swatches.push(button);
        }

        Ok(Self {
            page_glow: element(document, "page-glow")?,
            overlay: element(document, "overlay")?,
            heading,
            halo: element(document, "halo")?,
            photo_frame: element(document, "photo-frame")?,
            border: element(document, "border")?,
            swatches,
        })
    }

    /// Apply a computed style to the DOM. CSS transition durations on the
    /// nodes animate the change; nothing here is incremental.
    pub fn apply(&self, style: &OverlayStyle) -> Result<(), JsValue> {
        self.overlay.set_class_name(if style.visible {
            "overlay visible"
        } else {
            "overlay hidden"
        });

        let heading_style = self.heading.style();
        heading_style.set_property("color", &style.text_color.to_css())?;
        heading_style.set_property(
            "text-shadow",
            &format!("0 0 30px {}", style.text_glow.to_css()),
        )?;

        self.halo
            .style()
            .set_property("background-color", &style.halo.to_css())?;
        self.photo_frame.style().set_property(
            "filter",
            &format!("drop-shadow(0 0 30px {})", style.photo_glow.to_css()),
        )?;
        self.border
            .style()
            .set_property("background", &style.border_gradient_css())?;
        self.page_glow
            .style()
            .set_property("background", &style.page_glow_css())?;
        Ok(())
    }

    /// Highlight the active swatch.
    pub fn set_active_swatch(&self, index: usize) {
        for (i, swatch) in self.swatches.iter().enumerate() {
            swatch.set_class_name(if i == index {
                "swatch active"
            } else {
                "swatch"
            });
        }
    }
}
