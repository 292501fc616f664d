#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use heartbeam::{OverlayStyle, Stage, THEMES};
use heartbeam_web::dom::OverlayDom;

const SKELETON: &str = r#"
  <div id="page-glow"></div>
  <canvas id="field"></canvas>
  <div id="overlay" class="overlay hidden">
    <h1 id="heading"></h1>
    <p id="subline"></p>
    <div id="halo"></div>
    <div id="photo-frame"><img id="photo" /></div>
    <div id="border"></div>
  </div>
  <div id="switcher"></div>
"#;

fn mount() -> web_sys::Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(SKELETON);
    document
}

#[wasm_bindgen_test]
fn builds_one_swatch_per_registry_entry() {
    let document = mount();
    let _dom = OverlayDom::new(&document).unwrap();
    let switcher = document.get_element_by_id("switcher").unwrap();
    assert_eq!(switcher.child_element_count() as usize, THEMES.len());
}

#[wasm_bindgen_test]
fn fills_in_greeting_text_and_photo() {
    let document = mount();
    let _dom = OverlayDom::new(&document).unwrap();
    let heading = document.get_element_by_id("heading").unwrap();
    assert_eq!(heading.text_content().unwrap(), "Happy Birthday");
    let photo = document.get_element_by_id("photo").unwrap();
    assert!(photo.get_attribute("src").unwrap().ends_with("photo.jpeg"));
}

#[wasm_bindgen_test]
fn apply_toggles_overlay_visibility() {
    let document = mount();
    let dom = OverlayDom::new(&document).unwrap();
    let overlay = document.get_element_by_id("overlay").unwrap();

    dom.apply(&OverlayStyle::compute(Stage::Scattered, &THEMES[0]))
        .unwrap();
    assert_eq!(overlay.class_name(), "overlay hidden");

    dom.apply(&OverlayStyle::compute(Stage::Stable, &THEMES[0]))
        .unwrap();
    assert_eq!(overlay.class_name(), "overlay visible");
}

#[wasm_bindgen_test]
fn active_swatch_is_highlighted() {
    let document = mount();
    let dom = OverlayDom::new(&document).unwrap();
    dom.set_active_swatch(2);
    let switcher = document.get_element_by_id("switcher").unwrap();
    let children = switcher.children();
    for i in 0..children.length() {
        let class = children.item(i).unwrap().class_name();
        if i == 2 {
            assert_eq!(class, "swatch active");
        } else {
            assert_eq!(class, "swatch");
        }
    }
}

#[wasm_bindgen_test]
fn missing_skeleton_is_an_error_not_a_panic() {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html("");
    assert!(OverlayDom::new(&document).is_err());
}
