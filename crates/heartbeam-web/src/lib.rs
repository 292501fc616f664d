//! wasm entry point: boots the runner, drives the frame loop, and exposes
//! the small programmatic surface (theme/stage setters, teardown).

pub mod dom;
pub mod runner;
pub mod surface;

pub use runner::CardRunner;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use heartbeam::{CardInput, Stage};

thread_local! {
    static RUNNER: RefCell<Option<CardRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut CardRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Queue a card input from a DOM event closure.
pub(crate) fn enqueue(event: CardInput) {
    with_runner(|r| r.push_input(event));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = CardRunner::new()?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    with_runner(|r| r.resize());

    attach_resize_listener()?;
    start_frame_loop()?;

    log::info!("heartbeam: initialized");
    Ok(())
}

/// Select a theme by registry index. Also wired to the swatch row.
#[wasm_bindgen]
pub fn card_select_theme(index: usize) {
    enqueue(CardInput::SelectTheme { index });
}

/// Set the display stage from host code. Codes: 0 scattered, 1 forming,
/// 2 stable, 3 pulse, 4 birthday. The reserved stages (pulse, birthday)
/// are reachable only through this call.
#[wasm_bindgen]
pub fn card_set_stage(code: u32) {
    let stage = match code {
        0 => Stage::Scattered,
        1 => Stage::Forming,
        2 => Stage::Stable,
        3 => Stage::Pulse,
        4 => Stage::Birthday,
        other => {
            log::warn!("ignoring unknown stage code {}", other);
            return;
        }
    };
    enqueue(CardInput::SetStage { stage });
}

/// Drop the runner. Cancels the reveal timer and stops the frame loop on
/// its next callback, so no stale timer can touch a disposed view.
#[wasm_bindgen]
pub fn card_teardown() {
    RUNNER.with(|cell| {
        if let Some(mut runner) = cell.borrow_mut().take() {
            runner.teardown();
        }
    });
}

fn attach_resize_listener() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        with_runner(|r| r.resize());
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    // Listener lives as long as the page.
    on_resize.forget();
    Ok(())
}

/// requestAnimationFrame loop. The closure holds itself through the shared
/// `Rc` so it can reschedule; it stops rescheduling once the runner is gone.
fn start_frame_loop() -> Result<(), JsValue> {
    let cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let scheduler = cell.clone();

    *cell.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        if with_runner(|r| r.frame(now_ms)).is_none() {
            // Torn down: stop rescheduling. The parked closure is leaked,
            // same as the forgotten event listeners.
            return;
        }
        if let Some(cb) = scheduler.borrow().as_ref() {
            let _ = request_frame(cb);
        }
    }));

    if let Some(cb) = cell.borrow().as_ref() {
        request_frame(cb)?;
    }
    Ok(())
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no window")?
        .request_animation_frame(cb.as_ref().unchecked_ref())
}
