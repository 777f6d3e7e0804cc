//! Merke.am landing page front end
//!
//! Boots the hero animations (pointer trail, scripted collaborator
//! cursors), wires the CTA form and wallet button to toasts, and reveals
//! the work-in-progress gate. Everything acquired at start is released by
//! [`teardown`].

mod choreography;
mod dom;
mod raf;
mod trail;

use std::cell::RefCell;

use merke_motion::scene::HeroParams;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::choreography::ChoreographyDriver;
use crate::trail::TrailRenderer;

/// Live animation handles for the mounted hero. `None` before start and
/// after teardown; also the double-start guard.
struct Hero {
    trail: Option<TrailRenderer>,
    cursors: ChoreographyDriver,
}

thread_local! {
    static HERO: RefCell<Option<Hero>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    start_hero()
}

/// Mount the hero animations and page wiring. Safe to call once; repeated
/// calls are no-ops while a hero is live.
#[wasm_bindgen]
pub fn start_hero() -> Result<(), JsValue> {
    let already_running = HERO.with(|hero| hero.borrow().is_some());
    if already_running {
        return Ok(());
    }

    let params = HeroParams::default();

    // Missing canvas or 2d context degrades to "no trail"; the page stays up.
    let mut trail = TrailRenderer::start(params.fade_alpha);
    if trail.is_none() {
        web_sys::console::warn_1(&"[hero] trail canvas unavailable, skipping effect".into());
    }
    let mut cursors = ChoreographyDriver::start(params);

    // The loops are already ticking; a failed page wiring must not strand
    // them with no handle left to stop them.
    if let Err(err) = setup_cta_form().and_then(|()| setup_wallet_button()) {
        if let Some(trail) = trail.as_mut() {
            trail.stop();
        }
        cursors.stop();
        return Err(err);
    }
    dom::reveal_gate();

    HERO.with(|hero| {
        *hero.borrow_mut() = Some(Hero { trail, cursors });
    });
    web_sys::console::log_1(&"[hero] mounted".into());
    Ok(())
}

/// Unmount: cancel both animation loops and their listeners. Idempotent.
#[wasm_bindgen]
pub fn teardown() {
    let mounted = HERO.with(|hero| hero.borrow_mut().take());
    if let Some(mut hero) = mounted {
        if let Some(mut trail) = hero.trail.take() {
            trail.stop();
        }
        hero.cursors.stop();
        web_sys::console::log_1(&"[hero] unmounted".into());
    }
}

/// CTA form: no backend yet, every submit answers with a toast.
fn setup_cta_form() -> Result<(), JsValue> {
    let Some(form) = dom::element_by_id("cta-form") else {
        return Ok(());
    };

    let on_submit = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        let Some(input) = dom::element_by_id("cta-input")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let value = input.value();
        let query = value.trim();
        if query.is_empty() {
            return;
        }
        dom::show_toast("Query submitted!", &format!("Processing: \"{query}\""));
        input.set_value("");
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

fn setup_wallet_button() -> Result<(), JsValue> {
    let Some(btn) = dom::element_by_id("wallet-button") else {
        return Ok(());
    };

    let on_click = Closure::wrap(Box::new(move || {
        dom::show_toast(
            "Wallet login coming soon!",
            "We're working on integrating wallet connectivity.",
        );
    }) as Box<dyn FnMut()>);

    btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
