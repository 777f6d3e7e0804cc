//! Canvas pointer-trail renderer
//!
//! A transparent full-viewport canvas sits over the hero. Every mousemove
//! records a particle; a requestAnimationFrame loop paints a low-alpha
//! overlay (exponential fade of earlier frames) and then each live particle
//! as a hue-cycling circle. The loop and both listeners live behind one
//! cancellable handle so unmounting the hero tears everything down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use merke_motion::trail::{hue_at, particle_css, TrailBuffer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::dom::element_by_id;
use crate::raf::{self, FrameSlot};

/// Owning handle for the trail effect. Dropping it without calling
/// [`TrailRenderer::stop`] leaks the listeners, so the entry point keeps it
/// alive for the page and stops it on teardown.
pub struct TrailRenderer {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    frame_cb: FrameSlot,
    on_move: Option<Closure<dyn FnMut(MouseEvent)>>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl TrailRenderer {
    /// Start the effect on the `#trail-canvas` overlay. Returns `None` when
    /// the canvas or its 2d context is unavailable; the hero then simply
    /// runs without the trail.
    pub fn start(fade_alpha: f64) -> Option<Self> {
        let win = window()?;
        let canvas: HtmlCanvasElement = element_by_id("trail-canvas")?.dyn_into().ok()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;

        resize_to_viewport(&canvas);

        let trails = Rc::new(RefCell::new(TrailBuffer::new()));
        let running = Rc::new(Cell::new(true));
        let raf_id = Rc::new(Cell::new(None));

        // mousemove: record a particle at the pointer.
        let trails_move = trails.clone();
        let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
            trails_move
                .borrow_mut()
                .push(f64::from(e.client_x()), f64::from(e.client_y()));
        }) as Box<dyn FnMut(MouseEvent)>);
        win.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .ok()?;

        // resize: re-measure the viewport-sized surface. On failure detach
        // the mousemove listener again before its closure is dropped.
        let canvas_resize = canvas.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            resize_to_viewport(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if win
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            let _ = win
                .remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
            return None;
        }

        // Self-rescheduling frame loop behind the shared cancel flag.
        let frame_cb = raf::frame_slot();
        {
            let frame_outer = frame_cb.clone();
            let running_frame = running.clone();
            let raf_frame = raf_id.clone();
            let canvas_frame = canvas.clone();
            let trails_frame = trails;
            *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
                if !running_frame.get() {
                    return;
                }
                draw_frame(&ctx, &canvas_frame, &mut trails_frame.borrow_mut(), now_ms, fade_alpha);
                if let Some(id) = raf::schedule(&frame_outer) {
                    raf_frame.set(Some(id));
                }
            }) as Box<dyn FnMut(f64)>));
        }
        raf_id.set(raf::schedule(&frame_cb));

        Some(Self {
            running,
            raf_id,
            frame_cb,
            on_move: Some(on_move),
            on_resize: Some(on_resize),
        })
    }

    /// Cancel the frame loop and detach both listeners. Idempotent: after
    /// the first call no frame is still scheduled and later calls do
    /// nothing.
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        raf::cancel(self.raf_id.take());
        if let Some(win) = window() {
            if let Some(cb) = self.on_move.take() {
                let _ = win
                    .remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
            }
            if let Some(cb) = self.on_resize.take() {
                let _ =
                    win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            }
        }
        self.frame_cb.borrow_mut().take();
    }
}

fn resize_to_viewport(canvas: &HtmlCanvasElement) {
    if let Some(win) = window() {
        let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
        }
    }
}

#[allow(deprecated)] // web-sys set_fill_style deprecation is overzealous
fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    trails: &mut TrailBuffer,
    now_ms: f64,
    fade_alpha: f64,
) {
    // Fade previous content instead of clearing it.
    ctx.set_fill_style(&format!("rgba(0, 0, 0, {fade_alpha})").into());
    ctx.fill_rect(
        0.0,
        0.0,
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    );

    trails.step();
    let hue = hue_at(now_ms);
    for p in trails.iter() {
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, p.radius(), 0.0, std::f64::consts::TAU);
        ctx.set_fill_style(&particle_css(hue, p.life).into());
        ctx.fill();
    }
}
