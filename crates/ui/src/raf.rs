//! requestAnimationFrame plumbing shared by the two animation loops.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

/// A frame callback taking the DOMHighResTimeStamp.
pub type FrameClosure = Closure<dyn FnMut(f64)>;

/// Slot holding a self-rescheduling frame closure. Emptying the slot (on
/// stop) drops the closure so no stale callback can run.
pub type FrameSlot = Rc<RefCell<Option<FrameClosure>>>;

pub fn frame_slot() -> FrameSlot {
    Rc::new(RefCell::new(None))
}

/// Request the next animation frame for the closure in `slot`, returning
/// the cancellation id. `None` when the slot is empty or there is no
/// window.
pub fn schedule(slot: &FrameSlot) -> Option<i32> {
    let borrowed = slot.borrow();
    let cb = borrowed.as_ref()?;
    window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

/// Cancel a previously scheduled frame, if any.
pub fn cancel(id: Option<i32>) {
    if let (Some(win), Some(id)) = (window(), id) {
        let _ = win.cancel_animation_frame(id);
    }
}
