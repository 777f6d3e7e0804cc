//! Choreography driver: engine events in, DOM mutations out
//!
//! Owns the virtual-time [`Choreography`] engine plus one spring per
//! collaborator cursor, clocked by a single cancellable
//! requestAnimationFrame loop off its timestamp deltas. Cancelling
//! the loop also cancels the engine, so no highlight toggle or cursor move
//! can land after teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use merke_motion::choreography::{Actor, Choreography, Event};
use merke_motion::scene::{HeroParams, CURSORS, CURSOR_STARTS};
use merke_motion::spring::Spring2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::raf::{self, FrameSlot};

struct DriverState {
    chor: Choreography,
    springs: [Spring2; 2],
    rng: StdRng,
    last_ms: Option<f64>,
}

impl DriverState {
    fn new(params: HeroParams) -> Self {
        let springs = CURSOR_STARTS.map(|(x, y)| {
            Spring2::new(x, y).with_tuning(params.spring_stiffness, params.spring_damping)
        });
        Self {
            chor: Choreography::new(params),
            springs,
            rng: StdRng::from_entropy(),
            last_ms: None,
        }
    }

    /// Advance the virtual clock to `now_ms` and collect the due events.
    fn tick(&mut self, now_ms: f64) -> Vec<Event> {
        let dt_ms = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);
        self.chor.advance(dt_ms, &mut self.rng)
    }

    /// One frame: advance the engine, apply events, glide the cursors.
    fn frame(&mut self, now_ms: f64) {
        let dt_ms = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        for event in self.tick(now_ms) {
            match event {
                Event::CursorTarget { actor, x, y } => {
                    self.springs[spring_slot(actor)].set_target(x, y);
                }
                Event::Highlight { node, on } => dom::set_node_highlight(node, on),
            }
        }

        for (spring, cursor) in self.springs.iter_mut().zip(&CURSORS) {
            spring.step(dt_ms / 1000.0);
            let (x, y) = spring.value();
            dom::set_cursor_position(&format!("cursor-{}", cursor.id), x, y);
        }
    }
}

const fn spring_slot(actor: Actor) -> usize {
    match actor {
        Actor::Lead => 0,
        Actor::Trail => 1,
    }
}

/// Owning handle for the scripted-cursor animation.
pub struct ChoreographyDriver {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    frame_cb: FrameSlot,
    state: Rc<RefCell<DriverState>>,
}

impl ChoreographyDriver {
    pub fn start(params: HeroParams) -> Self {
        let state = Rc::new(RefCell::new(DriverState::new(params)));
        let running = Rc::new(Cell::new(true));
        let raf_id = Rc::new(Cell::new(None));
        let frame_cb = raf::frame_slot();

        {
            let frame_outer = frame_cb.clone();
            let running_frame = running.clone();
            let raf_frame = raf_id.clone();
            let state_frame = state.clone();
            *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
                if !running_frame.get() {
                    return;
                }
                state_frame.borrow_mut().frame(now_ms);
                if let Some(id) = raf::schedule(&frame_outer) {
                    raf_frame.set(Some(id));
                }
            }) as Box<dyn FnMut(f64)>));
        }
        raf_id.set(raf::schedule(&frame_cb));

        Self {
            running,
            raf_id,
            frame_cb,
            state,
        }
    }

    /// Cancel the loop and the engine's pending emissions. Idempotent.
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        raf::cancel(self.raf_id.take());
        self.frame_cb.borrow_mut().take();
        self.state.borrow_mut().chor.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_slots_are_distinct() {
        assert_ne!(spring_slot(Actor::Lead), spring_slot(Actor::Trail));
    }

    #[test]
    fn test_first_frame_only_establishes_the_clock() {
        let mut state = DriverState::new(HeroParams::default());
        // A huge first timestamp must not be treated as elapsed time.
        assert!(state.tick(1_000_000.0).is_empty());
        assert_eq!(state.chor.lead_index(), 0);
    }

    #[test]
    fn test_cancelled_engine_stays_silent_across_frames() {
        // A mount that unwinds stops its handles; after that no frame may
        // produce another highlight or cursor target.
        let mut state = DriverState::new(HeroParams::default());
        state.tick(0.0);
        state.chor.cancel();
        let mut now = 0.0;
        while now < 10_000.0 {
            now += 16.0;
            assert!(state.tick(now).is_empty());
        }
    }

    #[test]
    fn test_ticks_accumulate_to_the_schedule() {
        let mut state = DriverState::new(HeroParams::default());
        state.tick(0.0);
        let mut events = Vec::new();
        let mut now = 0.0;
        while now < 3200.0 {
            now += 16.0;
            events.extend(state.tick(now));
        }
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::Highlight { node: 0, on: true })));
        assert_eq!(state.chor.lead_index(), 1);
    }
}
