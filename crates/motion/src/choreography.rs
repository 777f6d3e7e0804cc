//! Scripted collaborator choreography
//!
//! A closed-loop periodic scheduler with two phase-offset actors. Every
//! outer period the lead cursor retargets to the next node anchor (plus
//! jitter) and that node is highlighted for a fixed window; the trailing
//! cursor retargets a fixed delay into each period. Instead of nested
//! host timers this is one virtual-time engine: the caller feeds it frame
//! deltas, it emits due events in order, and dropping it cancels
//! everything still pending.

use rand::Rng;

use crate::scene::{lead_targets, trail_targets, HeroParams};

/// Which scripted collaborator an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// Moves on the outer period and drives node highlights.
    Lead,
    /// Moves a fixed delay after each lead move.
    Trail,
}

/// An observable choreography output, consumed by the DOM driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A cursor's spring target changed.
    CursorTarget { actor: Actor, x: f64, y: f64 },
    /// A pipeline node's highlighted flag changed.
    Highlight { node: usize, on: bool },
}

/// A delayed emission. At most one of each kind is in flight at a time:
/// both delays are shorter than the outer period.
#[derive(Debug, Clone, Copy)]
enum Deferred {
    Unhighlight { node: usize },
    TrailMove,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due_ms: f64,
    what: Deferred,
}

/// The choreography engine. See the module docs for the schedule.
#[derive(Debug)]
pub struct Choreography {
    params: HeroParams,
    lead_targets: [(f64, f64); 3],
    trail_targets: [(f64, f64); 3],
    lead_index: usize,
    trail_index: usize,
    clock_ms: f64,
    next_outer_ms: f64,
    pending: Vec<Pending>,
}

impl Choreography {
    pub fn new(params: HeroParams) -> Self {
        Self {
            params,
            lead_targets: lead_targets(),
            trail_targets: trail_targets(),
            lead_index: 0,
            trail_index: 0,
            clock_ms: 0.0,
            next_outer_ms: params.outer_period_ms,
            pending: Vec::with_capacity(2),
        }
    }

    /// Next node the lead cursor will visit (and highlight).
    pub const fn lead_index(&self) -> usize {
        self.lead_index
    }

    pub const fn trail_index(&self) -> usize {
        self.trail_index
    }

    /// Delayed emissions currently in flight.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Advance the virtual clock by `dt_ms`, emitting every event that
    /// falls due, ordered by due time.
    pub fn advance<R: Rng>(&mut self, dt_ms: f64, rng: &mut R) -> Vec<Event> {
        let end = self.clock_ms + dt_ms.max(0.0);
        let mut out = Vec::new();

        loop {
            let next_pending = self
                .pending
                .iter()
                .enumerate()
                .min_by(|a, b| a.1.due_ms.total_cmp(&b.1.due_ms))
                .map(|(i, p)| (i, p.due_ms));

            match next_pending {
                Some((i, due)) if due <= self.next_outer_ms && due <= end => {
                    self.fire_pending(i, rng, &mut out);
                }
                _ if self.next_outer_ms <= end => self.fire_outer(rng, &mut out),
                _ => break,
            }
        }

        self.clock_ms = end;
        out
    }

    /// Drop all pending emissions and stop scheduling. After this,
    /// `advance` never fires again.
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.next_outer_ms = f64::INFINITY;
    }

    fn fire_outer<R: Rng>(&mut self, rng: &mut R, out: &mut Vec<Event>) {
        let now = self.next_outer_ms;
        let (tx, ty) = self.lead_targets[self.lead_index];
        out.push(Event::CursorTarget {
            actor: Actor::Lead,
            x: tx + self.jitter(rng),
            y: ty + self.jitter(rng),
        });
        out.push(Event::Highlight {
            node: self.lead_index,
            on: true,
        });
        self.pending.push(Pending {
            due_ms: now + self.params.highlight_ms,
            what: Deferred::Unhighlight {
                node: self.lead_index,
            },
        });
        self.pending.push(Pending {
            due_ms: now + self.params.inner_delay_ms,
            what: Deferred::TrailMove,
        });
        self.lead_index = (self.lead_index + 1) % self.lead_targets.len();
        self.next_outer_ms = now + self.params.outer_period_ms;
    }

    fn fire_pending<R: Rng>(&mut self, idx: usize, rng: &mut R, out: &mut Vec<Event>) {
        let pending = self.pending.swap_remove(idx);
        match pending.what {
            Deferred::Unhighlight { node } => {
                out.push(Event::Highlight { node, on: false });
            }
            Deferred::TrailMove => {
                let (tx, ty) = self.trail_targets[self.trail_index];
                out.push(Event::CursorTarget {
                    actor: Actor::Trail,
                    x: tx + self.jitter(rng),
                    y: ty + self.jitter(rng),
                });
                self.trail_index = (self.trail_index + 1) % self.trail_targets.len();
            }
        }
    }

    fn jitter<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.params.jitter > 0.0 {
            rng.gen_range(-self.params.jitter..=self.params.jitter)
        } else {
            0.0
        }
    }
}
