//! Timeline tests for the scripted cursor choreography.
//!
//! All time is virtual: the engine is driven with explicit frame deltas and
//! a seeded RNG so every run observes the same schedule.

use merke_motion::choreography::{Actor, Choreography, Event};
use merke_motion::scene::HeroParams;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn engine() -> (Choreography, StdRng) {
    (
        Choreography::new(HeroParams::default()),
        StdRng::seed_from_u64(42),
    )
}

/// Collect events over `total_ms`, advancing in `step_ms` frames.
fn run(chor: &mut Choreography, rng: &mut StdRng, total_ms: f64, step_ms: f64) -> Vec<Event> {
    let mut events = Vec::new();
    let mut elapsed = 0.0;
    while elapsed < total_ms {
        let dt = step_ms.min(total_ms - elapsed);
        events.extend(chor.advance(dt, rng));
        elapsed += dt;
    }
    events
}

#[test]
fn one_outer_tick_after_3100ms() {
    let (mut chor, mut rng) = engine();
    let events = run(&mut chor, &mut rng, 3100.0, 16.0);

    let lead_moves = events
        .iter()
        .filter(|e| matches!(e, Event::CursorTarget { actor: Actor::Lead, .. }))
        .count();
    assert_eq!(lead_moves, 1);
    assert_eq!(chor.lead_index(), 1);
    assert!(events.contains(&Event::Highlight { node: 0, on: true }));
    // 1500ms un-highlight has not come due yet at 3100ms.
    assert!(!events.contains(&Event::Highlight { node: 0, on: false }));

    // ...and it fires by 4600ms.
    let later = run(&mut chor, &mut rng, 1500.0, 16.0);
    assert!(later.contains(&Event::Highlight { node: 0, on: false }));
}

#[test]
fn lead_index_cycles_with_period_three() {
    let (mut chor, mut rng) = engine();
    let mut visits = Vec::new();
    for _ in 0..7 {
        for event in chor.advance(3000.0, &mut rng) {
            if let Event::Highlight { node, on: true } = event {
                visits.push(node);
            }
        }
    }
    assert_eq!(visits, [0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn trail_index_cycles_independently() {
    let (mut chor, mut rng) = engine();
    // Outer ticks at 3000..=30000; the trailing move for tick N lands at
    // N + 1000, so by 31100ms all 10 have fired.
    run(&mut chor, &mut rng, 31_100.0, 16.0);
    assert_eq!(chor.trail_index(), 10 % 3);
}

#[test]
fn highlight_toggles_are_paired_without_overlap() {
    let (mut chor, mut rng) = engine();
    let events = run(&mut chor, &mut rng, 40_000.0, 16.0);

    let mut lit = [false; 3];
    for event in events {
        if let Event::Highlight { node, on } = event {
            assert_ne!(lit[node], on, "unpaired toggle for node {node}");
            lit[node] = on;
        }
    }
}

#[test]
fn trailing_move_lands_between_outer_ticks() {
    let (mut chor, mut rng) = engine();
    // First outer tick at 3000ms; nothing from the trailing cursor yet.
    let first = chor.advance(3500.0, &mut rng);
    assert!(!first
        .iter()
        .any(|e| matches!(e, Event::CursorTarget { actor: Actor::Trail, .. })));

    // Trailing move due at 4000ms.
    let second = chor.advance(600.0, &mut rng);
    assert!(second
        .iter()
        .any(|e| matches!(e, Event::CursorTarget { actor: Actor::Trail, .. })));
}

#[test]
fn cancel_leaves_no_dangling_emissions() {
    let (mut chor, mut rng) = engine();
    chor.advance(3000.0, &mut rng);
    assert_eq!(chor.pending_len(), 2);

    chor.cancel();
    let after = run(&mut chor, &mut rng, 20_000.0, 16.0);
    assert!(after.is_empty());
    assert_eq!(chor.pending_len(), 0);
}

#[test]
fn frame_granularity_does_not_change_the_schedule() {
    let (mut coarse, mut rng_a) = engine();
    let (mut fine, mut rng_b) = engine();

    let a = run(&mut coarse, &mut rng_a, 10_000.0, 250.0);
    let b = run(&mut fine, &mut rng_b, 10_000.0, 4.0);

    // Jitter values differ only if the RNG draw order differs; same seed and
    // same event order means identical streams.
    assert_eq!(a, b);
}

#[test]
fn custom_period_is_honored() {
    let params = HeroParams {
        outer_period_ms: 1000.0,
        inner_delay_ms: 300.0,
        highlight_ms: 500.0,
        ..HeroParams::default()
    };
    let mut chor = Choreography::new(params);
    let mut rng = StdRng::seed_from_u64(1);

    let events = chor.advance(1000.0, &mut rng);
    assert!(events.contains(&Event::Highlight { node: 0, on: true }));
    let events = chor.advance(550.0, &mut rng);
    assert!(events.contains(&Event::Highlight { node: 0, on: false }));
}
