//! Pointer trail particle buffer
//!
//! A bounded FIFO of decaying points following the pointer. The renderer
//! pushes a particle per mousemove and calls [`TrailBuffer::step`] once per
//! frame; drawing attributes (radius, hue, alpha) are derived here so the
//! canvas layer stays a thin painting pass.

use std::collections::VecDeque;

/// Life lost per frame tick. At 60fps a particle lives ~0.83s.
pub const LIFE_DECAY: f64 = 0.02;

/// Maximum live particles. Caps per-frame draw cost; oldest evicted first.
pub const CAPACITY: usize = 50;

/// An ephemeral decaying point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailParticle {
    pub x: f64,
    pub y: f64,
    /// Remaining life in `(0, 1]`. Drives radius and opacity.
    pub life: f64,
}

impl TrailParticle {
    /// Draw radius, proportional to remaining life.
    pub fn radius(&self) -> f64 {
        self.life * 3.0
    }

    /// Draw opacity, equal to remaining life.
    pub const fn alpha(&self) -> f64 {
        self.life
    }
}

/// Bounded ring of live trail particles, insertion-ordered.
#[derive(Debug, Default)]
pub struct TrailBuffer {
    particles: VecDeque<TrailParticle>,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self {
            particles: VecDeque::with_capacity(CAPACITY),
        }
    }

    /// Record a pointer position as a fresh particle. Evicts the oldest
    /// entry when the buffer is at capacity.
    pub fn push(&mut self, x: f64, y: f64) {
        if self.particles.len() == CAPACITY {
            self.particles.pop_front();
        }
        self.particles.push_back(TrailParticle { x, y, life: 1.0 });
    }

    /// Advance one frame: decay every particle and drop the dead ones.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.life -= LIFE_DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    /// Live particles, oldest first. Never yields a particle with
    /// non-positive life.
    pub fn iter(&self) -> impl Iterator<Item = &TrailParticle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// Hue for the current frame: a full rotation driven by the clock,
/// one degree per 100ms.
pub fn hue_at(now_ms: f64) -> f64 {
    (now_ms * 0.01) % 360.0
}

/// CSS color for a particle at the given frame hue.
pub fn particle_css(hue: f64, life: f64) -> String {
    format!("hsla({hue}, 70%, 60%, {life})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_at_capacity() {
        let mut buf = TrailBuffer::new();
        for i in 0..61 {
            buf.push(f64::from(i), 0.0);
        }
        assert_eq!(buf.len(), CAPACITY);
        // The 11 oldest (x = 0..=10) were evicted.
        assert!((buf.iter().next().unwrap().x - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_step_decays_life() {
        let mut buf = TrailBuffer::new();
        buf.push(5.0, 5.0);
        buf.step();
        let p = buf.iter().next().unwrap();
        assert!((p.life - (1.0 - LIFE_DECAY)).abs() < 1e-12);
    }

    #[test]
    fn test_dead_particles_removed_exactly_once_expired() {
        let mut buf = TrailBuffer::new();
        buf.push(0.0, 0.0);
        // 1.0 / 0.02 = 50 steps to reach zero; the particle must survive 49.
        for _ in 0..49 {
            buf.step();
            assert_eq!(buf.len(), 1);
            assert!(buf.iter().next().unwrap().life > 0.0);
        }
        buf.step();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_radius_and_alpha_track_life() {
        let p = TrailParticle {
            x: 0.0,
            y: 0.0,
            life: 0.5,
        };
        assert!((p.radius() - 1.5).abs() < f64::EPSILON);
        assert!((p.alpha() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hue_wraps() {
        assert!((hue_at(0.0)).abs() < f64::EPSILON);
        assert!((hue_at(36_000.0)).abs() < f64::EPSILON);
        assert!((hue_at(36_100.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_particle_css_shape() {
        let css = particle_css(120.0, 0.25);
        assert_eq!(css, "hsla(120, 70%, 60%, 0.25)");
    }
}
