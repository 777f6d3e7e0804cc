//! Damped spring smoothing for cursor glide
//!
//! The choreography retargets a cursor instantly; this layer makes the
//! visible marker glide. Tuning is cosmetic only.

/// A 2-D damped spring integrated with semi-implicit Euler.
#[derive(Debug, Clone)]
pub struct Spring2 {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    tx: f64,
    ty: f64,
}

impl Spring2 {
    /// Spring at rest on `(x, y)` with the production tuning
    /// (stiffness 200, damping 25).
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            stiffness: 200.0,
            damping: 25.0,
            mass: 1.0,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            tx: x,
            ty: y,
        }
    }

    pub const fn with_tuning(mut self, stiffness: f64, damping: f64) -> Self {
        self.stiffness = stiffness;
        self.damping = damping;
        self
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.tx = x;
        self.ty = y;
    }

    pub const fn target(&self) -> (f64, f64) {
        (self.tx, self.ty)
    }

    pub const fn value(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Integrate `dt` seconds. Large frame gaps are substepped so the
    /// integration stays stable after a background tab wakes up.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(1.0 / 60.0);
            self.substep(h);
            remaining -= h;
        }
    }

    fn substep(&mut self, h: f64) {
        let ax = (self.stiffness * (self.tx - self.x) - self.damping * self.vx) / self.mass;
        let ay = (self.stiffness * (self.ty - self.y) - self.damping * self.vy) / self.mass;
        self.vx += ax * h;
        self.vy += ay * h;
        self.x += self.vx * h;
        self.y += self.vy * h;
    }

    /// Whether the spring has effectively settled on its target.
    pub fn settled(&self) -> bool {
        let (dx, dy) = (self.tx - self.x, self.ty - self.y);
        dx.abs() < 0.05 && dy.abs() < 0.05 && self.vx.abs() < 0.05 && self.vy.abs() < 0.05
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_to_target() {
        let mut s = Spring2::new(0.0, 0.0);
        s.set_target(100.0, -40.0);
        for _ in 0..600 {
            s.step(1.0 / 60.0);
        }
        let (x, y) = s.value();
        assert!((x - 100.0).abs() < 0.1, "x = {x}");
        assert!((y + 40.0).abs() < 0.1, "y = {y}");
        assert!(s.settled());
    }

    #[test]
    fn test_stationary_without_retarget() {
        let mut s = Spring2::new(10.0, 20.0);
        s.step(0.5);
        assert_eq!(s.value(), (10.0, 20.0));
    }

    #[test]
    fn test_large_dt_stays_finite() {
        let mut s = Spring2::new(0.0, 0.0);
        s.set_target(50.0, 50.0);
        s.step(3.0);
        let (x, y) = s.value();
        assert!(x.is_finite() && y.is_finite());
        assert!((x - 50.0).abs() < 1.0);
    }
}
