//! Spring smoothing behind a small "smoothed value" interface.

const MAX_FRAME_SECONDS: f64 = 0.1;
const MAX_STEP_SECONDS: f64 = 1.0 / 240.0;
const REST_DELTA: f64 = 0.001;
const REST_SPEED: f64 = 0.001;
// Fraction of critical damping every spring keeps, so it always comes to rest.
const MIN_DAMPING_RATIO: f64 = 0.1;

/// A value that chases a target over time. The tilt core only talks to this
/// trait, so the easing law can be swapped without touching it.
pub trait SmoothedValue {
    fn set_target(&mut self, target: f64);
    fn target(&self) -> f64;
    fn current_value(&self) -> f64;
    /// Moves the value `dt_seconds` forward and returns the new value.
    fn advance(&mut self, dt_seconds: f64) -> f64;
    fn is_settled(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 400.0,
            damping: 30.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    pub fn critical_damping(stiffness: f64, mass: f64) -> f64 {
        2.0 * (stiffness.max(0.0001) * mass.max(0.0001)).sqrt()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Spring {
    current: f64,
    target: f64,
    velocity: f64,
    k: f64,
    c: f64,
    m: f64,
}

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        let k = config.stiffness.max(0.0001);
        let m = config.mass.max(0.0001);
        let min_damping = SpringConfig::critical_damping(k, m) * MIN_DAMPING_RATIO;

        Self {
            current: initial,
            target: initial,
            velocity: 0.0,
            k,
            c: config.damping.max(min_damping),
            m,
        }
    }

    fn step(&mut self, dt: f64) {
        let acceleration = (self.k * (self.target - self.current) - self.c * self.velocity) / self.m;
        self.velocity += acceleration * dt;
        self.current += self.velocity * dt;
    }
}

impl SmoothedValue for Spring {
    fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    fn target(&self) -> f64 {
        self.target
    }

    fn current_value(&self) -> f64 {
        self.current
    }

    fn advance(&mut self, dt_seconds: f64) -> f64 {
        if !dt_seconds.is_finite() || dt_seconds <= 0.0 || self.is_settled() {
            return self.current;
        }

        let mut remaining = dt_seconds.min(MAX_FRAME_SECONDS);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_SECONDS);
            self.step(dt);
            remaining -= dt;
        }

        if (self.target - self.current).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.current = self.target;
            self.velocity = 0.0;
        }

        self.current
    }

    fn is_settled(&self) -> bool {
        self.current == self.target && self.velocity == 0.0
    }
}
