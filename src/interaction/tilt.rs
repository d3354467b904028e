//! Pointer-driven 3D tilt for hover cards.

use std::collections::HashMap;

use super::pointer::Rect;
use super::spring::{SmoothedValue, Spring, SpringConfig};

pub const DEFAULT_MAX_TILT_DEG: f64 = 15.0;
pub const CARD_MAX_TILT_DEG: f64 = 10.0;
pub const DEFAULT_HOVER_SCALE: f64 = 1.02;
pub const DEFAULT_PERSPECTIVE_PX: f64 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_tilt_deg: f64,
    pub hover_scale: f64,
    pub perspective_px: f64,
    pub spring: SpringConfig,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: DEFAULT_MAX_TILT_DEG,
            hover_scale: DEFAULT_HOVER_SCALE,
            perspective_px: DEFAULT_PERSPECTIVE_PX,
            spring: SpringConfig::default(),
        }
    }
}

impl TiltConfig {
    pub fn with_max_tilt(self, max_tilt_deg: f64) -> Self {
        Self {
            max_tilt_deg,
            ..self
        }
    }
}

/// Rotation targets for a pointer at `(client_x, client_y)`.
///
/// Pointer above center gives a positive `rotate_x` so the top edge leans
/// toward the viewer. Both axes reach `max_tilt` at the element's edges.
pub fn raw_tilt(rect: &Rect, client_x: f64, client_y: f64, max_tilt: f64) -> (f64, f64) {
    let (center_x, center_y) = rect.center();
    let dx = client_x - center_x;
    let dy = client_y - center_y;

    let rotate_x = -(dy / rect.half_height()) * max_tilt;
    let rotate_y = (dx / rect.half_width()) * max_tilt;
    (rotate_x, rotate_y)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub is_hovering: bool,
}

impl TiltState {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        is_hovering: false,
    };

    pub fn css_transform(&self, perspective_px: f64) -> String {
        format!(
            "perspective({perspective_px:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

#[derive(Clone, Debug)]
pub struct TiltTransform<S = Spring> {
    config: TiltConfig,
    rotate_x: S,
    rotate_y: S,
    scale: S,
    is_hovering: bool,
}

impl TiltTransform<Spring> {
    pub fn new(config: TiltConfig) -> Self {
        Self::with_smoothing(config, |initial| Spring::new(initial, config.spring))
    }
}

impl<S: SmoothedValue> TiltTransform<S> {
    /// Builds the three channels with `make(initial_value)`.
    pub fn with_smoothing(config: TiltConfig, make: impl Fn(f64) -> S) -> Self {
        Self {
            config,
            rotate_x: make(0.0),
            rotate_y: make(0.0),
            scale: make(1.0),
            is_hovering: false,
        }
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    pub fn on_enter(&mut self) {
        self.is_hovering = true;
        self.scale.set_target(self.config.hover_scale);
    }

    /// Retargets rotation from the pointer. Without a measurement the event
    /// is dropped and the next one is awaited.
    pub fn on_move(&mut self, client_x: f64, client_y: f64, rect: Option<Rect>) {
        let Some(rect) = rect else {
            return;
        };

        let (rotate_x, rotate_y) = raw_tilt(&rect, client_x, client_y, self.config.max_tilt_deg);
        self.rotate_x.set_target(rotate_x);
        self.rotate_y.set_target(rotate_y);
    }

    pub fn on_leave(&mut self) {
        self.is_hovering = false;
        self.rotate_x.set_target(0.0);
        self.rotate_y.set_target(0.0);
        self.scale.set_target(1.0);
    }

    pub fn advance(&mut self, dt_seconds: f64) -> TiltState {
        self.rotate_x.advance(dt_seconds);
        self.rotate_y.advance(dt_seconds);
        self.scale.advance(dt_seconds);
        self.state()
    }

    pub fn state(&self) -> TiltState {
        TiltState {
            rotate_x: self.rotate_x.current_value(),
            rotate_y: self.rotate_y.current_value(),
            scale: self.scale.current_value(),
            is_hovering: self.is_hovering,
        }
    }

    pub fn is_animating(&self) -> bool {
        !(self.rotate_x.is_settled() && self.rotate_y.is_settled() && self.scale.is_settled())
    }
}

/// Identity of one mounted tilt element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TiltId(u64);

/// One tilt instance per mounted element. Instances never share state.
#[derive(Debug, Default)]
pub struct TiltRegistry {
    next_id: u64,
    instances: HashMap<TiltId, TiltTransform>,
}

impl TiltRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, config: TiltConfig) -> TiltId {
        self.next_id += 1;
        let id = TiltId(self.next_id);
        self.instances.insert(id, TiltTransform::new(config));
        id
    }

    pub fn unmount(&mut self, id: TiltId) -> bool {
        self.instances.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, id: TiltId) -> Option<&TiltTransform> {
        self.instances.get(&id)
    }

    pub fn get_mut(&mut self, id: TiltId) -> Option<&mut TiltTransform> {
        self.instances.get_mut(&id)
    }

    pub fn advance(&mut self, id: TiltId, dt_seconds: f64) -> Option<TiltState> {
        self.instances
            .get_mut(&id)
            .map(|tilt| tilt.advance(dt_seconds))
    }
}

impl std::fmt::Display for TiltId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tilt-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::assert_close;

    fn centered_card() -> Rect {
        Rect::measured(50.0, 50.0, 100.0, 100.0).expect("valid rect")
    }

    fn settle(tilt: &mut TiltTransform, seconds: f64) -> TiltState {
        let mut state = tilt.state();
        for _ in 0..(seconds * 60.0) as usize {
            state = tilt.advance(1.0 / 60.0);
        }
        state
    }

    /// Jumps straight to the target so tests can inspect raw mapping.
    #[derive(Clone, Copy, Debug)]
    struct Snap {
        value: f64,
    }

    impl SmoothedValue for Snap {
        fn set_target(&mut self, target: f64) {
            self.value = target;
        }

        fn target(&self) -> f64 {
            self.value
        }

        fn current_value(&self) -> f64 {
            self.value
        }

        fn advance(&mut self, _dt_seconds: f64) -> f64 {
            self.value
        }

        fn is_settled(&self) -> bool {
            true
        }
    }

    #[test]
    fn horizontal_offset_maps_linearly_to_rotate_y() {
        let (rotate_x, rotate_y) = raw_tilt(&centered_card(), 125.0, 100.0, 10.0);

        assert_close(rotate_x, 0.0);
        assert_close(rotate_y, 5.0);
    }

    #[test]
    fn pointer_above_center_tilts_top_toward_viewer() {
        let (rotate_x, _) = raw_tilt(&centered_card(), 100.0, 75.0, 10.0);
        assert_close(rotate_x, 5.0);

        let (rotate_x, _) = raw_tilt(&centered_card(), 100.0, 125.0, 10.0);
        assert_close(rotate_x, -5.0);
    }

    #[test]
    fn edges_reach_max_tilt() {
        let rect = centered_card();

        assert_close(raw_tilt(&rect, 150.0, 100.0, 12.0).1, 12.0);
        assert_close(raw_tilt(&rect, 50.0, 100.0, 12.0).1, -12.0);
        assert_close(raw_tilt(&rect, 100.0, 50.0, 12.0).0, 12.0);
        assert_close(raw_tilt(&rect, 100.0, 150.0, 12.0).0, -12.0);
    }

    #[test]
    fn instant_smoothing_exposes_raw_targets() {
        let config = TiltConfig::default().with_max_tilt(10.0);
        let mut tilt = TiltTransform::with_smoothing(config, |value| Snap { value });

        tilt.on_enter();
        tilt.on_move(125.0, 100.0, Some(centered_card()));
        let state = tilt.advance(1.0 / 60.0);

        assert_close(state.rotate_y, 5.0);
        assert_close(state.scale, DEFAULT_HOVER_SCALE);
        assert!(state.is_hovering);
    }

    #[test]
    fn hover_converges_to_targets() {
        let mut tilt = TiltTransform::new(TiltConfig::default().with_max_tilt(10.0));

        tilt.on_enter();
        tilt.on_move(150.0, 50.0, Some(centered_card()));
        let state = settle(&mut tilt, 3.0);

        assert_close(state.rotate_x, 10.0);
        assert_close(state.rotate_y, 10.0);
        assert_close(state.scale, DEFAULT_HOVER_SCALE);
        assert!(!tilt.is_animating());
    }

    #[test]
    fn settled_hover_resumes_animating_on_move() {
        let mut tilt = TiltTransform::new(TiltConfig::default());
        tilt.on_enter();
        tilt.on_move(150.0, 100.0, Some(centered_card()));
        settle(&mut tilt, 3.0);
        assert!(tilt.is_hovering());
        assert!(!tilt.is_animating());

        tilt.on_move(50.0, 100.0, Some(centered_card()));

        assert!(tilt.is_animating());
    }

    #[test]
    fn leave_decays_to_neutral_without_a_jump() {
        let mut tilt = TiltTransform::new(TiltConfig::default());
        tilt.on_enter();
        tilt.on_move(140.0, 60.0, Some(centered_card()));
        let hovered = settle(&mut tilt, 3.0);

        tilt.on_leave();
        let just_after = tilt.advance(0.001);

        assert!(!just_after.is_hovering);
        assert!((just_after.rotate_x - hovered.rotate_x).abs() < 0.1);
        assert!((just_after.rotate_y - hovered.rotate_y).abs() < 0.1);
        assert!((just_after.scale - hovered.scale).abs() < 0.01);
        assert!(tilt.is_animating());

        let rest = settle(&mut tilt, 3.0);
        assert_eq!(rest, TiltState::NEUTRAL);
    }

    #[test]
    fn weakest_accepted_damping_still_returns_to_neutral() {
        let loaded = crate::config::InteractionConfig::from_json(r#"{"springDamping": 1}"#)
            .expect("valid JSON");
        assert!(loaded.rejected.is_empty());
        let mut tilt = TiltTransform::new(loaded.config.card_tilt());

        tilt.on_enter();
        tilt.on_move(150.0, 100.0, Some(centered_card()));
        settle(&mut tilt, 20.0);
        tilt.on_leave();
        let rest = settle(&mut tilt, 20.0);

        assert_eq!(rest, TiltState::NEUTRAL);
        assert!(!tilt.is_animating());
    }

    #[test]
    fn move_without_measurement_keeps_targets() {
        let mut tilt = TiltTransform::new(TiltConfig::default());
        tilt.on_enter();
        tilt.on_move(10.0, 10.0, None);

        let state = settle(&mut tilt, 3.0);

        assert_close(state.rotate_x, 0.0);
        assert_close(state.rotate_y, 0.0);
    }

    #[test]
    fn css_transform_includes_perspective_and_angles() {
        let state = TiltState {
            rotate_x: 5.0,
            rotate_y: -2.5,
            scale: 1.02,
            is_hovering: true,
        };

        assert_eq!(
            state.css_transform(1000.0),
            "perspective(1000px) rotateX(5.000deg) rotateY(-2.500deg) scale(1.0200)"
        );
    }

    #[test]
    fn registry_keeps_instances_apart() {
        let mut registry = TiltRegistry::new();
        let first = registry.mount(TiltConfig::default());
        let second = registry.mount(TiltConfig::default());
        assert_ne!(first, second);

        if let Some(tilt) = registry.get_mut(first) {
            tilt.on_enter();
            tilt.on_move(150.0, 100.0, Some(centered_card()));
        }
        for _ in 0..180 {
            registry.advance(first, 1.0 / 60.0);
            registry.advance(second, 1.0 / 60.0);
        }

        let first_state = registry.get(first).map(TiltTransform::state);
        let second_state = registry.get(second).map(TiltTransform::state);
        assert!(first_state.is_some_and(|state| state.is_hovering && state.rotate_y > 14.0));
        assert_eq!(second_state, Some(TiltState::NEUTRAL));
    }

    #[test]
    fn unmounted_instances_are_inert() {
        let mut registry = TiltRegistry::new();
        let id = registry.mount(TiltConfig::default());

        assert!(registry.unmount(id));
        assert!(!registry.unmount(id));
        assert_eq!(registry.advance(id, 1.0 / 60.0), None);
        assert_eq!(registry.len(), 0);
    }
}
