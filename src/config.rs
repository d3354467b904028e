//! Interaction settings read from the page's inline JSON block.
//!
//! Every key is optional. A value outside its bounds falls back to the
//! default and is reported in [`LoadedConfig::rejected`].

use serde::Deserialize;

use crate::interaction::tilt::{CARD_MAX_TILT_DEG, DEFAULT_PERSPECTIVE_PX};
use crate::interaction::tooltip::DEFAULT_TOOLTIP_OFFSET;
use crate::interaction::{SpringConfig, TiltConfig};
use crate::logging::{LogLevel, DEFAULT_LOG_LEVEL};

pub const CONFIG_ELEMENT_ID: &str = "interaction-config";

const MAX_TILT_DEG_BOUNDS: (f64, f64) = (0.0, 45.0);
const HOVER_SCALE_BOUNDS: (f64, f64) = (1.0, 1.5);
const PERSPECTIVE_PX_BOUNDS: (f64, f64) = (100.0, 5_000.0);
const SPRING_STIFFNESS_BOUNDS: (f64, f64) = (1.0, 2_000.0);
const SPRING_DAMPING_BOUNDS: (f64, f64) = (1.0, 200.0);
const SPRING_MASS_BOUNDS: (f64, f64) = (0.1, 10.0);
const TOOLTIP_OFFSET_BOUNDS: (f64, f64) = (0.0, 64.0);

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInteractionConfig {
    max_tilt: Option<f64>,
    card_max_tilt: Option<f64>,
    hover_scale: Option<f64>,
    perspective: Option<f64>,
    spring_stiffness: Option<f64>,
    spring_damping: Option<f64>,
    spring_mass: Option<f64>,
    tooltip_offset_x: Option<f64>,
    tooltip_offset_y: Option<f64>,
    log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    pub tilt: TiltConfig,
    pub card_max_tilt_deg: f64,
    pub tooltip_offset: (f64, f64),
    pub log_level: LogLevel,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            tilt: TiltConfig::default(),
            card_max_tilt_deg: CARD_MAX_TILT_DEG,
            tooltip_offset: DEFAULT_TOOLTIP_OFFSET,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedConfig {
    pub config: InteractionConfig,
    pub rejected: Vec<&'static str>,
}

impl InteractionConfig {
    /// Tilt settings for hover cards, which lean less than the base default.
    pub fn card_tilt(&self) -> TiltConfig {
        self.tilt.with_max_tilt(self.card_max_tilt_deg)
    }

    pub fn from_json(raw: &str) -> Result<LoadedConfig, serde_json::Error> {
        let raw: RawInteractionConfig = serde_json::from_str(raw)?;
        let defaults = Self::default();
        let default_spring = SpringConfig::default();
        let mut rejected = Vec::new();

        let mut bounded = |name: &'static str, value: Option<f64>, bounds: (f64, f64), default: f64| {
            match value {
                None => default,
                Some(value) if value.is_finite() && (bounds.0..=bounds.1).contains(&value) => value,
                Some(_) => {
                    rejected.push(name);
                    default
                }
            }
        };

        let tilt = TiltConfig {
            max_tilt_deg: bounded(
                "maxTilt",
                raw.max_tilt,
                MAX_TILT_DEG_BOUNDS,
                defaults.tilt.max_tilt_deg,
            ),
            hover_scale: bounded(
                "hoverScale",
                raw.hover_scale,
                HOVER_SCALE_BOUNDS,
                defaults.tilt.hover_scale,
            ),
            perspective_px: bounded(
                "perspective",
                raw.perspective,
                PERSPECTIVE_PX_BOUNDS,
                DEFAULT_PERSPECTIVE_PX,
            ),
            spring: SpringConfig {
                stiffness: bounded(
                    "springStiffness",
                    raw.spring_stiffness,
                    SPRING_STIFFNESS_BOUNDS,
                    default_spring.stiffness,
                ),
                damping: bounded(
                    "springDamping",
                    raw.spring_damping,
                    SPRING_DAMPING_BOUNDS,
                    default_spring.damping,
                ),
                mass: bounded(
                    "springMass",
                    raw.spring_mass,
                    SPRING_MASS_BOUNDS,
                    default_spring.mass,
                ),
            },
        };
        let card_max_tilt_deg = bounded(
            "cardMaxTilt",
            raw.card_max_tilt,
            MAX_TILT_DEG_BOUNDS,
            defaults.card_max_tilt_deg,
        );
        let tooltip_offset = (
            bounded(
                "tooltipOffsetX",
                raw.tooltip_offset_x,
                TOOLTIP_OFFSET_BOUNDS,
                defaults.tooltip_offset.0,
            ),
            bounded(
                "tooltipOffsetY",
                raw.tooltip_offset_y,
                TOOLTIP_OFFSET_BOUNDS,
                defaults.tooltip_offset.1,
            ),
        );

        let log_level = match raw.log_level.as_deref() {
            None => defaults.log_level,
            Some(value) => LogLevel::parse(value).unwrap_or_else(|| {
                rejected.push("logLevel");
                defaults.log_level
            }),
        };

        Ok(LoadedConfig {
            config: Self {
                tilt,
                card_max_tilt_deg,
                tooltip_offset,
                log_level,
            },
            rejected,
        })
    }
}
