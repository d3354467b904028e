//! Cursor-relative interaction primitives shared by the page components.
//!
//! Nothing in here touches the DOM. The browser layer measures elements,
//! forwards pointer events and renders whatever these types compute, which
//! keeps the math testable on the host.

pub mod pointer;
pub mod spring;
pub mod tilt;
pub mod tooltip;

pub use pointer::{PointerSample, PointerTracker, Rect, ReferenceFrame, Viewport};
pub use spring::{SmoothedValue, Spring, SpringConfig};
pub use tilt::{TiltConfig, TiltId, TiltRegistry, TiltState};
pub use tooltip::{
    overlay_placement, OverlayPlacement, TooltipAction, TooltipChannel, TooltipState,
    TriggerRegion,
};

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
