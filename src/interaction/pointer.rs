//! Raw and normalized pointer coordinates.

/// An element's bounding box in viewport pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Returns `None` until the element has a usable layout box.
    pub fn measured(left: f64, top: f64, width: f64, height: f64) -> Option<Self> {
        let finite = [left, top, width, height].iter().all(|value| value.is_finite());
        if !finite || width <= 0.0 || height <= 0.0 {
            return None;
        }

        Some(Self {
            left,
            top,
            width,
            height,
        })
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.left + self.half_width(),
            self.top + self.half_height(),
        )
    }

    /// Edges count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn measured(width: f64, height: f64) -> Option<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return None;
        }

        Some(Self { width, height })
    }
}

/// What pointer coordinates are measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReferenceFrame {
    Viewport(Viewport),
    Element(Rect),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub normalized_x: f64,
    pub normalized_y: f64,
    pub is_inside: bool,
}

/// Maps `value` in `0..=extent` onto `-1..=1`.
fn normalize(value: f64, extent: f64) -> f64 {
    (value / extent) * 2.0 - 1.0
}

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    sample: PointerSample,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&self) -> PointerSample {
        self.sample
    }

    /// Records a pointer move. An unmeasured frame leaves the previous sample
    /// in place and returns `None`.
    pub fn on_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        frame: Option<ReferenceFrame>,
    ) -> Option<PointerSample> {
        let sample = match frame? {
            ReferenceFrame::Viewport(viewport) => PointerSample {
                x: client_x,
                y: client_y,
                normalized_x: normalize(client_x, viewport.width),
                normalized_y: normalize(client_y, viewport.height),
                is_inside: true,
            },
            ReferenceFrame::Element(rect) => {
                let x = client_x - rect.left;
                let y = client_y - rect.top;
                PointerSample {
                    x,
                    y,
                    normalized_x: normalize(x, rect.width),
                    normalized_y: normalize(y, rect.height),
                    is_inside: rect.contains(client_x, client_y),
                }
            }
        };

        self.sample = sample;
        Some(sample)
    }

    /// Coordinates keep their last values; only the inside flag drops.
    pub fn on_leave(&mut self) -> PointerSample {
        self.sample.is_inside = false;
        self.sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::assert_close;

    fn card() -> Rect {
        Rect::measured(50.0, 50.0, 100.0, 100.0).expect("valid rect")
    }

    #[test]
    fn viewport_origin_normalizes_to_top_left_corner() {
        let mut tracker = PointerTracker::new();
        let viewport = Viewport::measured(1920.0, 1080.0).expect("valid viewport");

        let sample = tracker
            .on_move(0.0, 0.0, Some(ReferenceFrame::Viewport(viewport)))
            .expect("measured frame yields a sample");

        assert_close(sample.normalized_x, -1.0);
        assert_close(sample.normalized_y, -1.0);
        assert!(sample.is_inside);
    }

    #[test]
    fn viewport_mode_keeps_absolute_coordinates() {
        let mut tracker = PointerTracker::new();
        let viewport = Viewport::measured(1920.0, 1080.0).expect("valid viewport");

        let sample = tracker
            .on_move(960.0, 270.0, Some(ReferenceFrame::Viewport(viewport)))
            .expect("measured frame yields a sample");

        assert_close(sample.x, 960.0);
        assert_close(sample.y, 270.0);
        assert_close(sample.normalized_x, 0.0);
        assert_close(sample.normalized_y, -0.5);
    }

    #[test]
    fn element_mode_is_relative_to_origin() {
        let mut tracker = PointerTracker::new();

        let sample = tracker
            .on_move(75.0, 150.0, Some(ReferenceFrame::Element(card())))
            .expect("measured frame yields a sample");

        assert_close(sample.x, 25.0);
        assert_close(sample.y, 100.0);
        assert_close(sample.normalized_x, -0.5);
        assert_close(sample.normalized_y, 1.0);
        assert!(sample.is_inside);
    }

    #[test]
    fn element_edges_map_to_unit_range_and_count_as_inside() {
        let mut tracker = PointerTracker::new();
        let frame = Some(ReferenceFrame::Element(card()));

        let left = tracker.on_move(50.0, 100.0, frame).expect("sample");
        assert_close(left.normalized_x, -1.0);
        assert!(left.is_inside);

        let right = tracker.on_move(150.0, 100.0, frame).expect("sample");
        assert_close(right.normalized_x, 1.0);
        assert!(right.is_inside);

        let bottom = tracker.on_move(100.0, 150.0, frame).expect("sample");
        assert_close(bottom.normalized_y, 1.0);
        assert!(bottom.is_inside);
    }

    #[test]
    fn positions_outside_the_element_are_reported_outside() {
        let mut tracker = PointerTracker::new();
        let frame = Some(ReferenceFrame::Element(card()));

        for (x, y) in [(49.9, 100.0), (150.1, 100.0), (100.0, 49.9), (100.0, 150.1)] {
            let sample = tracker.on_move(x, y, frame).expect("sample");
            assert!(!sample.is_inside, "({x}, {y}) should be outside");
        }
    }

    #[test]
    fn leave_keeps_last_coordinates() {
        let mut tracker = PointerTracker::new();
        tracker.on_move(80.0, 90.0, Some(ReferenceFrame::Element(card())));

        let sample = tracker.on_leave();

        assert!(!sample.is_inside);
        assert_close(sample.x, 30.0);
        assert_close(sample.y, 40.0);
    }

    #[test]
    fn unmeasured_frame_is_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.on_move(80.0, 90.0, Some(ReferenceFrame::Element(card())));
        let before = tracker.sample();

        assert!(tracker.on_move(10.0, 10.0, None).is_none());
        assert_eq!(tracker.sample(), before);
    }

    #[test]
    fn zero_sized_layout_is_not_a_measurement() {
        assert!(Rect::measured(0.0, 0.0, 0.0, 20.0).is_none());
        assert!(Rect::measured(0.0, 0.0, 20.0, f64::NAN).is_none());
        assert!(Viewport::measured(0.0, 1080.0).is_none());
    }
}
