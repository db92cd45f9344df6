//! Zoom and pan over the autoscaled chart bounds

use super::geometry::ChartBounds;

/// Zoom factor applied per zoom step
const ZOOM_STEP: f64 = 1.25;
const MIN_ZOOM_LEVEL: i32 = -6;
const MAX_ZOOM_LEVEL: i32 = 18;

/// Fraction of the shown span moved per pan step
const PAN_STEP: f64 = 0.1;

/// Pan limit as a fraction of the autoscaled span from its center
const MAX_PAN: f64 = 1.0;

/// User view over the chart
///
/// Stored relative to the autoscaled bounds so that it stays meaningful when
/// the terminal is resized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartView {
    zoom_level: i32,
    /// View center offset in fractions of the autoscaled span
    offset: (f64, f64),
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        ZOOM_STEP.powi(self.zoom_level)
    }

    /// True when the view shows the autoscaled bounds unchanged
    pub fn is_reset(&self) -> bool {
        self.zoom_level == 0 && self.offset == (0.0, 0.0)
    }

    /// Bounds to show for the given autoscaled bounds
    pub fn apply(&self, base: ChartBounds) -> ChartBounds {
        if self.is_reset() {
            return base;
        }

        let (center_x, center_y) = base.center();
        let center_x = center_x + self.offset.0 * base.width();
        let center_y = center_y + self.offset.1 * base.height();
        let half_width = base.width() / 2.0 / self.zoom();
        let half_height = base.height() / 2.0 / self.zoom();

        ChartBounds {
            x: [center_x - half_width, center_x + half_width],
            y: [center_y - half_height, center_y + half_height],
        }
    }

    /// Returns false when already at the limit
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom_level(self.zoom_level + 1)
    }

    /// Returns false when already at the limit
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom_level(self.zoom_level - 1)
    }

    fn set_zoom_level(&mut self, level: i32) -> bool {
        let level = level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL);
        let changed = level != self.zoom_level;
        self.zoom_level = level;
        changed
    }

    /// Move the view by whole pan steps; positive is right and up
    ///
    /// Returns false when the view did not move.
    pub fn pan(&mut self, steps_x: i32, steps_y: i32) -> bool {
        let step = PAN_STEP / self.zoom();
        let offset = (
            (self.offset.0 + f64::from(steps_x) * step).clamp(-MAX_PAN, MAX_PAN),
            (self.offset.1 + f64::from(steps_y) * step).clamp(-MAX_PAN, MAX_PAN),
        );
        let changed = offset != self.offset;
        self.offset = offset;
        changed
    }

    /// Back to the autoscaled bounds; returns false when already there
    pub fn reset(&mut self) -> bool {
        let changed = !self.is_reset();
        *self = Self::default();
        changed
    }
}
