//! Rectangle geometry for the berth chart
//!
//! Each vessel becomes one rectangle: x from berth time, width from the
//! occupancy duration, height from the vessel length, and y stacked on top
//! of all previous vessels with a fixed gap.

use crate::vessel::VesselRecord;

/// Vertical gap between stacked vessels, in chart units
pub const VESSEL_GAP: f64 = 10.0;

/// Fraction of the data span added on each side when autoscaling
const AUTOSCALE_MARGIN: f64 = 0.05;

/// Largest coordinate magnitude the chart draws
///
/// Keeps autoscale margins, zooming out and canvas pixel math finite.
pub const MAX_CHART_EXTENT: f64 = 1e15;

/// Data-to-chart scale factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub width_scale: f64,
    pub height_scale: f64,
}

impl ChartScale {
    pub fn new(width_scale: f64, height_scale: f64) -> Self {
        Self {
            width_scale,
            height_scale,
        }
    }
}

impl Default for ChartScale {
    fn default() -> Self {
        Self::new(0.8, 0.8)
    }
}

/// Axis-aligned rectangle in chart coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectangleShape {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Boundary-inclusive point test
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.top()
    }

    /// True when every edge lies within `MAX_CHART_EXTENT` of the origin
    pub fn is_drawable(&self) -> bool {
        [self.x, self.y, self.right(), self.top()]
            .iter()
            .all(|value| value.abs() <= MAX_CHART_EXTENT)
    }
}

/// Compute the rectangle for every record, in record order
///
/// Records are assumed valid; see `VesselRecord::validate`.
pub fn compute_shapes(records: &[VesselRecord], scale: ChartScale) -> Vec<RectangleShape> {
    let mut offset = 0.0;

    records
        .iter()
        .map(|record| {
            let height = record.length * scale.height_scale;
            let shape = RectangleShape {
                x: record.berth_time * scale.width_scale,
                y: offset,
                width: record.duration() * scale.width_scale,
                height,
            };
            offset += height + VESSEL_GAP;
            shape
        })
        .collect()
}

/// Data range shown on the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Default for ChartBounds {
    fn default() -> Self {
        Self {
            x: [0.0, 1.0],
            y: [0.0, 1.0],
        }
    }
}

impl ChartBounds {
    /// Fit the bounds around all shapes with a small margin
    pub fn autoscale<'a>(shapes: impl IntoIterator<Item = &'a RectangleShape>) -> Self {
        let mut shapes = shapes.into_iter();
        let Some(first) = shapes.next() else {
            return Self::default();
        };

        let mut x = [first.x, first.right()];
        let mut y = [first.y, first.top()];
        for shape in shapes {
            x = [x[0].min(shape.x), x[1].max(shape.right())];
            y = [y[0].min(shape.y), y[1].max(shape.top())];
        }

        Self {
            x: pad_range(x),
            y: pad_range(y),
        }
    }

    pub fn width(&self) -> f64 {
        self.x[1] - self.x[0]
    }

    pub fn height(&self) -> f64 {
        self.y[1] - self.y[0]
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.x[0] + self.x[1]) / 2.0,
            (self.y[0] + self.y[1]) / 2.0,
        )
    }

    /// Edges of the part of `shape` inside the bounds, if any
    pub fn clip(&self, shape: &RectangleShape) -> Option<VisibleEdges> {
        let edges = VisibleEdges {
            left: shape.x.max(self.x[0]),
            right: shape.right().min(self.x[1]),
            bottom: shape.y.max(self.y[0]),
            top: shape.top().min(self.y[1]),
        };
        (edges.left <= edges.right && edges.bottom <= edges.top).then_some(edges)
    }
}

/// Rectangle edges clamped to the chart bounds
///
/// Kept as edges rather than a width so a clamped edge equals the bound
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleEdges {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

fn pad_range([low, high]: [f64; 2]) -> [f64; 2] {
    let span = high - low;
    if span <= 0.0 {
        return [low - 1.0, high + 1.0];
    }
    let margin = span * AUTOSCALE_MARGIN;
    [low - margin, high + margin]
}
