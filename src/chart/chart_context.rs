use ratatui::style::Color;

use super::geometry::{ChartBounds, RectangleShape};
use super::hover_probe::HoverState;
use crate::vessel::VesselRecord;

/// One drawn vessel: geometry plus the record it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct VesselShape {
    pub index: usize,
    pub shape: RectangleShape,
    pub color: Color,
    pub record: VesselRecord,
}

/// State shared by the layout renderer and the hover probe
///
/// Holds the shape list of the last render pass and the current tooltip
/// state. A render pass replaces both; the probe only touches the hover state.
#[derive(Debug, Default)]
pub struct ChartContext {
    shapes: Vec<VesselShape>,
    hover: HoverState,
}

impl ChartContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[VesselShape] {
        &self.shapes
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn bounds(&self) -> ChartBounds {
        ChartBounds::autoscale(self.shapes.iter().map(|vessel| &vessel.shape))
    }

    /// Drop all shapes and hide the tooltip
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.hover = HoverState::Hidden;
    }

    pub(super) fn replace_shapes(&mut self, shapes: Vec<VesselShape>) {
        self.shapes = shapes;
        self.hover = HoverState::Hidden;
    }

    pub(super) fn set_hover(&mut self, hover: HoverState) {
        self.hover = hover;
    }
}
