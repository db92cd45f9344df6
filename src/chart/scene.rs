//! In-memory chart scene
//!
//! Records draw calls so the terminal render pass can paint them onto a
//! canvas every frame. Also serves as the tooltip sink.

use ratatui::style::{Color, Style};

use super::geometry::{ChartBounds, RectangleShape};
use super::hover_probe::HoverState;
use super::surface::{DrawingSurface, TooltipSink};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rectangle {
        shape: RectangleShape,
        fill: Color,
        border: Color,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        style: Style,
    },
}

#[derive(Debug, Default)]
pub struct ChartScene {
    ops: Vec<DrawOp>,
    pending: Vec<DrawOp>,
    annotation: HoverState,
    flushes: u64,
}

impl ChartScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations of the last flushed drawing
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn annotation(&self) -> &HoverState {
        &self.annotation
    }

    /// Number of completed drawings, used to detect redraws
    pub fn flush_count(&self) -> u64 {
        self.flushes
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &RectangleShape> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rectangle { shape, .. } => Some(shape),
            DrawOp::Text { .. } => None,
        })
    }

    /// Data range needed to show every rectangle
    pub fn bounds(&self) -> ChartBounds {
        ChartBounds::autoscale(self.rectangles())
    }
}

impl DrawingSurface for ChartScene {
    fn clear(&mut self) {
        self.ops.clear();
        self.pending.clear();
    }

    fn draw_rectangle(&mut self, shape: &RectangleShape, fill: Color, border: Color) {
        self.pending.push(DrawOp::Rectangle {
            shape: *shape,
            fill,
            border,
        });
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, style: Style) {
        self.pending.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            style,
        });
    }

    fn flush(&mut self) {
        self.ops.append(&mut self.pending);
        self.flushes = self.flushes.wrapping_add(1);
    }
}

impl TooltipSink for ChartScene {
    fn update_annotation(&mut self, hover: &HoverState) {
        self.annotation = hover.clone();
    }
}
