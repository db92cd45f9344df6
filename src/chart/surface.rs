//! Drawing capabilities used by the layout renderer
//!
//! The renderer only talks to these traits, so geometry and hover logic run
//! without a terminal. `ChartScene` is the implementation the app paints from.

use ratatui::style::{Color, Style};

use super::geometry::RectangleShape;
use super::hover_probe::HoverState;

/// A 2D canvas in chart coordinates
pub trait DrawingSurface {
    /// Remove everything drawn so far
    fn clear(&mut self);

    fn draw_rectangle(&mut self, shape: &RectangleShape, fill: Color, border: Color);

    /// Draw text centered on the given point
    fn draw_text(&mut self, x: f64, y: f64, text: &str, style: Style);

    /// Mark the drawing as complete and ready to display
    fn flush(&mut self);
}

/// Receives tooltip annotation updates
pub trait TooltipSink {
    fn update_annotation(&mut self, hover: &HoverState);
}
