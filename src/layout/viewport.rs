//! Mapping between terminal cells and chart coordinates
//!
//! The chart canvas covers `area` on screen and shows `bounds` in chart
//! units. Chart y grows upwards while terminal rows grow downwards.
//!
//! The mapping follows the half-block canvas grid: `area.width` pixel columns
//! and two pixel rows per terminal row, with the bounds spread over the gaps
//! between the first and last pixel. `cell_shows` repeats the grid's own
//! rounding so hit-testing agrees with what is painted.

use ratatui::layout::Rect;

use crate::chart::{ChartBounds, RectangleShape};

/// Canvas pixel rows per terminal row with the half-block marker
const PIXELS_PER_ROW: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub bounds: ChartBounds,
}

impl Viewport {
    pub fn new(area: Rect, bounds: ChartBounds) -> Self {
        Self { area, bounds }
    }

    pub fn contains_cell(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }

    /// Gaps between the first and last pixel column
    fn column_steps(&self) -> f64 {
        f64::from(self.area.width) - 1.0
    }

    /// Gaps between the first and last pixel row
    fn row_steps(&self) -> f64 {
        f64::from(self.area.height) * PIXELS_PER_ROW - 1.0
    }

    /// Chart units between adjacent pixel columns
    pub fn x_units_per_pixel(&self) -> f64 {
        if self.area.is_empty() {
            return 0.0;
        }
        self.bounds.width() / self.column_steps().max(1.0)
    }

    /// Chart units between adjacent pixel rows
    pub fn y_units_per_pixel(&self) -> f64 {
        if self.area.is_empty() {
            return 0.0;
        }
        self.bounds.height() / self.row_steps().max(1.0)
    }

    /// Chart region drawn into a cell
    ///
    /// Covers every point the canvas grid assigns to one of the cell's
    /// pixels. Returns `None` when the cell is outside the canvas.
    pub fn cell_span(&self, column: u16, row: u16) -> Option<RectangleShape> {
        if !self.contains_cell(column, row) {
            return None;
        }

        let [left, right] = self.bounds.x;
        let [bottom, top] = self.bounds.y;

        let (x_low, x_high) = if self.column_steps() < 1.0 {
            (left, right)
        } else {
            let column = f64::from(column - self.area.x);
            let pitch = self.x_units_per_pixel();
            (
                (left + column * pitch).min(right),
                (left + (column + 1.0) * pitch).min(right),
            )
        };

        let first_pixel = f64::from(row - self.area.y) * PIXELS_PER_ROW;
        let pitch = self.y_units_per_pixel();
        let y_high = top - first_pixel * pitch;
        let y_low = (top - (first_pixel + PIXELS_PER_ROW) * pitch).max(bottom);

        Some(RectangleShape {
            x: x_low,
            y: y_low,
            width: x_high - x_low,
            height: y_high - y_low,
        })
    }

    /// Chart coordinates of the middle of a cell's span
    ///
    /// Returns `None` when the cell is outside the canvas.
    pub fn cell_to_data(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        self.cell_span(column, row).map(|span| span.center())
    }

    /// Cell the canvas paints a point into
    ///
    /// Returns `None` when the point is outside the shown bounds.
    pub fn data_to_cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let (column, pixel_row) = self.pixel_at(x, y)?;

        Some((
            self.area.x + column.min(self.area.width - 1),
            self.area.y + (pixel_row / 2).min(self.area.height - 1),
        ))
    }

    /// True when painting `shape` colors part of the cell
    pub fn cell_shows(&self, shape: &RectangleShape, column: u16, row: u16) -> bool {
        if !self.contains_cell(column, row) {
            return false;
        }
        let Some(edges) = self.bounds.clip(shape) else {
            return false;
        };
        let (Some((first_column, top_row)), Some((last_column, bottom_row))) = (
            self.pixel_at(edges.left, edges.top),
            self.pixel_at(edges.right, edges.bottom),
        ) else {
            return false;
        };

        let column = column - self.area.x;
        let upper_row = (row - self.area.y).saturating_mul(2);
        (first_column..=last_column).contains(&column)
            && top_row <= upper_row.saturating_add(1)
            && upper_row <= bottom_row
    }

    /// Canvas pixel of a point, rounded the way the canvas grid rounds it
    fn pixel_at(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let [left, right] = self.bounds.x;
        let [bottom, top] = self.bounds.y;
        let (width, height) = (self.bounds.width(), self.bounds.height());
        if self.area.is_empty()
            || width <= 0.0
            || height <= 0.0
            || x < left
            || x > right
            || y < bottom
            || y > top
        {
            return None;
        }

        Some((
            ((x - left) * self.column_steps() / width) as u16,
            ((top - y) * self.row_steps() / height) as u16,
        ))
    }
}
