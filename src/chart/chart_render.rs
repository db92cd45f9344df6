use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, BorderType, Paragraph,
        canvas::{Canvas, Context, Line as CanvasLine},
    },
};

use super::chart_view::ChartView;
use super::geometry::{RectangleShape, VisibleEdges};
use super::hover_probe::HoverState;
use super::scene::{ChartScene, DrawOp};
use crate::layout::Viewport;
use crate::theme;
use crate::widgets::popup;

const TOOLTIP_OFFSET_X: u16 = 2;
const TOOLTIP_OFFSET_Y: u16 = 1;
const TOOLTIP_PADDING: u16 = 4; // borders + one space each side

// Smallest rectangle, in canvas pixels, that still gets an outline
const MIN_OUTLINED_PIXELS: f64 = 4.0;

const EMPTY_HINT: &str = "Press Enter or click Draw Port Layout to plot the berth layout";

/// Render the chart pane
///
/// Shows the scene through `view`. Returns the pane area for region tracking
/// and the viewport of the canvas inside its border.
pub fn render_pane(
    scene: &ChartScene,
    view: &ChartView,
    frame: &mut Frame,
    area: Rect,
) -> (Rect, Viewport) {
    let bounds = view.apply(scene.bounds());
    let axis_style = Style::default().fg(theme::chart::AXIS_LABEL);

    let block = Block::bordered()
        .border_style(Style::default().fg(theme::chart::BORDER))
        .title(Line::styled(pane_title(view), theme::chart::TITLE).centered())
        .title(
            Line::styled(
                format!(
                    " Berth Position (m): {} .. {} ",
                    axis_value(bounds.y[0]),
                    axis_value(bounds.y[1])
                ),
                axis_style,
            )
            .right_aligned(),
        )
        .title_bottom(
            Line::styled(
                format!(
                    " Berth Time (minutes): {} .. {} ",
                    axis_value(bounds.x[0]),
                    axis_value(bounds.x[1])
                ),
                axis_style,
            )
            .centered(),
        )
        .style(Style::default().bg(theme::chart::BACKGROUND));

    let viewport = Viewport::new(block.inner(area), bounds);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::HalfBlock)
        .background_color(theme::chart::BACKGROUND)
        .x_bounds(bounds.x)
        .y_bounds(bounds.y)
        .paint(|ctx| paint_rectangles(ctx, scene, &viewport));

    frame.render_widget(canvas, area);
    render_labels(frame, scene, &viewport);

    if scene.ops().is_empty() {
        render_empty_hint(frame, viewport.area);
    }

    if let HoverState::Shown { text, anchor } = scene.annotation() {
        render_annotation(frame, &viewport, text, *anchor);
    }

    (area, viewport)
}

fn pane_title(view: &ChartView) -> String {
    if view.is_reset() {
        " Port Planning ".to_string()
    } else {
        format!(" Port Planning [zoom {:.2}x] ", view.zoom())
    }
}

fn axis_value(value: f64) -> String {
    if value.abs() < 0.5 {
        return "0".to_string();
    }
    format!("{:.0}", value)
}

fn paint_rectangles(ctx: &mut Context, scene: &ChartScene, viewport: &Viewport) {
    let pixel_width = viewport.x_units_per_pixel();
    let pixel_height = viewport.y_units_per_pixel();

    for op in scene.ops() {
        let DrawOp::Rectangle {
            shape,
            fill,
            border,
        } = op
        else {
            continue;
        };

        // Canvas lines with an end outside the bounds are dropped entirely
        let Some(visible) = viewport.bounds.clip(shape) else {
            continue;
        };

        fill_rectangle(ctx, &visible, *fill, pixel_height / 2.0);

        if shape.width >= MIN_OUTLINED_PIXELS * pixel_width
            && shape.height >= MIN_OUTLINED_PIXELS * pixel_height
        {
            outline_rectangle(ctx, shape, &visible, *border);
        }
    }
}

/// Fill with horizontal lines closer together than one pixel row
fn fill_rectangle(ctx: &mut Context, visible: &VisibleEdges, color: Color, step: f64) {
    let mut y = visible.bottom;
    if step > 0.0 {
        while y < visible.top {
            horizontal_line(ctx, visible, y, color);
            y += step;
        }
    }
    horizontal_line(ctx, visible, visible.top, color);
}

fn horizontal_line(ctx: &mut Context, visible: &VisibleEdges, y: f64, color: Color) {
    ctx.draw(&CanvasLine {
        x1: visible.left,
        y1: y,
        x2: visible.right,
        y2: y,
        color,
    });
}

/// Draw the edges of `shape` that were not clipped away
fn outline_rectangle(
    ctx: &mut Context,
    shape: &RectangleShape,
    visible: &VisibleEdges,
    color: Color,
) {
    for (edge, x) in [(shape.x, visible.left), (shape.right(), visible.right)] {
        if edge == x {
            ctx.draw(&CanvasLine {
                x1: x,
                y1: visible.bottom,
                x2: x,
                y2: visible.top,
                color,
            });
        }
    }
    for (edge, y) in [(shape.y, visible.bottom), (shape.top(), visible.top)] {
        if edge == y {
            horizontal_line(ctx, visible, y, color);
        }
    }
}

/// Print vessel labels centered on the cell of their anchor point
fn render_labels(frame: &mut Frame, scene: &ChartScene, viewport: &Viewport) {
    let buffer = frame.buffer_mut();

    for op in scene.ops() {
        if let DrawOp::Text { x, y, text, style } = op
            && let Some((column, row)) = viewport.data_to_cell(*x, *y)
        {
            let width = text.chars().count() as u16;
            let start = column.saturating_sub(width / 2).max(viewport.area.x);
            let max_width = viewport.area.right().saturating_sub(start);
            buffer.set_line(start, row, &Line::styled(text.clone(), *style), max_width);
        }
    }
}

fn render_empty_hint(frame: &mut Frame, inner: Rect) {
    if inner.height == 0 {
        return;
    }

    let hint_area = Rect {
        x: inner.x,
        y: inner.y + inner.height / 2,
        width: inner.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::styled(
        EMPTY_HINT,
        Style::default().fg(theme::chart::EMPTY_HINT),
    ))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Render the hover tooltip next to its anchor
fn render_annotation(frame: &mut Frame, viewport: &Viewport, text: &str, anchor: (f64, f64)) {
    let Some((column, row)) = viewport.data_to_cell(anchor.0, anchor.1) else {
        return;
    };

    let lines: Vec<Line> = text.lines().map(|line| Line::from(format!(" {} ", line))).collect();
    let content_width = text.lines().map(|line| line.chars().count()).max().unwrap_or(0) as u16;

    let area = tooltip_area(
        viewport.area,
        column,
        row,
        content_width + TOOLTIP_PADDING,
        lines.len() as u16 + 2,
    );
    if area.width == 0 || area.height == 0 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::tooltip::BORDER))
        .style(Style::default().bg(theme::tooltip::BACKGROUND));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(theme::tooltip::TEXT))
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Position a tooltip of the given size next to the pointer cell
///
/// Prefers the area up and to the right of the pointer and flips to the
/// other side when that would leave `bounds`.
pub fn tooltip_area(bounds: Rect, column: u16, row: u16, width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let right_x = column.saturating_add(TOOLTIP_OFFSET_X);
    let x = if right_x.saturating_add(width) <= bounds.right() {
        right_x
    } else {
        column
            .saturating_sub(TOOLTIP_OFFSET_X + width)
            .max(bounds.x)
    };

    let y = match row.checked_sub(TOOLTIP_OFFSET_Y + height) {
        Some(above) if above >= bounds.y => above,
        _ => row
            .saturating_add(TOOLTIP_OFFSET_Y + 1)
            .min(bounds.bottom().saturating_sub(height))
            .max(bounds.y),
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}
