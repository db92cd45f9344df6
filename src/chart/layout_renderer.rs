//! Berth layout rendering
//!
//! Validates the vessel records, computes one rectangle per vessel and draws
//! the rectangles with their number labels onto a `DrawingSurface`.

use super::chart_context::{ChartContext, VesselShape};
use super::geometry::{ChartScale, compute_shapes};
use super::hover_probe::HoverState;
use super::surface::{DrawingSurface, TooltipSink};
use crate::error::ValidationError;
use crate::theme;
use crate::vessel::VesselRecord;

/// Non-fatal condition reported by a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderWarning {
    /// No records were given; the chart is empty
    EmptyInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub shapes: usize,
    pub warning: Option<RenderWarning>,
}

pub struct LayoutRenderer {
    scale: ChartScale,
}

impl LayoutRenderer {
    pub fn new(scale: ChartScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> ChartScale {
        self.scale
    }

    /// Replace the chart with the layout of `records`
    ///
    /// On a validation failure, or when a vessel lands too far out to draw,
    /// nothing is drawn and the chart is left empty.
    pub fn render<S>(
        &self,
        ctx: &mut ChartContext,
        records: &[VesselRecord],
        surface: &mut S,
    ) -> Result<RenderSummary, ValidationError>
    where
        S: DrawingSurface + TooltipSink,
    {
        if let Err(e) = records.iter().try_for_each(VesselRecord::validate) {
            return Err(reject(ctx, surface, e));
        }

        let shapes = compute_shapes(records, self.scale);
        if let Some((record, _)) = records
            .iter()
            .zip(&shapes)
            .find(|(_, shape)| !shape.is_drawable())
        {
            let e = ValidationError::OutOfRange {
                vessel: record.number(),
            };
            return Err(reject(ctx, surface, e));
        }

        ctx.clear();
        reset_surface(surface);

        let mut placed = Vec::with_capacity(shapes.len());

        for (record, shape) in records.iter().zip(shapes) {
            let color = theme::vessels::vessel_color(record.index);
            surface.draw_rectangle(&shape, color, theme::chart::VESSEL_BORDER);

            let (center_x, center_y) = shape.center();
            surface.draw_text(
                center_x,
                center_y,
                &record.number().to_string(),
                theme::chart::VESSEL_LABEL,
            );

            placed.push(VesselShape {
                index: record.index,
                shape,
                color,
                record: *record,
            });
        }

        let count = placed.len();
        ctx.replace_shapes(placed);
        surface.flush();

        let warning = if count == 0 {
            log::warn!("No vessels to draw");
            Some(RenderWarning::EmptyInput)
        } else {
            None
        };

        log::debug!("Rendered berth layout with {} vessels", count);

        Ok(RenderSummary {
            shapes: count,
            warning,
        })
    }
}

/// Leave the chart empty after a failed render
fn reject<S>(ctx: &mut ChartContext, surface: &mut S, e: ValidationError) -> ValidationError
where
    S: DrawingSurface + TooltipSink,
{
    log::error!("Rejected vessel table: {}", e);
    ctx.clear();
    reset_surface(surface);
    surface.flush();
    e
}

fn reset_surface<S>(surface: &mut S)
where
    S: DrawingSurface + TooltipSink,
{
    surface.clear();
    surface.update_annotation(&HoverState::Hidden);
}
