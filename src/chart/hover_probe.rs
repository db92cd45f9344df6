//! Pointer hit-testing against the rendered shape list
//!
//! Maps a pointer position in chart coordinates to the tooltip that should be
//! shown. Only the hover state in `ChartContext` is ever modified.

use super::chart_context::ChartContext;
use super::geometry::RectangleShape;
use crate::vessel::VesselRecord;

/// Tooltip annotation state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Hidden,
    Shown {
        text: String,
        /// Pointer position in chart coordinates
        anchor: (f64, f64),
    },
}

impl HoverState {
    pub fn is_visible(&self) -> bool {
        matches!(self, HoverState::Shown { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            HoverState::Shown { text, .. } => Some(text),
            HoverState::Hidden => None,
        }
    }

    pub fn anchor(&self) -> Option<(f64, f64)> {
        match self {
            HoverState::Shown { anchor, .. } => Some(*anchor),
            HoverState::Hidden => None,
        }
    }
}

/// Result of a pointer move
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub state: HoverState,
    /// True when the tooltip display must be updated
    pub redraw: bool,
}

/// Tooltip text for a vessel
pub fn tooltip_text(record: &VesselRecord) -> String {
    format!(
        "length: {}m\nberth time: {}\ndeparture time: {}",
        record.length, record.berth_time, record.departure_time
    )
}

pub struct HoverProbe;

impl HoverProbe {
    /// Update hover state for a pointer at `(x, y)` in chart coordinates
    ///
    /// `inside_chart` is false when the pointer is outside the plotting area,
    /// in which case the coordinates are ignored. The first shape (lowest
    /// index) containing the point wins.
    pub fn on_pointer_move(
        ctx: &mut ChartContext,
        x: f64,
        y: f64,
        inside_chart: bool,
    ) -> ProbeOutcome {
        Self::on_pointer_over(ctx, (x, y), inside_chart, |shape| {
            shape.contains(x, y)
        })
    }

    /// Update hover state with a custom hit test
    ///
    /// For pointers coarser than the chart, such as a terminal cell, where
    /// `hits` decides whether a shape is under the pointer. The first shape
    /// hit wins and the tooltip is anchored at `anchor`.
    pub fn on_pointer_over(
        ctx: &mut ChartContext,
        anchor: (f64, f64),
        inside_chart: bool,
        hits: impl Fn(&RectangleShape) -> bool,
    ) -> ProbeOutcome {
        let hit = if inside_chart {
            ctx.shapes()
                .iter()
                .find(|vessel| hits(&vessel.shape))
                .map(|vessel| HoverState::Shown {
                    text: tooltip_text(&vessel.record),
                    anchor,
                })
        } else {
            None
        };

        let next = match hit {
            Some(shown) => shown,
            None if ctx.hover().is_visible() => HoverState::Hidden,
            None => {
                return ProbeOutcome {
                    state: ctx.hover().clone(),
                    redraw: false,
                };
            }
        };

        let redraw = *ctx.hover() != next;
        if redraw {
            log::trace!("Hover changed: visible={}", next.is_visible());
        }
        ctx.set_hover(next.clone());

        ProbeOutcome {
            state: next,
            redraw,
        }
    }
}
