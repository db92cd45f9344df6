//! Berth allocation chart
//!
//! `LayoutRenderer` turns vessel records into rectangles on a
//! `DrawingSurface`, and `HoverProbe` finds the rectangle under the pointer.
//! Both work on a shared `ChartContext`. `ChartScene` is the in-memory surface
//! that `chart_render` paints onto the terminal, through the zoom and pan of
//! a `ChartView`.

mod chart_context;
pub mod chart_render;
mod chart_view;
mod geometry;
mod hover_probe;
mod layout_renderer;
mod scene;
mod surface;

pub use chart_context::{ChartContext, VesselShape};
pub use chart_view::ChartView;
pub use geometry::{
    ChartBounds, ChartScale, RectangleShape, VESSEL_GAP, VisibleEdges, compute_shapes,
};
pub use hover_probe::{HoverProbe, HoverState, ProbeOutcome, tooltip_text};
pub use layout_renderer::{LayoutRenderer, RenderSummary, RenderWarning};
pub use scene::{ChartScene, DrawOp};
pub use surface::{DrawingSurface, TooltipSink};

#[cfg(test)]
#[path = "chart/geometry_tests.rs"]
mod geometry_tests;
