use crate::chart::{
    ChartContext, ChartScene, ChartView, HoverProbe, LayoutRenderer, RenderWarning, TooltipSink,
};
use crate::config::Config;
use crate::layout::{LayoutRegions, Viewport};
use crate::notification::NotificationState;
use crate::vessel::VesselRecord;

pub struct App {
    /// Vessel table, read once at startup
    pub records: Vec<VesselRecord>,
    pub chart: ChartContext,
    pub renderer: LayoutRenderer,
    pub scene: ChartScene,
    /// Zoom and pan over the drawn layout
    pub view: ChartView,
    /// Canvas area and data bounds of the last render pass
    pub viewport: Option<Viewport>,
    pub layout_regions: LayoutRegions,
    pub notification: NotificationState,
    pub button_hovered: bool,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(records: Vec<VesselRecord>, config: &Config) -> Self {
        Self {
            records,
            chart: ChartContext::new(),
            renderer: LayoutRenderer::new(config.chart.scale()),
            scene: ChartScene::new(),
            view: ChartView::new(),
            viewport: None,
            layout_regions: LayoutRegions::new(),
            notification: NotificationState::new(),
            button_hovered: false,
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render the berth layout of the loaded records
    ///
    /// The view goes back to fitting the whole layout.
    pub fn draw_layout(&mut self) {
        self.view.reset();
        match self
            .renderer
            .render(&mut self.chart, &self.records, &mut self.scene)
        {
            Ok(summary) => match summary.warning {
                Some(RenderWarning::EmptyInput) => {
                    self.notification.show_warning("No vessels to draw");
                }
                None => {
                    self.notification
                        .show(&format!("Plotted {} vessels", summary.shapes));
                }
            },
            Err(e) => {
                self.notification.show_error(&e.to_string());
            }
        }
        self.mark_dirty();
    }

    /// Apply a zoom or pan step to the chart view
    ///
    /// The tooltip is hidden when the view moves since the shape under the
    /// pointer changes with it.
    pub fn change_view(&mut self, change: impl FnOnce(&mut ChartView) -> bool) {
        if !change(&mut self.view) {
            return;
        }

        let outcome = HoverProbe::on_pointer_move(&mut self.chart, 0.0, 0.0, false);
        if outcome.redraw {
            self.scene.update_annotation(&outcome.state);
        }
        log::debug!("Chart view zoom {:.2}x", self.view.zoom());
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// True when the screen is stale or a notification may need to expire
    pub fn should_render(&self) -> bool {
        self.needs_render || self.notification.current().is_some()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
