// Selection, side panel and info box behaviour.
//
// The controller owns the interaction state and talks to the page only
// through [`PanelSurface`] and [`FrameScheduler`], so the browser glue stays
// thin and the behaviour can be exercised off-browser.

use crate::constants::HIT_TOLERANCE_PX;
use crate::features::FeatureStore;
use crate::geo;
use crate::panel::{self, PanelContent};
use crate::view::View;
use glam::DVec2;

/// The DOM elements the controller updates. Implementations skip elements
/// that are missing from the page.
pub trait PanelSurface {
    fn set_panel_content(&mut self, content: &PanelContent);
    /// Reveal the side panel. Returns false when there is no panel element.
    fn show_panel(&mut self) -> bool;
    fn set_panel_transform(&mut self, transform: &str);
    fn set_info_box_hidden(&mut self, hidden: bool);
    fn set_readout(&mut self, text: &str);
}

/// One-shot animation-frame callbacks, identified by the handle returned
/// from `request`.
pub trait FrameScheduler {
    fn request(&mut self) -> Option<i32>;
    fn cancel(&mut self, handle: i32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Open { feature: usize },
}

#[derive(Debug)]
pub struct InteractionController {
    state: PanelState,
    info_visible: bool,
    pending_frame: Option<i32>,
    hit_tolerance_px: f64,
}

impl InteractionController {
    pub fn new(info_visible: bool) -> Self {
        Self {
            state: PanelState::Idle,
            info_visible,
            pending_frame: None,
            hit_tolerance_px: HIT_TOLERANCE_PX,
        }
    }

    #[inline]
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        match self.state {
            PanelState::Open { feature } => Some(feature),
            PanelState::Idle => None,
        }
    }

    #[inline]
    pub fn panel_visible(&self) -> bool {
        matches!(self.state, PanelState::Open { .. })
    }

    #[inline]
    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    #[inline]
    pub fn pending_frame(&self) -> Option<i32> {
        self.pending_frame
    }

    /// Map click at `pixel`. Opens the panel on the feature under the
    /// pointer; a click on empty map leaves everything as it is.
    pub fn on_click(
        &mut self,
        store: &FeatureStore,
        view: &View,
        pixel: DVec2,
        surface: &mut impl PanelSurface,
        scheduler: &mut impl FrameScheduler,
    ) -> Option<usize> {
        let index = store.hit_test(view, pixel, self.hit_tolerance_px)?;
        let feature = store.get(index)?;
        log::info!("[click] feature {} '{}'", index, feature.name);

        surface.set_panel_content(&PanelContent::for_feature(feature));
        if surface.show_panel() {
            self.state = PanelState::Open { feature: index };
            self.request_reposition(scheduler);
        }
        self.info_visible = false;
        surface.set_info_box_hidden(true);
        Some(index)
    }

    /// Schedule a panel reposition on the next animation frame, replacing
    /// any request that has not run yet.
    pub fn request_reposition(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending_frame.take() {
            scheduler.cancel(handle);
        }
        self.pending_frame = scheduler.request();
    }

    /// Animation-frame callback for a reposition request.
    pub fn on_animation_frame(
        &mut self,
        store: &FeatureStore,
        view: &View,
        surface: &mut impl PanelSurface,
    ) {
        self.pending_frame = None;
        let PanelState::Open { feature } = self.state else {
            return;
        };
        if let Some(f) = store.get(feature) {
            let pixel = view.pixel_from_coordinate(f.position);
            surface.set_panel_transform(&panel::panel_transform(pixel));
        }
    }

    #[inline]
    pub fn on_move_start(&mut self, scheduler: &mut impl FrameScheduler) {
        self.request_reposition(scheduler);
    }

    #[inline]
    pub fn on_move_end(&mut self, scheduler: &mut impl FrameScheduler) {
        self.request_reposition(scheduler);
    }

    #[inline]
    pub fn on_render(&mut self, scheduler: &mut impl FrameScheduler) {
        self.request_reposition(scheduler);
    }

    /// Story button. Leaves the panel and the selection untouched.
    pub fn toggle_info_box(&mut self, surface: &mut impl PanelSurface) {
        self.info_visible = !self.info_visible;
        surface.set_info_box_hidden(!self.info_visible);
    }

    pub fn on_pointer_move(&self, view: &View, pixel: DVec2, surface: &mut impl PanelSurface) {
        let lon_lat = geo::to_lon_lat(view.coordinate_from_pixel(pixel));
        surface.set_readout(&geo::format_readout(lon_lat));
    }
}
