use crate::constants::*;
use crate::geo::{self, Extent};
use crate::view::{View, ViewConstraints};
use glam::DVec2;

/// Startup settings for the viewer.
///
/// Defaults come from `constants.rs`; the page may override the two resource
/// URLs with `data-points-url` / `data-raster-url` on the map container.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub points_url: String,
    pub raster_url: String,
    pub raster_extent_lon_lat: [f64; 4],
    pub center_lon_lat: [f64; 2],
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            points_url: POINTS_URL.to_string(),
            raster_url: RASTER_URL.to_string(),
            raster_extent_lon_lat: RASTER_EXTENT_LON_LAT,
            center_lon_lat: INITIAL_CENTER_LON_LAT,
            zoom: INITIAL_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl ViewerConfig {
    /// Apply optional URL overrides; blank values are ignored.
    pub fn with_overrides(mut self, points_url: Option<String>, raster_url: Option<String>) -> Self {
        if let Some(url) = points_url.filter(|u| !u.trim().is_empty()) {
            self.points_url = url;
        }
        if let Some(url) = raster_url.filter(|u| !u.trim().is_empty()) {
            self.raster_url = url;
        }
        self
    }

    #[inline]
    pub fn raster_extent(&self) -> Extent {
        Extent::from_lon_lat(self.raster_extent_lon_lat)
    }

    pub fn constraints(&self) -> ViewConstraints {
        ViewConstraints {
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            extent: self.raster_extent(),
        }
    }

    /// Initial view for a viewport of `size` CSS pixels.
    pub fn initial_view(&self, size: DVec2) -> View {
        let center = geo::from_lon_lat(DVec2::from_array(self.center_lon_lat));
        View::new(center, self.zoom, size, self.constraints())
    }
}
