// View state for the map: center, zoom and viewport size, plus the
// constraints that keep the raster filling the screen.

use crate::constants::{EARTH_RADIUS_M, TILE_SIZE_PX};
use crate::geo::Extent;
use glam::DVec2;

/// Metres per pixel at zoom 0 for 256px tiles.
pub const ZOOM0_RESOLUTION: f64 = 2.0 * std::f64::consts::PI * EARTH_RADIUS_M / TILE_SIZE_PX;

#[inline]
pub fn resolution_for_zoom(zoom: f64) -> f64 {
    ZOOM0_RESOLUTION / 2f64.powf(zoom)
}

#[derive(Clone, Copy, Debug)]
pub struct ViewConstraints {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub extent: Extent,
}

/// Current viewport onto the map.
///
/// Zoom is always an integer inside `[min_zoom, max_zoom]` and the visible
/// extent never leaves `constraints.extent` on an axis where the extent is
/// larger than the viewport.
#[derive(Clone, Debug)]
pub struct View {
    center: DVec2,
    zoom: f64,
    size: DVec2,
    constraints: ViewConstraints,
}

impl View {
    pub fn new(center: DVec2, zoom: f64, size: DVec2, constraints: ViewConstraints) -> Self {
        let mut view = Self {
            center,
            zoom,
            size: size.max(DVec2::ONE),
            constraints,
        };
        view.zoom = view.constrain_zoom(zoom);
        view.center = view.constrain_center(center);
        view
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        self.size
    }

    #[inline]
    pub fn resolution(&self) -> f64 {
        resolution_for_zoom(self.zoom)
    }

    #[inline]
    pub fn constraints(&self) -> &ViewConstraints {
        &self.constraints
    }

    /// Screen pixel (CSS px, origin top-left) for a map coordinate.
    pub fn pixel_from_coordinate(&self, coord: DVec2) -> DVec2 {
        let res = self.resolution();
        DVec2::new(
            (coord.x - self.center.x) / res + self.size.x / 2.0,
            (self.center.y - coord.y) / res + self.size.y / 2.0,
        )
    }

    /// Map coordinate under a screen pixel.
    pub fn coordinate_from_pixel(&self, pixel: DVec2) -> DVec2 {
        let res = self.resolution();
        DVec2::new(
            self.center.x + (pixel.x - self.size.x / 2.0) * res,
            self.center.y - (pixel.y - self.size.y / 2.0) * res,
        )
    }

    pub fn visible_extent(&self) -> Extent {
        let half = self.size * self.resolution() * 0.5;
        Extent::new(self.center - half, self.center + half)
    }

    /// Drag the map by a screen delta. Returns true if the center moved.
    pub fn pan_by_pixels(&mut self, delta: DVec2) -> bool {
        let res = self.resolution();
        let target = DVec2::new(self.center.x - delta.x * res, self.center.y + delta.y * res);
        self.set_center(target)
    }

    pub fn set_center(&mut self, center: DVec2) -> bool {
        let next = self.constrain_center(center);
        let changed = next != self.center;
        self.center = next;
        changed
    }

    /// Step the zoom by `delta` levels, keeping the map coordinate under
    /// `anchor` in place when one is given. Returns true if the view changed.
    pub fn zoom_by(&mut self, delta: f64, anchor: Option<DVec2>) -> bool {
        let next_zoom = self.constrain_zoom(self.zoom + delta);
        if next_zoom == self.zoom {
            return false;
        }
        let anchor_px = anchor.unwrap_or(self.size / 2.0);
        let anchor_coord = self.coordinate_from_pixel(anchor_px);
        self.zoom = next_zoom;
        let res = self.resolution();
        let center = DVec2::new(
            anchor_coord.x - (anchor_px.x - self.size.x / 2.0) * res,
            anchor_coord.y + (anchor_px.y - self.size.y / 2.0) * res,
        );
        self.center = self.constrain_center(center);
        true
    }

    /// Resize the viewport (CSS px). Re-applies both constraints.
    pub fn set_size(&mut self, size: DVec2) -> bool {
        let size = size.max(DVec2::ONE);
        if size == self.size {
            return false;
        }
        self.size = size;
        self.zoom = self.constrain_zoom(self.zoom);
        self.center = self.constrain_center(self.center);
        true
    }

    /// Lowest zoom at which the viewport still fits inside the extent,
    /// never below the configured minimum.
    fn fit_min_zoom(&self) -> f64 {
        let ext = self.constraints.extent.size();
        let needed = (self.size.x * ZOOM0_RESOLUTION / ext.x)
            .max(self.size.y * ZOOM0_RESOLUTION / ext.y);
        let fit = if needed.is_finite() && needed > 0.0 {
            needed.log2().ceil()
        } else {
            self.constraints.min_zoom
        };
        fit.max(self.constraints.min_zoom)
    }

    fn constrain_zoom(&self, zoom: f64) -> f64 {
        let lo = self.fit_min_zoom().min(self.constraints.max_zoom);
        let zoom = if zoom.is_finite() { zoom.round() } else { lo };
        zoom.clamp(lo, self.constraints.max_zoom)
    }

    fn constrain_center(&self, center: DVec2) -> DVec2 {
        let ext = self.constraints.extent;
        let half = self.size * self.resolution() * 0.5;
        let axis = |c: f64, lo: f64, hi: f64, h: f64| {
            if hi - lo <= 2.0 * h {
                (lo + hi) / 2.0
            } else {
                c.clamp(lo + h, hi - h)
            }
        };
        DVec2::new(
            axis(center.x, ext.min.x, ext.max.x, half.x),
            axis(center.y, ext.min.y, ext.max.y, half.y),
        )
    }
}
