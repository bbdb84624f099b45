// Geographic primitives: EPSG:4326 ⇄ EPSG:3857 and bounding extents.
//
// Map coordinates are spherical Web Mercator metres (EPSG:3857) stored in a
// `DVec2` as `(x, y)`. Geographic coordinates are `(lon, lat)` in degrees.

use crate::constants::{COORD_DECIMALS, EARTH_RADIUS_M, MAX_LATITUDE};
use glam::DVec2;

/// Project a lon/lat pair (degrees) to Web Mercator metres.
#[inline]
pub fn from_lon_lat(lon_lat: DVec2) -> DVec2 {
    let lat = lon_lat.y.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = EARTH_RADIUS_M * lon_lat.x.to_radians();
    let y = EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln();
    DVec2::new(x, y)
}

/// Inverse of [`from_lon_lat`].
#[inline]
pub fn to_lon_lat(coord: DVec2) -> DVec2 {
    let lon = (coord.x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (coord.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2)
        .to_degrees();
    DVec2::new(lon, lat)
}

/// Axis-aligned box in map coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: DVec2,
    pub max: DVec2,
}

impl Extent {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Build from `[min_lon, min_lat, max_lon, max_lat]` and project to metres.
    pub fn from_lon_lat(bounds: [f64; 4]) -> Self {
        Self::new(
            from_lon_lat(DVec2::new(bounds[0], bounds[1])),
            from_lon_lat(DVec2::new(bounds[2], bounds[3])),
        )
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// True when `other` lies entirely inside `self`, with a small slack for
    /// floating point drift.
    pub fn contains_extent(&self, other: &Extent) -> bool {
        const EPS: f64 = 1e-6;
        other.min.x >= self.min.x - EPS
            && other.min.y >= self.min.y - EPS
            && other.max.x <= self.max.x + EPS
            && other.max.y <= self.max.y + EPS
    }
}

/// Text for the cursor coordinate readout, e.g. `LAT: 37.1793, LNG: 15.1929`.
pub fn format_readout(lon_lat: DVec2) -> String {
    format!(
        "LAT: {:.*}, LNG: {:.*}",
        COORD_DECIMALS, lon_lat.y, COORD_DECIMALS, lon_lat.x
    )
}
