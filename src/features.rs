// Point-of-interest layer: GeoJSON parsing and screen-space hit testing.

use crate::geo;
use crate::style;
use crate::view::View;
use glam::DVec2;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a FeatureCollection, got {0:?}")]
    NotACollection(String),
}

/// Marker category, read from the `type` property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    City,
    #[default]
    Landmark,
    Recording,
}

impl Category {
    /// Unknown or missing values fall back to `Landmark`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("city") => Category::City,
            Some("recording") => Category::Recording,
            _ => Category::Landmark,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointFeature {
    pub category: Category,
    pub name: String,
    pub description: String,
    pub audio_url: Option<String>,
    pub image_url: Option<String>,
    /// EPSG:3857 metres
    pub position: DVec2,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Value>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

// All fields optional; point_lon_lat does the validation.
#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    coordinates: Option<Value>,
}

// Strings pass through, numbers and bools are stringified, empty is absent.
fn text(props: &Map<String, Value>, key: &str) -> Option<String> {
    let s = match props.get(key)? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

fn point_lon_lat(geometry: &RawGeometry) -> Option<DVec2> {
    if geometry.kind.as_deref() != Some("Point") {
        return None;
    }
    let coords = geometry.coordinates.as_ref()?.as_array()?;
    let lon = coords.first()?.as_f64()?;
    let lat = coords.get(1)?.as_f64()?;
    (lon.is_finite() && lat.is_finite()).then(|| DVec2::new(lon, lat))
}

/// Loaded point features, in draw order (last is topmost).
#[derive(Clone, Debug, Default)]
pub struct FeatureStore {
    features: Vec<PointFeature>,
}

impl From<Vec<PointFeature>> for FeatureStore {
    fn from(features: Vec<PointFeature>) -> Self {
        Self { features }
    }
}

impl FeatureStore {
    pub fn from_geojson_str(src: &str) -> Result<Self, LoadError> {
        let raw: RawCollection = serde_json::from_str(src)?;
        if raw.kind != "FeatureCollection" {
            return Err(LoadError::NotACollection(raw.kind));
        }
        let mut store = FeatureStore::default();
        for (i, value) in raw.features.into_iter().enumerate() {
            let f: RawFeature = match serde_json::from_value(value) {
                Ok(f) => f,
                Err(e) => {
                    log::warn!("[features] skipping malformed feature {}: {}", i, e);
                    continue;
                }
            };
            let Some(lon_lat) = f.geometry.as_ref().and_then(point_lon_lat) else {
                log::warn!("[features] skipping feature {} without a point geometry", i);
                continue;
            };
            let props = f.properties.unwrap_or_default();
            let feature = PointFeature {
                category: Category::parse(props.get("type").and_then(Value::as_str)),
                name: text(&props, "name").unwrap_or_default(),
                description: text(&props, "description").unwrap_or_default(),
                audio_url: text(&props, "audio_url"),
                image_url: text(&props, "image_url"),
                position: geo::from_lon_lat(lon_lat),
            };
            log::debug!("[features] loaded {:?} '{}'", feature.category, feature.name);
            store.features.push(feature);
        }
        Ok(store)
    }

    #[inline]
    pub fn features(&self) -> &[PointFeature] {
        &self.features
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&PointFeature> {
        self.features.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Index of the feature under `pixel`, if any.
    ///
    /// A marker is hit within its drawn extent plus `tolerance_px`. The
    /// nearest hit wins; on a tie the topmost (later) feature wins.
    pub fn hit_test(&self, view: &View, pixel: DVec2, tolerance_px: f64) -> Option<usize> {
        let mut best = None::<(usize, f64)>;
        for (i, f) in self.features.iter().enumerate() {
            let reach = style::resolve(f.category).extent_px() + tolerance_px;
            let d = view.pixel_from_coordinate(f.position).distance(pixel);
            if d > reach {
                continue;
            }
            match best {
                Some((_, bd)) if d > bd => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }
}
