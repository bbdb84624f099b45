// Host-side tests for GeoJSON loading, marker styles and hit testing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod geo {
    include!("../src/geo.rs");
}
mod view {
    include!("../src/view.rs");
}
mod config {
    include!("../src/config.rs");
}
mod style {
    include!("../src/style.rs");
}
mod features {
    include!("../src/features.rs");
}

use features::{Category, FeatureStore, LoadError, PointFeature};
use glam::DVec2;
use view::View;

const POINTS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "type": "city", "name": "Noto", "description": "Baroque town" },
      "geometry": { "type": "Point", "coordinates": [15.0696, 36.8906] }
    },
    {
      "type": "Feature",
      "properties": {
        "type": "recording",
        "name": "Market voices",
        "description": "Field recording",
        "audio_url": "audio/market.mp3",
        "image_url": ""
      },
      "geometry": { "type": "Point", "coordinates": [15.2866, 37.0755] }
    },
    {
      "type": "Feature",
      "properties": { "type": "museum", "name": "Castle", "image_url": "img/castle.jpg" },
      "geometry": { "type": "Point", "coordinates": [15.1, 37.2] }
    },
    {
      "type": "Feature",
      "properties": null,
      "geometry": { "type": "Point", "coordinates": [15.2, 37.3] }
    },
    {
      "type": "Feature",
      "properties": { "type": "city", "name": "A road" },
      "geometry": { "type": "LineString", "coordinates": [[15.0, 37.0], [15.1, 37.1]] }
    },
    {
      "type": "Feature",
      "properties": { "name": "Nowhere" },
      "geometry": null
    }
  ]
}"#;

fn view() -> View {
    config::ViewerConfig::default().initial_view(DVec2::new(800.0, 600.0))
}

fn feature_at(view: &View, pixel: DVec2, name: &str, category: Category) -> PointFeature {
    PointFeature {
        category,
        name: name.to_string(),
        description: String::new(),
        audio_url: None,
        image_url: None,
        position: view.coordinate_from_pixel(pixel),
    }
}

#[test]
fn loads_point_features_and_skips_others() {
    let store = FeatureStore::from_geojson_str(POINTS).expect("valid collection");
    assert_eq!(store.len(), 4);
    let names: Vec<&str> = store.features().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Noto", "Market voices", "Castle", ""]);
}

#[test]
fn categories_fall_back_to_landmark() {
    let store = FeatureStore::from_geojson_str(POINTS).unwrap();
    let cats: Vec<Category> = store.features().iter().map(|f| f.category).collect();
    assert_eq!(
        cats,
        [
            Category::City,
            Category::Recording,
            Category::Landmark,
            Category::Landmark
        ]
    );
    assert_eq!(Category::parse(None), Category::Landmark);
    assert_eq!(Category::parse(Some("CITY")), Category::Landmark);
}

#[test]
fn optional_media_and_missing_text() {
    let store = FeatureStore::from_geojson_str(POINTS).unwrap();
    let rec = store.get(1).unwrap();
    assert_eq!(rec.audio_url.as_deref(), Some("audio/market.mp3"));
    assert_eq!(rec.image_url, None, "empty url counts as absent");

    let castle = store.get(2).unwrap();
    assert_eq!(castle.description, "");
    assert_eq!(castle.image_url.as_deref(), Some("img/castle.jpg"));
    assert_eq!(castle.audio_url, None);
}

#[test]
fn positions_are_projected() {
    let store = FeatureStore::from_geojson_str(POINTS).unwrap();
    let noto = store.get(0).unwrap();
    let expected = geo::from_lon_lat(DVec2::new(15.0696, 36.8906));
    assert!((noto.position - expected).length() < 1e-6);
}

#[test]
fn malformed_input_is_an_error() {
    assert!(matches!(
        FeatureStore::from_geojson_str("{ not json"),
        Err(LoadError::Json(_))
    ));
    assert!(matches!(
        FeatureStore::from_geojson_str(r#"{"type":"Feature","geometry":null}"#),
        Err(LoadError::NotACollection(kind)) if kind == "Feature"
    ));
}

#[test]
fn empty_collection_loads_empty() {
    let store = FeatureStore::from_geojson_str(r#"{"type":"FeatureCollection","features":[]}"#)
        .unwrap();
    assert!(store.is_empty());
}

#[test]
fn recording_style_is_dashed_others_solid() {
    let city = style::resolve(Category::City);
    let landmark = style::resolve(Category::Landmark);
    let recording = style::resolve(Category::Recording);

    assert!(!city.is_dashed());
    assert!(!landmark.is_dashed());
    assert!(recording.is_dashed());
    assert_eq!(recording.line_dash, &[2.0, 2.0]);

    for s in [city, landmark, recording] {
        assert_eq!(s.radius, 8.0);
        assert_eq!(s.fill, "rgba(255,255,255)");
        assert_eq!(s.stroke, "#000");
        assert_eq!(s.stroke_width, 2.0);
    }
}

#[test]
fn unknown_category_styles_like_landmark() {
    let store = FeatureStore::from_geojson_str(POINTS).unwrap();
    let castle = store.get(2).unwrap();
    assert_eq!(
        style::resolve(castle.category),
        style::resolve(Category::Landmark)
    );
}

#[test]
fn hit_within_tolerance() {
    let v = view();
    let store = FeatureStore::from(vec![feature_at(
        &v,
        DVec2::new(200.0, 200.0),
        "a",
        Category::City,
    )]);
    // marker edge is 9px out, tolerance adds 10px
    assert_eq!(store.hit_test(&v, DVec2::new(200.0, 200.0), 10.0), Some(0));
    assert_eq!(store.hit_test(&v, DVec2::new(218.0, 200.0), 10.0), Some(0));
    assert_eq!(store.hit_test(&v, DVec2::new(220.0, 200.0), 10.0), None);
    assert_eq!(store.hit_test(&v, DVec2::new(210.0, 200.0), 0.0), None);
}

#[test]
fn nearest_feature_wins() {
    let v = view();
    let store = FeatureStore::from(vec![
        feature_at(&v, DVec2::new(300.0, 300.0), "near", Category::City),
        feature_at(&v, DVec2::new(312.0, 300.0), "far", Category::Landmark),
    ]);
    assert_eq!(store.hit_test(&v, DVec2::new(303.0, 300.0), 10.0), Some(0));
    assert_eq!(store.hit_test(&v, DVec2::new(310.0, 300.0), 10.0), Some(1));
}

#[test]
fn equal_distance_prefers_topmost() {
    let v = view();
    let store = FeatureStore::from(vec![
        feature_at(&v, DVec2::new(300.0, 300.0), "below", Category::City),
        feature_at(&v, DVec2::new(300.0, 300.0), "above", Category::Recording),
    ]);
    assert_eq!(store.hit_test(&v, DVec2::new(305.0, 302.0), 10.0), Some(1));
}

#[test]
fn empty_store_never_hits() {
    let v = view();
    assert_eq!(FeatureStore::default().hit_test(&v, DVec2::new(1.0, 1.0), 10.0), None);
}

#[test]
fn bad_feature_does_not_drop_its_neighbours() {
    let src = r#"{
      "type": "FeatureCollection",
      "features": [
        { "type": "Feature", "properties": { "name": "untyped" },
          "geometry": { "coordinates": [15.1, 37.1] } },
        { "type": "Feature", "properties": { "name": "stringly" },
          "geometry": { "type": "Point", "coordinates": "oops" } },
        { "type": "Feature", "properties": { "name": "short" },
          "geometry": { "type": "Point", "coordinates": [15.1] } },
        { "type": "Feature", "properties": "not an object",
          "geometry": { "type": "Point", "coordinates": [15.3, 37.3] } },
        42,
        { "type": "Feature", "properties": { "name": "good" },
          "geometry": { "type": "Point", "coordinates": [15.2, 37.2] } }
      ]
    }"#;
    let store = FeatureStore::from_geojson_str(src).expect("envelope is valid");
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().name, "good");
}

#[test]
fn bad_envelope_still_fails() {
    assert!(matches!(
        FeatureStore::from_geojson_str(r#"{"features":[]}"#),
        Err(LoadError::Json(_))
    ));
    assert!(matches!(
        FeatureStore::from_geojson_str(r#"{"type":"FeatureCollection","features":{}}"#),
        Err(LoadError::Json(_))
    ));
}
