/// Viewer layout and interaction tuning constants.
///
/// These keep magic numbers out of the view, renderer and controller code.
/// Geographic values are lon/lat degrees unless the name says otherwise.

// Raster georeference: [min_lon, min_lat, max_lon, max_lat]
pub const RASTER_EXTENT_LON_LAT: [f64; 4] = [14.5576, 36.4288, 15.6647, 37.8435];
pub const RASTER_URL: &str = "map_modified7.jpg";
pub const POINTS_URL: &str = "data/points.geojson";

// Initial view
pub const INITIAL_CENTER_LON_LAT: [f64; 2] = [15.19288667801232, 37.179305076835767];
pub const INITIAL_ZOOM: f64 = 11.0; // below MIN_ZOOM, clamped at construction
pub const MIN_ZOOM: f64 = 12.0;
pub const MAX_ZOOM: f64 = 14.0;

// Web Mercator
pub const EARTH_RADIUS_M: f64 = 6378137.0;
pub const MAX_LATITUDE: f64 = 85.0511287798;
pub const TILE_SIZE_PX: f64 = 256.0;

// Markers
pub const MARKER_RADIUS_PX: f64 = 8.0;
pub const MARKER_STROKE_WIDTH_PX: f64 = 2.0;
pub const MARKER_FILL: &str = "rgba(255,255,255)";
pub const MARKER_STROKE: &str = "#000";
pub const RECORDING_LINE_DASH: [f64; 2] = [2.0, 2.0];

// Interaction
pub const HIT_TOLERANCE_PX: f64 = 10.0; // slack around the drawn marker
pub const PANEL_OFFSET_PX: [f64; 2] = [20.0, -20.0]; // panel sits up-right of the point
pub const DRAG_THRESHOLD_PX: f64 = 4.0; // pointer travel before a press becomes a pan
pub const COORD_DECIMALS: usize = 4;

// Wheel: scroll distance is normalised to pixels, one zoom level per step
pub const WHEEL_STEP_PX: f64 = 100.0;
pub const WHEEL_LINE_PX: f64 = 40.0; // DOM_DELTA_LINE
pub const WHEEL_PAGE_PX: f64 = 800.0; // DOM_DELTA_PAGE

// DOM contract
pub const MAP_ID: &str = "map";
pub const SIDE_PANEL_ID: &str = "sidePanel";
pub const POINT_TITLE_ID: &str = "pointTitle";
pub const POINT_DESCRIPTION_ID: &str = "pointDescription";
pub const POINT_MEDIA_ID: &str = "pointMedia";
pub const STORY_BOX_ID: &str = "storyBox";
pub const STORY_TOGGLE_ID: &str = "toggleStory";
pub const COORDS_OVERLAY_CLASS: &str = "coords-overlay";
pub const VISIBLE_CLASS: &str = "visible";
pub const HIDDEN_CLASS: &str = "hidden";
