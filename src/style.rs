use crate::constants::{
    MARKER_FILL, MARKER_RADIUS_PX, MARKER_STROKE, MARKER_STROKE_WIDTH_PX, RECORDING_LINE_DASH,
};
use crate::features::Category;

/// How a point marker is drawn: a filled circle with an outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
    /// Empty for a solid outline.
    pub line_dash: &'static [f64],
}

impl MarkerStyle {
    #[inline]
    pub fn is_dashed(&self) -> bool {
        !self.line_dash.is_empty()
    }

    /// Distance from the marker center to the outer edge of its stroke.
    #[inline]
    pub fn extent_px(&self) -> f64 {
        self.radius + self.stroke_width / 2.0
    }
}

const SOLID: MarkerStyle = MarkerStyle {
    radius: MARKER_RADIUS_PX,
    fill: MARKER_FILL,
    stroke: MARKER_STROKE,
    stroke_width: MARKER_STROKE_WIDTH_PX,
    line_dash: &[],
};

const DASHED: MarkerStyle = MarkerStyle {
    line_dash: &RECORDING_LINE_DASH,
    ..SOLID
};

#[inline]
pub fn resolve(category: Category) -> MarkerStyle {
    match category {
        Category::City | Category::Landmark => SOLID,
        Category::Recording => DASHED,
    }
}
