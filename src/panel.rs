// Side panel content and placement.

use crate::constants::PANEL_OFFSET_PX;
use crate::features::PointFeature;
use glam::DVec2;

/// What the side panel shows for one feature.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelContent {
    pub title: String,
    pub description: String,
    /// Inner HTML for the media area.
    pub media_html: String,
}

impl PanelContent {
    pub fn for_feature(feature: &PointFeature) -> Self {
        Self {
            title: feature.name.clone(),
            description: feature.description.clone(),
            media_html: media_markup(feature),
        }
    }
}

/// An `<audio>` element when the feature has audio, then an `<img>` when it
/// has an image. Empty when it has neither.
pub fn media_markup(feature: &PointFeature) -> String {
    let mut html = String::new();
    if let Some(url) = &feature.audio_url {
        html.push_str(&format!(r#"<audio controls src="{}"></audio>"#, escape_attr(url)));
    }
    if let Some(url) = &feature.image_url {
        html.push_str(&format!(
            r#"<img src="{}" alt="{}">"#,
            escape_attr(url),
            escape_attr(&feature.name)
        ));
    }
    html
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Panel top-left for a feature drawn at `pixel`.
#[inline]
pub fn panel_offset(pixel: DVec2) -> DVec2 {
    pixel + DVec2::from_array(PANEL_OFFSET_PX)
}

/// CSS `transform` value placing the panel next to `pixel`.
pub fn panel_transform(pixel: DVec2) -> String {
    let p = panel_offset(pixel);
    format!("translate3d({}px, {}px, 0)", p.x, p.y)
}
