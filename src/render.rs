use crate::features::FeatureStore;
use crate::geo::Extent;
use crate::style::{self, MarkerStyle};
use crate::view::View;
use glam::DVec2;
use web_sys as web;

/// Georeferenced base image.
pub struct Raster {
    pub image: web::HtmlImageElement,
    pub extent: Extent,
}

/// Draw one frame: raster first, then markers in store order so later
/// features end up on top.
pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    dpr: f64,
    view: &View,
    raster: Option<&Raster>,
    store: &FeatureStore,
) {
    _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

    if let Some(r) = raster {
        draw_raster(ctx, view, r);
    }

    let size = view.size();
    for f in store.features() {
        let s = style::resolve(f.category);
        let p = view.pixel_from_coordinate(f.position);
        let r = s.extent_px();
        if p.x < -r || p.y < -r || p.x > size.x + r || p.y > size.y + r {
            continue;
        }
        draw_marker(ctx, p, &s);
    }
}

fn draw_raster(ctx: &web::CanvasRenderingContext2d, view: &View, raster: &Raster) {
    if !raster.image.complete() || raster.image.natural_width() == 0 {
        return;
    }
    let top_left = view.pixel_from_coordinate(DVec2::new(raster.extent.min.x, raster.extent.max.y));
    let bottom_right =
        view.pixel_from_coordinate(DVec2::new(raster.extent.max.x, raster.extent.min.y));
    let wh = bottom_right - top_left;
    if let Err(e) = ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &raster.image,
        top_left.x,
        top_left.y,
        wh.x,
        wh.y,
    ) {
        log::warn!("[render] raster draw failed: {:?}", e);
    }
}

fn draw_marker(ctx: &web::CanvasRenderingContext2d, p: DVec2, s: &MarkerStyle) {
    ctx.begin_path();
    if ctx
        .arc(p.x, p.y, s.radius, 0.0, std::f64::consts::TAU)
        .is_err()
    {
        return;
    }
    ctx.set_fill_style_str(s.fill);
    ctx.fill();

    let dash = js_sys::Array::new();
    for d in s.line_dash {
        dash.push(&wasm_bindgen::JsValue::from_f64(*d));
    }
    _ = ctx.set_line_dash(&dash);
    ctx.set_stroke_style_str(s.stroke);
    ctx.set_line_width(s.stroke_width);
    ctx.stroke();
}
