#![cfg(target_arch = "wasm32")]
use crate::config::ViewerConfig;
use crate::constants::MAP_ID;
use crate::frame::Viewer;
use crate::geo::Extent;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod features;
mod frame;
mod gesture;
mod geo;
mod interaction;
mod loader;
mod panel;
mod render;
mod style;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("story-map-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = canvas.set_attribute("style", "display:block;width:100%;height:100%;touch-action:none");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((canvas, ctx))
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(MAP_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MAP_ID))?;

    let config = ViewerConfig::default().with_overrides(
        container.get_attribute("data-points-url"),
        container.get_attribute("data-raster-url"),
    );
    let (canvas, ctx) = create_canvas(&document, &container)?;
    let surface = dom::DomSurface::new(document.clone());

    let viewer = Rc::new(RefCell::new(Viewer::new(&config, canvas.clone(), ctx, surface)));
    frame::install_frame_callbacks(&viewer);
    events::wire_map_handlers(&viewer, &canvas);
    events::wire_story_toggle(&document, &viewer);
    events::wire_resize(&viewer);
    viewer.borrow_mut().request_render();

    spawn_raster_load(viewer.clone(), config.raster_url.clone(), config.raster_extent());
    spawn_points_load(viewer, config.points_url);
    Ok(())
}

fn spawn_raster_load(viewer: Rc<RefCell<Viewer>>, url: String, extent: Extent) {
    spawn_local(async move {
        match loader::load_image(&url).await {
            Ok(image) => viewer
                .borrow_mut()
                .set_raster(render::Raster { image, extent }),
            Err(e) => log::error!("[raster] {:?}", e),
        }
    });
}

fn spawn_points_load(viewer: Rc<RefCell<Viewer>>, url: String) {
    spawn_local(async move {
        match loader::fetch_points(&url).await {
            Ok(store) => viewer.borrow_mut().set_features(store),
            // layer stays empty
            Err(e) => log::error!("[features] {}: {:?}", url, e),
        }
    });
}
