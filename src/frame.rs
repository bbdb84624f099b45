use crate::config::ViewerConfig;
use crate::dom::{self, DomSurface};
use crate::features::FeatureStore;
use crate::gesture::{GestureEvent, GestureTracker};
use crate::interaction::{FrameScheduler, InteractionController};
use crate::render::{self, Raster};
use crate::view::View;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` with a fixed callback.
#[derive(Default)]
pub struct RafScheduler {
    callback: Option<js_sys::Function>,
}

impl FrameScheduler for RafScheduler {
    fn request(&mut self) -> Option<i32> {
        let cb = self.callback.as_ref()?;
        web::window()?.request_animation_frame(cb).ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

/// Everything the page session owns: view, layers, controller and the
/// canvas they draw into.
pub struct Viewer {
    pub view: View,
    pub store: FeatureStore,
    pub raster: Option<Raster>,
    pub controller: InteractionController,
    pub surface: DomSurface,
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    reposition: RafScheduler,
    render: RafScheduler,
    render_pending: Option<i32>,
    gestures: GestureTracker,
}

impl Viewer {
    pub fn new(
        config: &ViewerConfig,
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        surface: DomSurface,
    ) -> Self {
        let size = dom::sync_canvas_backing_size(&canvas);
        let view = config.initial_view(size);
        log::info!(
            "[view] zoom={} center=({:.1},{:.1}) size={}x{}",
            view.zoom(),
            view.center().x,
            view.center().y,
            size.x,
            size.y
        );
        let controller = InteractionController::new(surface.info_box_visible());
        Self {
            view,
            store: FeatureStore::default(),
            raster: None,
            controller,
            surface,
            canvas,
            ctx,
            reposition: RafScheduler::default(),
            render: RafScheduler::default(),
            render_pending: None,
            gestures: GestureTracker::default(),
        }
    }

    /// Schedule a redraw on the next animation frame. Repeated calls before
    /// the frame runs collapse into one.
    pub fn request_render(&mut self) {
        if self.render_pending.is_none() {
            self.render_pending = self.render.request();
        }
    }

    fn render_frame(&mut self) {
        self.render_pending = None;
        render::draw(
            &self.ctx,
            &self.canvas,
            dom::device_pixel_ratio(),
            &self.view,
            self.raster.as_ref(),
            &self.store,
        );
        self.controller.on_render(&mut self.reposition);
    }

    fn reposition_frame(&mut self) {
        self.controller
            .on_animation_frame(&self.store, &self.view, &mut self.surface);
    }

    pub fn set_features(&mut self, store: FeatureStore) {
        log::info!("[features] {} points loaded", store.len());
        self.store = store;
        self.request_render();
    }

    pub fn set_raster(&mut self, raster: Raster) {
        self.raster = Some(raster);
        self.request_render();
    }

    pub fn resize(&mut self) {
        let size = dom::sync_canvas_backing_size(&self.canvas);
        self.view.set_size(size);
        // backing store was cleared by the resize, redraw regardless
        self.request_render();
    }

    // ---------------- Gestures ----------------

    pub fn pointer_down(&mut self, pointer_id: i32, pos: DVec2) {
        self.gestures.pointer_down(pointer_id, pos);
    }

    pub fn pointer_move(&mut self, pointer_id: i32, pos: DVec2) {
        self.controller
            .on_pointer_move(&self.view, pos, &mut self.surface);
        for ev in self.gestures.pointer_move(pointer_id, pos) {
            self.apply(ev);
        }
    }

    pub fn pointer_up(&mut self, pointer_id: i32, pos: DVec2) {
        if let Some(ev) = self.gestures.pointer_up(pointer_id, pos) {
            self.apply(ev);
        }
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32) {
        if let Some(ev) = self.gestures.pointer_cancel(pointer_id) {
            self.apply(ev);
        }
    }

    pub fn wheel(&mut self, delta_y: f64, delta_mode: u32, pos: DVec2) {
        for ev in self.gestures.wheel(delta_y, delta_mode, pos) {
            self.apply(ev);
        }
    }

    fn apply(&mut self, ev: GestureEvent) {
        match ev {
            GestureEvent::Click(pos) => {
                self.controller.on_click(
                    &self.store,
                    &self.view,
                    pos,
                    &mut self.surface,
                    &mut self.reposition,
                );
            }
            GestureEvent::MoveStart => self.controller.on_move_start(&mut self.reposition),
            GestureEvent::Pan(delta) => {
                if self.view.pan_by_pixels(delta) {
                    self.request_render();
                }
            }
            GestureEvent::Zoom { steps, anchor } => {
                if self.view.zoom_by(steps, Some(anchor)) {
                    log::debug!("[view] zoom={}", self.view.zoom());
                    self.request_render();
                }
            }
            GestureEvent::MoveEnd => self.controller.on_move_end(&mut self.reposition),
        }
    }

    pub fn toggle_story(&mut self) {
        self.controller.toggle_info_box(&mut self.surface);
    }
}

/// Hook the two animation-frame callbacks (render and panel reposition)
/// back into the shared viewer.
pub fn install_frame_callbacks(viewer: &Rc<RefCell<Viewer>>) {
    let v = viewer.clone();
    let render_cb = Closure::wrap(Box::new(move || {
        v.borrow_mut().render_frame();
    }) as Box<dyn FnMut()>);

    let v = viewer.clone();
    let reposition_cb = Closure::wrap(Box::new(move || {
        v.borrow_mut().reposition_frame();
    }) as Box<dyn FnMut()>);

    {
        let mut vb = viewer.borrow_mut();
        vb.render.callback = Some(render_cb.as_ref().unchecked_ref::<js_sys::Function>().clone());
        vb.reposition.callback =
            Some(reposition_cb.as_ref().unchecked_ref::<js_sys::Function>().clone());
    }
    render_cb.forget();
    reposition_cb.forget();
}
