use crate::dom;
use crate::frame::Viewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pan, zoom, click and coordinate readout on the map canvas.
pub fn wire_map_handlers(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    wire_pointerdown(viewer, canvas);
    wire_pointermove(viewer, canvas);
    wire_pointerup(viewer, canvas);
    wire_pointercancel(viewer, canvas);
    wire_wheel(viewer, canvas);
}

fn listen<E: FromWasmAbi + 'static>(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let v = viewer.clone();
    let c = canvas.clone();
    listen(canvas, "pointerdown", move |ev: web::PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 {
            return;
        }
        let pos = dom::pointer_css_px(&ev, &c);
        v.borrow_mut().pointer_down(ev.pointer_id(), pos);
        _ = c.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let v = viewer.clone();
    let c = canvas.clone();
    listen(canvas, "pointermove", move |ev: web::PointerEvent| {
        let pos = dom::pointer_css_px(&ev, &c);
        v.borrow_mut().pointer_move(ev.pointer_id(), pos);
    });
}

fn wire_pointerup(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let v = viewer.clone();
    let c = canvas.clone();
    listen(canvas, "pointerup", move |ev: web::PointerEvent| {
        let pos = dom::pointer_css_px(&ev, &c);
        v.borrow_mut().pointer_up(ev.pointer_id(), pos);
        _ = c.release_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointercancel(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let v = viewer.clone();
    listen(canvas, "pointercancel", move |ev: web::PointerEvent| {
        v.borrow_mut().pointer_cancel(ev.pointer_id());
    });
}

fn wire_wheel(viewer: &Rc<RefCell<Viewer>>, canvas: &web::HtmlCanvasElement) {
    let v = viewer.clone();
    let c = canvas.clone();
    listen(canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let pos = dom::pointer_css_px(&ev, &c);
        v.borrow_mut().wheel(ev.delta_y(), ev.delta_mode(), pos);
    });
}
