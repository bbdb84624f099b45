pub mod pointer;

use crate::constants::STORY_TOGGLE_ID;
use crate::dom;
use crate::frame::Viewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use pointer::wire_map_handlers;

/// Story button: toggles the info box and keeps the click away from the map.
pub fn wire_story_toggle(document: &web::Document, viewer: &Rc<RefCell<Viewer>>) {
    let v = viewer.clone();
    dom::add_click_listener(document, STORY_TOGGLE_ID, move |ev| {
        ev.stop_propagation();
        v.borrow_mut().toggle_story();
    });
}

pub fn wire_resize(viewer: &Rc<RefCell<Viewer>>) {
    let v = viewer.clone();
    let closure = Closure::wrap(Box::new(move || {
        v.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
