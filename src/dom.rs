use crate::constants::*;
use crate::interaction::PanelSurface;
use crate::panel::PanelContent;
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn has_class(document: &web::Document, element_id: &str, class: &str) -> bool {
    document
        .get_element_by_id(element_id)
        .map(|el| el.class_list().contains(class))
        .unwrap_or(false)
}

#[inline]
pub fn set_class(document: &web::Document, element_id: &str, class: &str, on: bool) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
    true
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the CSS size, which is what the view works in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    let dpr = device_pixel_ratio();
    canvas.set_width(((rect.width() * dpr) as u32).max(1));
    canvas.set_height(((rect.height() * dpr) as u32).max(1));
    DVec2::new(rect.width(), rect.height())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r > 0.0)
        .unwrap_or(1.0)
}

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

/// The page elements the interaction controller writes to.
pub struct DomSurface {
    document: web::Document,
    readout: Option<web::Element>,
}

impl DomSurface {
    /// Creates the coordinate readout and appends it to `<body>`.
    pub fn new(document: web::Document) -> Self {
        let readout = document.create_element("div").ok();
        if let Some(el) = &readout {
            el.set_class_name(COORDS_OVERLAY_CLASS);
            if let Some(body) = document.body() {
                _ = body.append_child(el);
            }
        }
        Self { document, readout }
    }

    pub fn info_box_visible(&self) -> bool {
        self.document.get_element_by_id(STORY_BOX_ID).is_some()
            && !has_class(&self.document, STORY_BOX_ID, HIDDEN_CLASS)
    }
}

impl PanelSurface for DomSurface {
    fn set_panel_content(&mut self, content: &PanelContent) {
        if let Some(el) = self.document.get_element_by_id(POINT_TITLE_ID) {
            el.set_text_content(Some(&content.title));
        }
        if let Some(el) = self.document.get_element_by_id(POINT_DESCRIPTION_ID) {
            el.set_text_content(Some(&content.description));
        }
        if let Some(el) = self.document.get_element_by_id(POINT_MEDIA_ID) {
            el.set_inner_html(&content.media_html);
        }
    }

    fn show_panel(&mut self) -> bool {
        set_class(&self.document, SIDE_PANEL_ID, VISIBLE_CLASS, true)
    }

    fn set_panel_transform(&mut self, transform: &str) {
        if let Some(el) = self
            .document
            .get_element_by_id(SIDE_PANEL_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            _ = el.style().set_property("transform", transform);
        }
    }

    fn set_info_box_hidden(&mut self, hidden: bool) {
        set_class(&self.document, STORY_BOX_ID, HIDDEN_CLASS, hidden);
    }

    fn set_readout(&mut self, text: &str) {
        if let Some(el) = &self.readout {
            el.set_text_content(Some(text));
        }
    }
}
