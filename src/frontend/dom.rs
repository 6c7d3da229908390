use std::{cell::RefCell, rc::Rc};

use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::{Function, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement};

use crate::transform::Rect;

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

pub fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// A property of the global object, if the page defined it.
pub fn global(name: &str) -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

pub fn global_function(name: &str) -> Option<Function> {
    global(name)?.dyn_into::<Function>().ok()
}

pub fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub fn json_value(json: &str) -> Option<JsValue> {
    JSON::parse(json).ok()
}

pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };

    if locked {
        set_style(&body, "overflow", "hidden");
    } else {
        clear_style(&body, "overflow");
    }
}

/// Calls `step` once per animation frame until it returns false.
pub fn frame_loop<F>(step: F)
where
    F: FnMut() -> bool + 'static,
{
    schedule_frame(Rc::new(RefCell::new(step)), Rc::default());
}

fn schedule_frame<F>(step: Rc<RefCell<F>>, handle: Rc<RefCell<Option<AnimationFrame>>>)
where
    F: FnMut() -> bool + 'static,
{
    let next_handle = handle.clone();
    let frame = request_animation_frame(move |_| {
        next_handle.borrow_mut().take();
        let keep_going = (&mut *step.borrow_mut())();
        if keep_going {
            schedule_frame(step, next_handle);
        }
    });
    *handle.borrow_mut() = Some(frame);
}
