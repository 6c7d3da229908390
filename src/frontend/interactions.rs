use gloo::{events::EventListener, timers::callback::Timeout};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use super::{dom, Page};
use crate::transform::{
    anchor_scroll_top, anchor_target, Ripple, TiltProfile, RIPPLE_DURATION_MS, RIPPLE_KEYFRAMES,
};

const DEVICE_FRAME_ID: &str = "deviceFrame";
const DEVICE_SCREEN_SELECTOR: &str = ".device-screen-3d";
const SERVICE_CARD_SELECTOR: &str = ".service-card-premium";
const RIPPLE_BUTTON_SELECTOR: &str = ".btn-premium, .btn-primary";
const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Tilts `target` while the pointer moves over `surface`.
fn attach_tilt(surface: &HtmlElement, target: HtmlElement, profile: TiltProfile) {
    let move_surface = surface.clone();
    let move_target = target.clone();
    EventListener::new(surface, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let rect = dom::client_rect(&move_surface);
        let transform = profile.transform(
            rect,
            f64::from(event.client_x()),
            f64::from(event.client_y()),
        );
        dom::set_style(&move_target, "transform", &transform);
    })
    .forget();

    EventListener::new(surface, "mouseleave", move |_| {
        dom::set_style(&target, "transform", profile.rest());
    })
    .forget();
}

pub fn attach_device_tilt(page: &Page) {
    if page.motion.is_off() {
        return;
    }
    let Some(frame) = dom::by_id::<HtmlElement>(DEVICE_FRAME_ID) else {
        return;
    };
    let Some(screen) = frame
        .query_selector(DEVICE_SCREEN_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    attach_tilt(&frame, screen, TiltProfile::Device);
}

pub fn attach_card_tilt(page: &Page) {
    if page.motion.is_off() {
        return;
    }

    for card in dom::query_all(SERVICE_CARD_SELECTOR) {
        attach_tilt(&card, card.clone(), TiltProfile::ServiceCard);
    }
}

fn inject_ripple_keyframes() {
    let Some(document) = dom::document() else {
        return;
    };
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };

    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    let _ = head.append_child(&style);
}

fn spawn_ripple(button: &HtmlElement, event: &MouseEvent) {
    let Some(ripple) = dom::document()
        .and_then(|d| d.create_element("span").ok())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let geometry = Ripple::at(
        dom::client_rect(button),
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );
    ripple.style().set_css_text(&geometry.css_text());
    dom::set_style(button, "position", "relative");
    dom::set_style(button, "overflow", "hidden");

    if button.append_child(&ripple).is_err() {
        return;
    }
    Timeout::new(RIPPLE_DURATION_MS, move || ripple.remove()).forget();
}

pub fn attach_ripples(page: &Page) {
    if page.motion.is_off() {
        return;
    }
    let buttons = dom::query_all(RIPPLE_BUTTON_SELECTOR);
    if buttons.is_empty() {
        return;
    }

    inject_ripple_keyframes();
    for button in buttons {
        let target = button.clone();
        EventListener::new(&button, "click", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                spawn_ripple(&target, event);
            }
        })
        .forget();
    }
}

pub fn attach_anchor_scroll(page: &Page) {
    let behavior = if page.motion.is_off() {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    };

    for link in dom::query_all(ANCHOR_SELECTOR) {
        let anchor = link.clone();
        EventListener::new(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };

            event.prevent_default();
            let (Some(win), Some(target)) = (window(), dom::query(selector)) else {
                return;
            };

            let options = ScrollToOptions::new();
            options.set_top(anchor_scroll_top(f64::from(target.offset_top())));
            options.set_behavior(behavior);
            win.scroll_to_with_scroll_to_options(&options);
        })
        .forget();
    }
}
