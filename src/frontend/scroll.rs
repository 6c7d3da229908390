use gloo::events::EventListener;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{dom, Page};
use crate::{
    counter::{CounterAnimation, CounterTick},
    motion::Motion,
    transform::{navbar_scrolled, parallax_transform},
};

const NAVBAR_ID: &str = "mainNav";
const NAVBAR_SCROLLED_CLASS: &str = "scrolled";
const ORB_SELECTOR: &str = ".orb";
const STAT_SELECTOR: &str = ".stat-number-premium";
const COUNTER_THRESHOLD: f64 = 0.5;

pub fn attach_navbar() {
    let (Some(win), Some(navbar)) = (window(), dom::by_id::<HtmlElement>(NAVBAR_ID)) else {
        return;
    };

    EventListener::new(&win, "scroll", move |_| {
        let classes = navbar.class_list();
        let _ = if navbar_scrolled(dom::scroll_y()) {
            classes.add_1(NAVBAR_SCROLLED_CLASS)
        } else {
            classes.remove_1(NAVBAR_SCROLLED_CLASS)
        };
    })
    .forget();
}

pub fn attach_parallax(page: &Page) {
    if page.motion.is_off() {
        return;
    }
    let Some(win) = window() else {
        return;
    };
    let orbs = dom::query_all(ORB_SELECTOR);
    if orbs.is_empty() {
        return;
    }

    EventListener::new(&win, "scroll", move |_| {
        let scrolled = dom::scroll_y();
        for (index, orb) in orbs.iter().enumerate() {
            dom::set_style(orb, "transform", &parallax_transform(scrolled, index));
        }
    })
    .forget();
}

/// Counts `element` up to its `data-target`, or writes the final value at
/// once when motion is off.
pub fn animate_counter(element: &HtmlElement, motion: Motion) {
    let Some(target) = element
        .get_attribute("data-target")
        .as_deref()
        .and_then(CounterAnimation::parse_target)
    else {
        return;
    };

    let mut counter = if motion.is_off() {
        CounterAnimation::instant(target)
    } else {
        CounterAnimation::new(target)
    };

    let first = counter.tick();
    write_tick(element, first);
    if counter.is_finished() {
        return;
    }

    let element = element.clone();
    dom::frame_loop(move || {
        write_tick(&element, counter.tick());
        !counter.is_finished()
    });
}

fn write_tick(element: &HtmlElement, tick: CounterTick) {
    if let Some(label) = tick.label() {
        element.set_text_content(Some(&label));
    }
}

pub fn attach_counters(page: &Page) {
    let stats = dom::query_all(STAT_SELECTOR);
    if stats.is_empty() {
        return;
    }

    let motion = page.motion;
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    animate_counter(element, motion);
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(COUNTER_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for stat in &stats {
                observer.observe(stat);
            }
            callback.forget();
        }
        Err(_) => {
            for stat in &stats {
                animate_counter(stat, Motion::Reduced);
            }
        }
    }
}
