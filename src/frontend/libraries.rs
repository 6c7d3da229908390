use serde::Serialize;
use serde_json::json;
use wasm_bindgen::JsValue;

use super::{dom, Page};
use crate::{
    entrance::{
        EntranceStrategy, RevealOptions, AOS_GLOBAL, ENTRANCE_FALLBACK, ENTRANCE_TIMELINE,
        GSAP_GLOBAL,
    },
    logging::LogLevel,
    particles::{ParticlesConfig, PARTICLES_CONTAINER_ID, PARTICLES_GLOBAL},
};

fn to_js<T: Serialize>(value: &T) -> Option<JsValue> {
    let json = serde_json::to_string(value).ok()?;
    dom::json_value(&json)
}

pub fn start_particles(page: &Page) {
    let Some(particles_js) = dom::global_function(PARTICLES_GLOBAL) else {
        page.log(LogLevel::Debug, "particles_skipped", json!({ "reason": "library_missing" }));
        return;
    };

    let Some(config) = ParticlesConfig::for_motion(page.motion)
        .to_json()
        .and_then(|json| dom::json_value(&json))
    else {
        return;
    };

    if particles_js
        .call2(&JsValue::NULL, &JsValue::from_str(PARTICLES_CONTAINER_ID), &config)
        .is_err()
    {
        page.log(LogLevel::Warn, "particles_failed", json!({}));
    }
}

pub fn start_entrance(page: &Page) {
    let gsap = dom::global(GSAP_GLOBAL);
    let from = gsap.as_ref().and_then(|gsap| dom::method(gsap, "from"));

    match (EntranceStrategy::select(page.motion, from.is_some()), gsap, from) {
        (EntranceStrategy::Timeline, Some(gsap), Some(from)) => {
            for step in ENTRANCE_TIMELINE {
                let Some(vars) = to_js(&step.from_vars()) else {
                    continue;
                };
                let _ = from.call2(&gsap, &JsValue::from_str(step.selector), &vars);
            }
        }
        (_, gsap, _) => {
            if gsap.is_none() {
                page.log(
                    LogLevel::Warn,
                    "entrance_fallback",
                    json!({ "reason": "gsap_missing" }),
                );
            }
            force_visible();
        }
    }
}

fn force_visible() {
    for selector in ENTRANCE_FALLBACK {
        if let Some(element) = dom::query(selector) {
            dom::set_style(&element, "opacity", "1");
            dom::set_style(&element, "visibility", "visible");
        }
    }
}

pub fn start_reveal(page: &Page) {
    let Some(aos) = dom::global(AOS_GLOBAL) else {
        return;
    };
    let (Some(init), Some(options)) = (
        dom::method(&aos, "init"),
        to_js(&RevealOptions::for_motion(page.motion)),
    ) else {
        return;
    };

    let _ = init.call1(&aos, &options);
}
