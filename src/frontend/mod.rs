mod dom;
mod interactions;
mod libraries;
mod loading;
mod portal;
mod preload;
mod scroll;
mod typed;

use serde_json::json;
use web_sys::{window, HtmlElement};

use crate::{
    config::{SiteConfig, CONFIG_ELEMENT_ID, REDUCE_MOTION_GLOBAL},
    logging::{log_event, LogLevel},
    motion::{Motion, REDUCED_MOTION_QUERY},
};

/// Start-up context shared by every effect.
pub struct Page {
    pub config: SiteConfig,
    pub motion: Motion,
}

impl Page {
    fn from_document() -> Self {
        let config = SiteConfig::from_json(
            dom::by_id::<HtmlElement>(CONFIG_ELEMENT_ID)
                .and_then(|element| element.text_content())
                .as_deref(),
        );
        let motion = Motion::resolve(system_prefers_reduced_motion(), reduce_motion_flag());

        Self { config, motion }
    }

    pub fn log(&self, level: LogLevel, event: &str, fields: serde_json::Value) {
        log_event(self.config.log_level, level, event, fields);
    }
}

fn system_prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn reduce_motion_flag() -> bool {
    dom::global(REDUCE_MOTION_GLOBAL)
        .map(|value| value.is_truthy())
        .unwrap_or(false)
}

fn print_banner() {
    gloo::console::log!(
        "%c🚀 Digital Horizon Web Design",
        "color: #00D4FF; font-size: 20px; font-weight: bold;"
    );
    gloo::console::log!(
        "%cPremium 3D Edition - Built with cutting-edge technology",
        "color: #0066FF; font-size: 14px;"
    );
    gloo::console::log!(
        "%cParticles.js • GSAP • AOS • Custom 3D Effects",
        "color: #667eea; font-size: 12px;"
    );
}

pub fn run() {
    let page = Page::from_document();
    page.log(
        LogLevel::Info,
        "site_started",
        json!({
            "motion": page.motion.as_str(),
            "loader": page.config.loader.as_str(),
        }),
    );

    loading::start(&page);
    libraries::start_particles(&page);
    typed::mount(&page);
    libraries::start_entrance(&page);
    libraries::start_reveal(&page);

    scroll::attach_navbar();
    scroll::attach_parallax(&page);
    scroll::attach_counters(&page);

    interactions::attach_device_tilt(&page);
    interactions::attach_card_tilt(&page);
    interactions::attach_ripples(&page);
    interactions::attach_anchor_scroll(&page);

    portal::install(&page);
    print_banner();
}
