use std::{cell::RefCell, rc::Rc};

use gloo::timers::callback::Timeout;
use serde_json::json;
use web_sys::HtmlElement;

use super::{dom, preload, Page};
use crate::{
    config::SiteConfig,
    loader::{
        synthetic_step, AssetProgress, LoaderPhase, LoaderPlan, LoadingScreen, COMPLETE_HOLD_MS,
        FADE_OUT_MS, SYNTHETIC_TICK_MS,
    },
    logging::{log_event, LogLevel},
    preload::MANIFEST,
};

const SCREEN_ID: &str = "loadingScreen";
const PROGRESS_ID: &str = "loadingProgress";
const FADE_OUT_CLASS: &str = "fade-out";

#[derive(Clone)]
struct Overlay {
    screen: HtmlElement,
    bar: HtmlElement,
    state: Rc<RefCell<LoadingScreen>>,
    log_level: LogLevel,
}

impl Overlay {
    fn render(&self) {
        dom::set_style(&self.bar, "width", &self.state.borrow().width_style());
    }

    /// Applies `update` and renders; on completion starts the exit sequence.
    fn update(&self, hold_ms: u32, fade_ms: u32, update: impl FnOnce(&mut LoadingScreen) -> bool) {
        let completed = update(&mut *self.state.borrow_mut());
        self.render();
        if completed {
            self.finish(hold_ms, fade_ms);
        }
    }

    fn finish(&self, hold_ms: u32, fade_ms: u32) {
        let overlay = self.clone();
        after(hold_ms, move || {
            let _ = overlay.screen.class_list().add_1(FADE_OUT_CLASS);
            dom::set_body_scroll_locked(false);

            after(fade_ms, move || {
                dom::set_style(&overlay.screen, "display", "none");
                if overlay.state.borrow_mut().hide() {
                    log_event(overlay.log_level, LogLevel::Debug, "loader_hidden", json!({}));
                }
            });
        });
    }
}

/// Runs `callback` after `delay_ms`, synchronously when the delay is zero.
fn after(delay_ms: u32, callback: impl FnOnce() + 'static) {
    if delay_ms == 0 {
        callback();
    } else {
        Timeout::new(delay_ms, callback).forget();
    }
}

pub fn start(page: &Page) {
    let (Some(screen), Some(bar)) = (
        dom::by_id::<HtmlElement>(SCREEN_ID),
        dom::by_id::<HtmlElement>(PROGRESS_ID),
    ) else {
        page.log(LogLevel::Debug, "loader_skipped", json!({ "reason": "missing_elements" }));
        return;
    };

    dom::set_body_scroll_locked(true);
    let overlay = Overlay {
        screen,
        bar,
        state: Rc::new(RefCell::new(LoadingScreen::new())),
        log_level: page.config.log_level,
    };

    match LoaderPlan::select(page.config.loader, page.motion) {
        LoaderPlan::Synthetic => schedule_synthetic_tick(overlay),
        LoaderPlan::Preload => track_preload(overlay, spawn_preload(&page.config)),
        LoaderPlan::Instant { prefetch } => {
            if prefetch {
                spawn_preload(&page.config);
            }
            overlay.update(0, 0, LoadingScreen::complete);
        }
    }
}

fn schedule_synthetic_tick(overlay: Overlay) {
    Timeout::new(SYNTHETIC_TICK_MS, move || {
        let step = synthetic_step(js_sys::Math::random());
        overlay.update(COMPLETE_HOLD_MS, FADE_OUT_MS, |state| state.advance_by(step));

        if overlay.state.borrow().phase() == LoaderPhase::Showing {
            schedule_synthetic_tick(overlay);
        }
    })
    .forget();
}

/// Starts the prefetch; it runs whether or not the overlay waits for it.
fn spawn_preload(config: &SiteConfig) -> Rc<RefCell<AssetProgress>> {
    let assets = Rc::new(RefCell::new(AssetProgress::new(
        MANIFEST.len(),
        dom::now_ms(),
        config.min_loading_ms,
        config.asset_timeout_ms,
    )));

    let settled_assets = assets.clone();
    let log_level = config.log_level;
    preload::spawn(MANIFEST, move |asset, loaded| {
        settled_assets.borrow_mut().mark_settled();
        if !loaded {
            log_event(
                log_level,
                LogLevel::Debug,
                "preload_failed",
                json!({ "url": asset.url, "priority": asset.priority.as_str() }),
            );
        }
    });

    assets
}

fn track_preload(overlay: Overlay, assets: Rc<RefCell<AssetProgress>>) {
    dom::frame_loop(move || {
        let value = assets.borrow_mut().sample(dom::now_ms());
        overlay.update(COMPLETE_HOLD_MS, FADE_OUT_MS, |state| state.advance_to(value));

        let showing = overlay.state.borrow().phase() == LoaderPhase::Showing;
        if !showing {
            let assets = assets.borrow();
            log_event(
                overlay.log_level,
                LogLevel::Info,
                "loader_completed",
                json!({ "settled": assets.settled(), "total": assets.total() }),
            );
        }
        showing
    });
}
