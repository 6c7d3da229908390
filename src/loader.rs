use crate::{config::LoaderVariant, motion::Motion};

pub const SYNTHETIC_TICK_MS: u32 = 150;
pub const SYNTHETIC_MAX_STEP: f64 = 15.0;
pub const COMPLETE_HOLD_MS: u32 = 500;
pub const FADE_OUT_MS: u32 = 800;

const FULL: f64 = 100.0;
const SMOOTHING: f64 = 0.25;
const SNAP_DISTANCE: f64 = 0.5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoaderPhase {
    Showing,
    Completing,
    Hidden,
}

/// Overlay state: a progress value that only moves forward and a phase that
/// only leaves `Showing` once the value is exactly 100.
#[derive(Clone, Debug)]
pub struct LoadingScreen {
    phase: LoaderPhase,
    progress: f64,
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingScreen {
    pub fn new() -> Self {
        Self {
            phase: LoaderPhase::Showing,
            progress: 0.0,
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Moves progress to `value`, ignoring regressions. Returns true on the
    /// call that completes the bar.
    pub fn advance_to(&mut self, value: f64) -> bool {
        if self.phase != LoaderPhase::Showing || value.is_nan() {
            return false;
        }

        self.progress = value.clamp(0.0, FULL).max(self.progress);
        if self.progress >= FULL {
            self.progress = FULL;
            self.phase = LoaderPhase::Completing;
            return true;
        }

        false
    }

    pub fn advance_by(&mut self, step: f64) -> bool {
        let next = self.progress + step.max(0.0);
        self.advance_to(next)
    }

    pub fn complete(&mut self) -> bool {
        self.advance_to(FULL)
    }

    pub fn hide(&mut self) -> bool {
        if self.phase != LoaderPhase::Completing {
            return false;
        }

        self.phase = LoaderPhase::Hidden;
        true
    }

    pub fn width_style(&self) -> String {
        format!("{}%", self.progress)
    }
}

/// How the overlay is driven for a page load.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoaderPlan {
    Synthetic,
    Preload,
    /// Motion is off: the bar jumps to 100. Prefetch still runs for the
    /// preload variant.
    Instant { prefetch: bool },
}

impl LoaderPlan {
    pub fn select(variant: LoaderVariant, motion: Motion) -> Self {
        match (variant, motion.is_off()) {
            (LoaderVariant::Synthetic, false) => Self::Synthetic,
            (LoaderVariant::Preload, false) => Self::Preload,
            (variant, true) => Self::Instant {
                prefetch: variant == LoaderVariant::Preload,
            },
        }
    }
}

/// Step for the synthetic variant given a uniform sample in `[0, 1)`.
pub fn synthetic_step(sample: f64) -> f64 {
    sample.clamp(0.0, 1.0) * SYNTHETIC_MAX_STEP
}

/// Progress model for the preload variant.
#[derive(Clone, Debug)]
pub struct AssetProgress {
    total: usize,
    settled: usize,
    started_at_ms: f64,
    min_display_ms: f64,
    asset_timeout_ms: f64,
    displayed: f64,
}

impl AssetProgress {
    pub fn new(total: usize, started_at_ms: f64, min_display_ms: u32, asset_timeout_ms: u32) -> Self {
        Self {
            total,
            settled: 0,
            started_at_ms,
            min_display_ms: f64::from(min_display_ms),
            asset_timeout_ms: f64::from(asset_timeout_ms),
            displayed: 0.0,
        }
    }

    pub fn settled(&self) -> usize {
        self.settled
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Success and failure both count.
    pub fn mark_settled(&mut self) {
        self.settled = (self.settled + 1).min(self.total);
    }

    fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_at_ms).max(0.0)
    }

    fn asset_ratio(&self, now_ms: f64) -> f64 {
        if self.total == 0 || self.elapsed(now_ms) >= self.asset_timeout_ms {
            return 1.0;
        }

        self.settled as f64 / self.total as f64
    }

    fn time_ratio(&self, now_ms: f64) -> f64 {
        if self.min_display_ms <= 0.0 {
            return 1.0;
        }

        (self.elapsed(now_ms) / self.min_display_ms).min(1.0)
    }

    pub fn target(&self, now_ms: f64) -> f64 {
        FULL * self.asset_ratio(now_ms).min(self.time_ratio(now_ms))
    }

    /// Eases the displayed value toward the current target for one frame.
    pub fn sample(&mut self, now_ms: f64) -> f64 {
        let target = self.target(now_ms);
        let mut next = self.displayed + (target - self.displayed) * SMOOTHING;
        if target - next < SNAP_DISTANCE {
            next = target;
        }

        self.displayed = next.max(self.displayed).min(FULL);
        self.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_skips_animation_but_keeps_prefetch() {
        assert_eq!(
            LoaderPlan::select(LoaderVariant::Preload, Motion::Reduced),
            LoaderPlan::Instant { prefetch: true }
        );
        assert_eq!(
            LoaderPlan::select(LoaderVariant::Synthetic, Motion::Reduced),
            LoaderPlan::Instant { prefetch: false }
        );
        assert_eq!(
            LoaderPlan::select(LoaderVariant::Preload, Motion::Full),
            LoaderPlan::Preload
        );
        assert_eq!(
            LoaderPlan::select(LoaderVariant::Synthetic, Motion::Full),
            LoaderPlan::Synthetic
        );
    }

    #[test]
    fn progress_never_regresses() {
        let mut screen = LoadingScreen::new();
        screen.advance_to(40.0);
        screen.advance_to(10.0);
        screen.advance_by(-5.0);

        assert_eq!(screen.progress(), 40.0);
        assert_eq!(screen.phase(), LoaderPhase::Showing);
    }

    #[test]
    fn overshoot_clamps_to_exactly_one_hundred() {
        let mut screen = LoadingScreen::new();
        screen.advance_to(90.0);

        assert!(screen.advance_by(14.9));
        assert_eq!(screen.progress(), 100.0);
        assert_eq!(screen.phase(), LoaderPhase::Completing);
        assert_eq!(screen.width_style(), "100%");
    }

    #[test]
    fn completion_is_reported_once() {
        let mut screen = LoadingScreen::new();

        assert!(screen.complete());
        assert!(!screen.complete());
        assert!(!screen.advance_by(10.0));
    }

    #[test]
    fn hide_requires_completing() {
        let mut screen = LoadingScreen::new();
        assert!(!screen.hide());

        screen.complete();
        assert!(screen.hide());
        assert_eq!(screen.phase(), LoaderPhase::Hidden);
        assert!(!screen.hide());
    }

    #[test]
    fn synthetic_ticks_reach_completion() {
        let mut screen = LoadingScreen::new();
        let samples = [0.9, 0.1, 0.5, 0.99, 0.0, 0.7];
        let mut last = 0.0;
        let mut ticks = 0;

        while screen.phase() == LoaderPhase::Showing {
            let sample = samples[ticks % samples.len()];
            screen.advance_by(synthetic_step(sample));
            assert!(screen.progress() >= last);
            last = screen.progress();
            ticks += 1;
        }

        assert_eq!(screen.progress(), 100.0);
    }

    #[test]
    fn asset_target_waits_for_minimum_display_time() {
        let mut assets = AssetProgress::new(2, 0.0, 2_000, 8_000);
        assets.mark_settled();
        assets.mark_settled();

        assert_eq!(assets.target(500.0), 25.0);
        assert_eq!(assets.target(2_000.0), 100.0);
    }

    #[test]
    fn asset_target_waits_for_assets() {
        let mut assets = AssetProgress::new(4, 0.0, 1_000, 8_000);
        assets.mark_settled();

        assert_eq!(assets.target(5_000.0), 25.0);
    }

    #[test]
    fn asset_timeout_releases_the_bar() {
        let assets = AssetProgress::new(4, 0.0, 1_000, 8_000);

        assert_eq!(assets.target(7_999.0), 0.0);
        assert_eq!(assets.target(8_000.0), 100.0);
    }

    #[test]
    fn extra_settles_do_not_exceed_total() {
        let mut assets = AssetProgress::new(1, 0.0, 0, 8_000);
        assets.mark_settled();
        assets.mark_settled();

        assert_eq!(assets.settled(), 1);
        assert_eq!(assets.target(0.0), 100.0);
    }

    #[test]
    fn empty_manifest_is_immediately_complete_after_min_time() {
        let assets = AssetProgress::new(0, 0.0, 0, 8_000);

        assert_eq!(assets.target(0.0), 100.0);
    }

    #[test]
    fn sampled_progress_is_monotonic_and_lands_on_one_hundred() {
        let mut assets = AssetProgress::new(3, 1_000.0, 1_500, 8_000);
        let mut last = 0.0;
        let mut now = 1_000.0;

        for frame in 0..400 {
            if frame == 20 || frame == 45 || frame == 60 {
                assets.mark_settled();
            }
            let value = assets.sample(now);
            assert!(value >= last, "regressed at frame {frame}");
            last = value;
            now += 16.0;
        }

        assert_eq!(last, 100.0);
    }
}
