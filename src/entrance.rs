use serde::Serialize;

use crate::motion::Motion;

pub const GSAP_GLOBAL: &str = "gsap";
pub const AOS_GLOBAL: &str = "AOS";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Axis {
    X,
    Y,
}

/// One hero element and where it animates in from.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EntranceStep {
    pub selector: &'static str,
    pub axis: Axis,
    pub distance: f64,
    pub delay_s: f64,
}

pub const ENTRANCE_TIMELINE: &[EntranceStep] = &[
    EntranceStep {
        selector: ".hero-badge-premium",
        axis: Axis::Y,
        distance: -30.0,
        delay_s: 2.5,
    },
    EntranceStep {
        selector: ".hero-heading-premium",
        axis: Axis::Y,
        distance: 50.0,
        delay_s: 2.7,
    },
    EntranceStep {
        selector: ".hero-subheading-premium",
        axis: Axis::Y,
        distance: 30.0,
        delay_s: 2.9,
    },
    EntranceStep {
        selector: ".hero-cta-group",
        axis: Axis::Y,
        distance: 30.0,
        delay_s: 3.1,
    },
    EntranceStep {
        selector: ".device-showcase-3d",
        axis: Axis::X,
        distance: 100.0,
        delay_s: 3.0,
    },
];

/// Elements forced visible when the timeline cannot run.
pub const ENTRANCE_FALLBACK: &[&str] = &[
    ".hero-badge-premium",
    ".hero-heading-premium",
    ".hero-subheading-premium",
    ".hero-cta-group",
    ".trust-indicators-premium",
    ".device-showcase-3d",
];

const ENTRANCE_DURATION_S: f64 = 1.0;

#[derive(Serialize)]
pub struct FromVars {
    opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
    duration: f64,
    delay: f64,
}

impl EntranceStep {
    pub fn from_vars(&self) -> FromVars {
        let (x, y) = match self.axis {
            Axis::X => (Some(self.distance), None),
            Axis::Y => (None, Some(self.distance)),
        };

        FromVars {
            opacity: 0.0,
            x,
            y,
            duration: ENTRANCE_DURATION_S,
            delay: self.delay_s,
        }
    }
}

/// How the hero appears given the motion gate and whether GSAP loaded.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntranceStrategy {
    Timeline,
    ForceVisible,
}

impl EntranceStrategy {
    pub fn select(motion: Motion, library_present: bool) -> Self {
        if library_present && !motion.is_off() {
            Self::Timeline
        } else {
            Self::ForceVisible
        }
    }
}

#[derive(Serialize)]
pub struct RevealOptions {
    duration: u32,
    easing: &'static str,
    once: bool,
    offset: u32,
    disable: bool,
}

impl RevealOptions {
    pub fn for_motion(motion: Motion) -> Self {
        Self {
            duration: 1_000,
            easing: "ease-out-cubic",
            once: true,
            offset: 100,
            disable: motion.is_off(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_only_with_library_and_motion() {
        assert_eq!(EntranceStrategy::select(Motion::Full, true), EntranceStrategy::Timeline);
        assert_eq!(EntranceStrategy::select(Motion::Full, false), EntranceStrategy::ForceVisible);
        assert_eq!(EntranceStrategy::select(Motion::Reduced, true), EntranceStrategy::ForceVisible);
    }

    #[test]
    fn from_vars_use_the_step_axis() {
        let device = ENTRANCE_TIMELINE
            .iter()
            .find(|step| step.selector == ".device-showcase-3d")
            .expect("device step");
        let vars = serde_json::to_value(device.from_vars()).expect("serializes");

        assert_eq!(vars["x"], 100.0);
        assert!(vars.get("y").is_none());
        assert_eq!(vars["opacity"], 0.0);
        assert_eq!(vars["delay"], 3.0);
    }

    #[test]
    fn fallback_covers_every_timeline_element() {
        for step in ENTRANCE_TIMELINE {
            assert!(ENTRANCE_FALLBACK.contains(&step.selector), "{}", step.selector);
        }
    }

    #[test]
    fn reveal_is_disabled_with_reduced_motion() {
        let full = serde_json::to_value(RevealOptions::for_motion(Motion::Full)).expect("serializes");
        let reduced = serde_json::to_value(RevealOptions::for_motion(Motion::Reduced)).expect("serializes");

        assert_eq!(full["easing"], "ease-out-cubic");
        assert_eq!(full["disable"], false);
        assert_eq!(reduced["disable"], true);
    }
}
