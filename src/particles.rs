use serde::Serialize;

use crate::motion::Motion;

pub const PARTICLES_GLOBAL: &str = "particlesJS";
pub const PARTICLES_CONTAINER_ID: &str = "particles-js";

const ACCENT: &str = "#00D4FF";

#[derive(Serialize)]
pub struct ParticlesConfig {
    particles: Particles,
    interactivity: Interactivity,
    retina_detect: bool,
}

#[derive(Serialize)]
struct Particles {
    number: Number,
    color: Setting<&'static str>,
    shape: Shape,
    opacity: Animated,
    size: Animated,
    line_linked: LineLinked,
    #[serde(rename = "move")]
    movement: Movement,
}

#[derive(Serialize)]
struct Number {
    value: u32,
    density: Density,
}

#[derive(Serialize)]
struct Density {
    enable: bool,
    value_area: u32,
}

#[derive(Serialize)]
struct Setting<T> {
    value: T,
}

#[derive(Serialize)]
struct Shape {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct Animated {
    value: f64,
    random: bool,
    anim: Anim,
}

#[derive(Serialize)]
struct Anim {
    enable: bool,
    speed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_min: Option<f64>,
    sync: bool,
}

#[derive(Serialize)]
struct LineLinked {
    enable: bool,
    distance: u32,
    color: &'static str,
    opacity: f64,
    width: u32,
}

#[derive(Serialize)]
struct Movement {
    enable: bool,
    speed: f64,
    direction: &'static str,
    random: bool,
    straight: bool,
    out_mode: &'static str,
    bounce: bool,
}

#[derive(Serialize)]
struct Interactivity {
    detect_on: &'static str,
    events: Events,
    modes: Modes,
}

#[derive(Serialize)]
struct Events {
    onhover: Toggle,
    onclick: Toggle,
    resize: bool,
}

#[derive(Serialize)]
struct Toggle {
    enable: bool,
    mode: &'static str,
}

#[derive(Serialize)]
struct Modes {
    grab: Grab,
    push: Push,
}

#[derive(Serialize)]
struct Grab {
    distance: u32,
    line_linked: GrabLink,
}

#[derive(Serialize)]
struct GrabLink {
    opacity: f64,
}

#[derive(Serialize)]
struct Push {
    particles_nb: u32,
}

impl ParticlesConfig {
    /// The site's particle field. With motion off the particles stay where
    /// they spawn and neither pulse nor resize.
    pub fn for_motion(motion: Motion) -> Self {
        let animate = !motion.is_off();

        Self {
            particles: Particles {
                number: Number {
                    value: 80,
                    density: Density {
                        enable: true,
                        value_area: 800,
                    },
                },
                color: Setting { value: ACCENT },
                shape: Shape { kind: "circle" },
                opacity: Animated {
                    value: 0.3,
                    random: true,
                    anim: Anim {
                        enable: animate,
                        speed: 1.0,
                        opacity_min: Some(0.1),
                        size_min: None,
                        sync: false,
                    },
                },
                size: Animated {
                    value: 3.0,
                    random: true,
                    anim: Anim {
                        enable: animate,
                        speed: 2.0,
                        opacity_min: None,
                        size_min: Some(0.1),
                        sync: false,
                    },
                },
                line_linked: LineLinked {
                    enable: true,
                    distance: 150,
                    color: ACCENT,
                    opacity: 0.2,
                    width: 1,
                },
                movement: Movement {
                    enable: animate,
                    speed: 1.0,
                    direction: "none",
                    random: true,
                    straight: false,
                    out_mode: "out",
                    bounce: false,
                },
            },
            interactivity: Interactivity {
                detect_on: "canvas",
                events: Events {
                    onhover: Toggle {
                        enable: true,
                        mode: "grab",
                    },
                    onclick: Toggle {
                        enable: animate,
                        mode: "push",
                    },
                    resize: true,
                },
                modes: Modes {
                    grab: Grab {
                        distance: 140,
                        line_linked: GrabLink { opacity: 0.5 },
                    },
                    push: Push { particles_nb: 4 },
                },
            },
            retina_detect: true,
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_value(motion: Motion) -> serde_json::Value {
        let json = ParticlesConfig::for_motion(motion).to_json().expect("serializes");
        serde_json::from_str(&json).expect("valid json")
    }

    #[test]
    fn full_motion_matches_library_shape() {
        let config = as_value(Motion::Full);

        assert_eq!(config["particles"]["number"]["value"], 80);
        assert_eq!(config["particles"]["color"]["value"], "#00D4FF");
        assert_eq!(config["particles"]["shape"]["type"], "circle");
        assert_eq!(config["particles"]["move"]["enable"], true);
        assert_eq!(config["particles"]["opacity"]["anim"]["opacity_min"], 0.1);
        assert!(config["particles"]["opacity"]["anim"].get("size_min").is_none());
        assert_eq!(config["interactivity"]["modes"]["grab"]["line_linked"]["opacity"], 0.5);
        assert_eq!(config["interactivity"]["modes"]["push"]["particles_nb"], 4);
        assert_eq!(config["retina_detect"], true);
    }

    #[test]
    fn reduced_motion_freezes_the_field() {
        let config = as_value(Motion::Reduced);

        assert_eq!(config["particles"]["move"]["enable"], false);
        assert_eq!(config["particles"]["size"]["anim"]["enable"], false);
        assert_eq!(config["particles"]["opacity"]["anim"]["enable"], false);
        assert_eq!(config["interactivity"]["events"]["onclick"]["enable"], false);
        assert_eq!(config["particles"]["number"]["value"], 80);
    }
}
