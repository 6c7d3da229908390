//! Pointer and scroll geometry turned into CSS values.

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;
pub const RIPPLE_DURATION_MS: u32 = 600;
pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

const PARALLAX_BASE_SPEED: f64 = 0.3;
const PARALLAX_SPEED_STEP: f64 = 0.1;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TiltProfile {
    /// Hero device mockup: rotates its inner screen.
    Device,
    /// Service cards: lift, scale and rotate the card itself.
    ServiceCard,
}

impl TiltProfile {
    fn divisor(self) -> f64 {
        match self {
            Self::Device => 20.0,
            Self::ServiceCard => 30.0,
        }
    }

    pub fn transform(self, rect: Rect, client_x: f64, client_y: f64) -> String {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;
        let rotate_x = (y - center_y) / self.divisor();
        let rotate_y = (center_x - x) / self.divisor();

        match self {
            Self::Device => format!("rotateX({}deg) rotateY({}deg)", rotate_x + 0.0, rotate_y + 0.0),
            Self::ServiceCard => format!(
                "translateY(-15px) scale(1.02) rotateX({}deg) rotateY({}deg)",
                -rotate_x + 0.0,
                rotate_y + 0.0
            ),
        }
    }

    pub fn rest(self) -> &'static str {
        match self {
            Self::Device => "rotateX(0deg) rotateY(0deg)",
            Self::ServiceCard => "translateY(0) scale(1) rotateX(0deg) rotateY(0deg)",
        }
    }
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    let speed = PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP;
    -(scroll_y * speed)
}

pub fn parallax_transform(scroll_y: f64, index: usize) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, index))
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s ease-out; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

/// In-page anchor worth intercepting; bare `#` and `#!` are left alone.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if !href.starts_with('#') || href == "#" || href == "#!" {
        return None;
    }

    Some(href)
}

pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_SCROLL_OFFSET
}
