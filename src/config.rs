use serde::Deserialize;

use crate::logging::LogLevel;

pub const CONFIG_ELEMENT_ID: &str = "horizon-config";
pub const REDUCE_MOTION_GLOBAL: &str = "HORIZON_REDUCE_MOTION";

const DEFAULT_MIN_LOADING_MS: u32 = 2_500;
const DEFAULT_ASSET_TIMEOUT_MS: u32 = 8_000;
const DEFAULT_TYPING_START_MS: u32 = 3_000;
const DEFAULT_PORTAL_URL: &str = "horizon-labs.html";
const DEFAULT_PORTAL_DELAY_MS: u32 = 2_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const MIN_LOADING_MS_BOUNDS: (u32, u32) = (0, 15_000);
const ASSET_TIMEOUT_MS_BOUNDS: (u32, u32) = (500, 60_000);
const TYPING_START_MS_BOUNDS: (u32, u32) = (0, 15_000);
const PORTAL_DELAY_MS_BOUNDS: (u32, u32) = (0, 15_000);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoaderVariant {
    /// Random increments on a fixed interval.
    Synthetic,
    /// Progress follows the asset preloader with a minimum display time.
    Preload,
}

impl LoaderVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Synthetic => "synthetic",
            Self::Preload => "preload",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "synthetic" => Some(Self::Synthetic),
            "preload" => Some(Self::Preload),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct SiteConfig {
    pub loader: LoaderVariant,
    pub min_loading_ms: u32,
    pub asset_timeout_ms: u32,
    pub typing_start_ms: u32,
    pub portal_url: String,
    pub portal_delay_ms: u32,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            loader: LoaderVariant::Synthetic,
            min_loading_ms: DEFAULT_MIN_LOADING_MS,
            asset_timeout_ms: DEFAULT_ASSET_TIMEOUT_MS,
            typing_start_ms: DEFAULT_TYPING_START_MS,
            portal_url: DEFAULT_PORTAL_URL.to_string(),
            portal_delay_ms: DEFAULT_PORTAL_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSiteConfig {
    loader: Option<String>,
    min_loading_ms: Option<u32>,
    asset_timeout_ms: Option<u32>,
    typing_start_ms: Option<u32>,
    portal_url: Option<String>,
    portal_delay_ms: Option<u32>,
    log_level: Option<String>,
}

impl SiteConfig {
    /// Parses the inline JSON block. A missing or malformed block yields the
    /// defaults; individual out-of-range values fall back one by one.
    pub fn from_json(source: Option<&str>) -> Self {
        let raw = source
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| serde_json::from_str::<RawSiteConfig>(value).ok())
            .unwrap_or_default();

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSiteConfig) -> Self {
        Self {
            loader: raw
                .loader
                .as_deref()
                .and_then(LoaderVariant::from_str)
                .unwrap_or(LoaderVariant::Synthetic),
            min_loading_ms: within_bounds(
                raw.min_loading_ms,
                DEFAULT_MIN_LOADING_MS,
                MIN_LOADING_MS_BOUNDS,
            ),
            asset_timeout_ms: within_bounds(
                raw.asset_timeout_ms,
                DEFAULT_ASSET_TIMEOUT_MS,
                ASSET_TIMEOUT_MS_BOUNDS,
            ),
            typing_start_ms: within_bounds(
                raw.typing_start_ms,
                DEFAULT_TYPING_START_MS,
                TYPING_START_MS_BOUNDS,
            ),
            portal_url: raw
                .portal_url
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_PORTAL_URL.to_string()),
            portal_delay_ms: within_bounds(
                raw.portal_delay_ms,
                DEFAULT_PORTAL_DELAY_MS,
                PORTAL_DELAY_MS_BOUNDS,
            ),
            log_level: raw
                .log_level
                .as_deref()
                .and_then(LogLevel::parse_threshold)
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

fn within_bounds(value: Option<u32>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_block_uses_defaults() {
        assert_eq!(SiteConfig::from_json(None), SiteConfig::default());
        assert_eq!(SiteConfig::from_json(Some("   ")), SiteConfig::default());
    }

    #[test]
    fn malformed_block_uses_defaults() {
        assert_eq!(SiteConfig::from_json(Some("{ loader: ")), SiteConfig::default());
    }

    #[test]
    fn preload_variant_and_overrides_are_read() {
        let config = SiteConfig::from_json(Some(
            r#"{"loader":"Preload","minLoadingMs":1200,"portalUrl":" labs.html ","logLevel":"debug"}"#,
        ));

        assert_eq!(config.loader, LoaderVariant::Preload);
        assert_eq!(config.min_loading_ms, 1_200);
        assert_eq!(config.portal_url, "labs.html");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.typing_start_ms, DEFAULT_TYPING_START_MS);
    }

    #[test]
    fn out_of_bounds_values_fall_back_individually() {
        let config = SiteConfig::from_json(Some(
            r#"{"assetTimeoutMs":10,"portalDelayMs":999999,"typingStartMs":0,"loader":"fancy"}"#,
        ));

        assert_eq!(config.asset_timeout_ms, DEFAULT_ASSET_TIMEOUT_MS);
        assert_eq!(config.portal_delay_ms, DEFAULT_PORTAL_DELAY_MS);
        assert_eq!(config.typing_start_ms, 0);
        assert_eq!(config.loader, LoaderVariant::Synthetic);
    }

    #[test]
    fn blank_portal_url_keeps_default() {
        let config = SiteConfig::from_json(Some(r#"{"portalUrl":"  "}"#));

        assert_eq!(config.portal_url, DEFAULT_PORTAL_URL);
    }
}
