use std::cmp::Ordering;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    /// Only `debug` and `info` are accepted as thresholds; warnings always pass.
    pub fn parse_threshold(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Builds the single-line JSON record shared by the browser and native sinks.
pub fn event_record(ts: u64, level: LogLevel, event: &str, fields: serde_json::Value) -> String {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload).to_string()
}

#[cfg(target_arch = "wasm32")]
pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < threshold {
        return;
    }

    let ts = (js_sys::Date::now() / 1_000.0) as u64;
    let line = event_record(ts, level, event, fields);
    match level {
        LogLevel::Warn => gloo::console::warn!(line),
        LogLevel::Debug => gloo::console::debug!(line),
        LogLevel::Info => gloo::console::log!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < threshold {
        return;
    }

    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0);
    println!("{}", event_record(ts, level, event, fields));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_order_debug_below_info_below_warn() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
    }

    #[test]
    fn threshold_parsing_ignores_case_and_rejects_warn() {
        assert_eq!(LogLevel::parse_threshold(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse_threshold("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse_threshold("warn"), None);
    }

    #[test]
    fn record_merges_object_fields_after_the_envelope() {
        let line = event_record(42, LogLevel::Info, "loader_hidden", json!({ "progress": 100 }));
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");

        assert_eq!(parsed["ts"], 42);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "loader_hidden");
        assert_eq!(parsed["progress"], 100);
    }

    #[test]
    fn record_drops_non_object_fields() {
        let line = event_record(1, LogLevel::Warn, "x", json!("ignored"));
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");

        assert_eq!(parsed.as_object().map(|map| map.len()), Some(3));
    }
}
