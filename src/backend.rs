use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::json;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::logging::{log_event, LogLevel};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_ASSET_MAX_AGE_SECONDS: u64 = 86_400;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const ASSET_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug)]
struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    asset_max_age_seconds: u64,
    log_level: LogLevel,
}

impl HostConfig {
    fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|value| value.trim().parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
            dist_dir: parse_env_non_empty_string("SITE_DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
            asset_max_age_seconds: parse_env_u64_with_bounds(
                "SITE_ASSET_MAX_AGE_SECONDS",
                DEFAULT_ASSET_MAX_AGE_SECONDS,
                ASSET_MAX_AGE_SECONDS_BOUNDS,
            ),
            log_level: parse_env_non_empty_string("LOG_LEVEL")
                .as_deref()
                .and_then(LogLevel::parse_threshold)
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

#[derive(Clone)]
struct AppState {
    config: Arc<HostConfig>,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        config.log_level,
        LogLevel::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}

fn router(config: HostConfig) -> Router {
    let static_service = ServeDir::new(&config.dist_dir)
        .fallback(ServeFile::new(config.dist_dir.join("index.html")));
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state, annotate_response))
}

/// Tags the response with a request id and cache policy and logs it.
async fn annotate_response(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let status = response.status();
    let headers = response.headers_mut();

    if status.is_success() || status == StatusCode::NOT_MODIFIED {
        headers.insert(
            header::CACHE_CONTROL,
            cache_control(&cache_policy(&path, state.config.asset_max_age_seconds)),
        );
    }
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }

    log_event(
        state.config.log_level,
        if status.is_server_error() {
            LogLevel::Warn
        } else {
            LogLevel::Info
        },
        "request_completed",
        json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

/// HTML entry points revalidate on every load; other files are cached.
fn cache_policy(path: &str, max_age_seconds: u64) -> String {
    let is_document = path.ends_with('/') || path.ends_with(".html") || !last_segment_has_extension(path);

    if is_document || max_age_seconds == 0 {
        "no-cache".to_string()
    } else {
        format!("public, max-age={max_age_seconds}")
    }
}

fn last_segment_has_extension(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .map(|segment| segment.contains('.'))
        .unwrap_or(false)
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use std::{fs, path::Path};
    use tower::ServiceExt;

    fn test_config(dist_dir: &Path) -> HostConfig {
        HostConfig {
            port: DEFAULT_PORT,
            dist_dir: dist_dir.to_path_buf(),
            asset_max_age_seconds: 600,
            log_level: LogLevel::Warn,
        }
    }

    fn get(uri: &str) -> Request {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    fn scratch_dist(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("horizon-site-{name}-{}", std::process::id()));
        fs::create_dir_all(dir.join("assets")).expect("create dist");
        fs::write(dir.join("index.html"), "<html>home</html>").expect("write index");
        fs::write(dir.join("assets/app.js"), "console.log(1)").expect("write asset");
        dir
    }

    #[test]
    fn documents_revalidate_and_assets_are_cached() {
        assert_eq!(cache_policy("/", 600), "no-cache");
        assert_eq!(cache_policy("/horizon-labs.html", 600), "no-cache");
        assert_eq!(cache_policy("/services", 600), "no-cache");
        assert_eq!(cache_policy("/assets/js/main.js", 600), "public, max-age=600");
        assert_eq!(cache_policy("/assets/js/main.js", 0), "no-cache");
    }

    #[test]
    fn incoming_request_id_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));

        assert_eq!(resolve_request_id(&headers), "abc-123");
    }

    #[test]
    fn missing_request_id_is_generated_uniquely() {
        let headers = HeaderMap::new();
        let first = resolve_request_id(&headers);
        let second = resolve_request_id(&headers);

        assert!(first.starts_with("req-"));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn static_asset_gets_long_cache_and_request_id() {
        let dist = scratch_dist("asset");
        let response = router(test_config(&dist))
            .oneshot(get("/assets/app.js"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
            Some("public, max-age=600")
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        let _ = fs::remove_dir_all(dist);
    }

    #[tokio::test]
    async fn unknown_route_falls_back_to_index_without_caching() {
        let dist = scratch_dist("fallback");
        let response = router(test_config(&dist))
            .oneshot(get("/horizon-labs"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
            Some("no-cache")
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(&body[..], b"<html>home</html>");
        let _ = fs::remove_dir_all(dist);
    }
}
