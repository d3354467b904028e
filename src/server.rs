use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::logging::{now_unix_millis, LogLevel, Logger, DEFAULT_LOG_LEVEL};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq)]
struct ServerConfig {
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .filter(|value| (PORT_BOUNDS.0..=PORT_BOUNDS.1).contains(value))
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = non_empty(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = non_empty(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Clone)]
struct AppState {
    logger: Logger,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let logger = Logger::new(config.log_level);
    let app = router(&config, AppState { logger });

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    logger.event(
        LogLevel::Info,
        "server.started",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "distDir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn router(config: &ServerConfig, state: AppState) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state, request_context))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

async fn request_context(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    state.logger.event(
        LogLevel::Info,
        "http.request",
        json!({
            "requestId": request_id,
            "method": method,
            "path": path,
            "status": response.status().as_u16(),
            "elapsedMs": started.elapsed().as_millis() as u64,
        }),
    );
    response
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
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
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| values.get(name).cloned()
    }

    #[test]
    fn config_defaults_when_env_is_empty() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));

        assert_eq!(
            config,
            ServerConfig {
                port: DEFAULT_PORT,
                dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
                log_level: LogLevel::Info,
            }
        );
    }

    #[test]
    fn config_reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", " 3000 "),
            ("DIST_DIR", "public"),
            ("LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn config_rejects_invalid_values() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "0"),
            ("DIST_DIR", "   "),
            ("LOG_LEVEL", "verbose"),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn request_id_is_echoed_when_present() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));

        assert_eq!(resolve_request_id(&headers), "abc-123");
    }

    #[test]
    fn request_id_is_generated_when_missing_or_blank() {
        let mut headers = HeaderMap::new();
        let generated = resolve_request_id(&headers);
        assert!(generated.starts_with("req-"));

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        let regenerated = resolve_request_id(&headers);
        assert!(regenerated.starts_with("req-"));
        assert_ne!(generated, regenerated);
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let Json(body) = healthz().await;

        assert_eq!(body, json!({ "ok": true }));
    }
}
