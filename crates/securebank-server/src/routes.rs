use std::time::Duration;

use axum::body::Body;
use axum::extract::Path;
use axum::http::{Request, Response};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use securebank_core::{bank_header, document, landing_page};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::AppError;

const PAGE_TITLE: &str = "SecureBank";

pub fn router(config: &ServerConfig) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/partials/{name}", get(partial))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(trace_layer)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index() -> Html<String> {
    Html(document(PAGE_TITLE, &landing_page()))
}

async fn partial(Path(name): Path<String>) -> Result<Html<String>, AppError> {
    let node = match name.as_str() {
        "header" => bank_header(),
        "page" => landing_page(),
        _ => return Err(AppError::NotFound(format!("Unknown partial: {}", name))),
    };
    Ok(Html(node.to_html()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn app() -> Router {
        router(&ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            static_dir: PathBuf::from("./does-not-exist"),
        })
    }

    async fn get_body(uri: &str) -> (StatusCode, String) {
        let res = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_healthz() {
        let (status, body) = get_body("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_header_partial() {
        let (status, body) = get_body("/partials/header").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, bank_header().to_html());
        assert!(body.contains("SecureBank"));
        assert!(body.contains("data-variant=\"ghost\""));
    }

    #[tokio::test]
    async fn test_page_partial_and_index() {
        let (status, body) = get_body("/partials/page").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<header").count(), 1);

        let (status, body) = get_body("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("Help &amp; Support"));
    }

    #[tokio::test]
    async fn test_unknown_partial_is_json_404() {
        let (status, body) = get_body("/partials/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Unknown partial: nope");
    }

    #[tokio::test]
    async fn test_missing_static_file() {
        let (status, _) = get_body("/pkg/securebank-web.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
