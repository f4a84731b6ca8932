use std::sync::Arc;

use axum::{
    body::{boxed, Body},
    extract::State,
    http::{HeaderValue, Method, Request, StatusCode},
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use tower::ServiceExt;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::debug;

use crate::{
    config::Config,
    error::{AppError, Result},
    state::AppState,
    utils::middleware::require_auth,
};

pub mod auth;
pub mod notifications;
pub mod quick_actions;
pub mod repositories;

/// 组装完整的应用路由: 认证路由不设门, 其余 API 路由都经过会话门
pub fn app(state: Arc<AppState>) -> Router {
    let guard = from_fn_with_state(state.clone(), require_auth);

    Router::new()
        .nest("/api/auth", auth::router())
        .nest(
            "/api/notifications",
            notifications::router().route_layer(guard.clone()),
        )
        .nest(
            "/api/repositories",
            repositories::router().route_layer(guard.clone()),
        )
        .nest(
            "/api/quick-actions",
            quick_actions::router().route_layer(guard),
        )
        .fallback(fallback)
        .layer(cors_layer(&state.config))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 兜底分发: 未知的 API 路径返回统一的 404 信封,
/// 其余请求交给静态文件服务 (根路径落到 index 文档)
async fn fallback(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
) -> Result<Response> {
    let path = request.uri().path();
    if path == "/api" || path.starts_with("/api/") {
        debug!("Unknown API endpoint: {} {}", request.method(), path);
        let body = Json(json!({
            "success": false,
            "message": "Endpoint not found",
        }));
        return Ok((StatusCode::NOT_FOUND, body).into_response());
    }

    let static_files = ServeDir::new(&state.config.static_dir);
    let response = static_files
        .oneshot(request)
        .await
        .map_err(|err| AppError::internal(&err.to_string()))?;
    Ok(response.map(boxed))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if config.cors_allowed_origins.trim() == "*" {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(
            config
                .cors_allowed_origins
                .split(',')
                .map(|origin| origin.trim().parse::<HeaderValue>().unwrap())
                .collect::<Vec<_>>(),
        )
    }
}
