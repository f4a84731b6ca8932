use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

use crate::{error::AppError, state::AppState};

/// 认证中间件: 受保护的 API 路由要求已登录的共享会话
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next<Body>,
) -> Result<Response, AppError> {
    if let Err(err) = state.session_service.require_authenticated() {
        debug!(
            "Blocked unauthenticated request to {}",
            request.uri().path()
        );
        return Err(err);
    }

    Ok(next.run(request).await)
}
