use crate::{error::Result, models::user::LoginRequest, state::AppState};
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        // 认证路由永远不设门
        .route("/check", get(check_auth))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// 获取当前认证状态
/// GET /api/auth/check
async fn check_auth(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    debug!("Checking authentication status");

    let status = state.session_service.status();
    Ok(Json(json!({
        "authenticated": status.authenticated,
        "user": status.user,
    })))
}

/// 管理员登录
/// POST /api/auth/login
async fn login(
    State(state): State<Arc<AppState>>,
    body: Option<Json<LoginRequest>>,
) -> Result<Json<Value>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let user = state
        .session_service
        .login(&request.username, &request.password)?;

    Ok(Json(json!({
        "success": true,
        "message": "تم تسجيل الدخول بنجاح",
        "user": user,
    })))
}

/// 退出登录
/// POST /api/auth/logout
async fn logout(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    state.session_service.logout();

    Ok(Json(json!({
        "success": true,
        "message": "تم تسجيل الخروج بنجاح",
    })))
}
