use crate::{
    error::Result,
    models::repository::{AddRepositoryRequest, UpdateRepositoryRequest},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_repositories).post(add_repository))
        .route("/stats", get(repository_stats))
        .route("/refresh-all", post(refresh_all_repositories))
        .route("/:id", put(update_repository).delete(delete_repository))
        .route("/:id/refresh", post(refresh_repository))
}

/// List source repositories in creation order
/// GET /api/repositories
async fn list_repositories(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    debug!("Listing repositories");

    let repositories = state.repository_service.list();
    Ok(Json(json!({ "repositories": repositories })))
}

/// Aggregate repository counters
/// GET /api/repositories/stats
async fn repository_stats(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let stats = state.repository_service.stats();
    Ok(Json(json!({ "stats": stats })))
}

/// Register a new source repository
/// POST /api/repositories
async fn add_repository(
    State(state): State<Arc<AppState>>,
    body: Option<Json<AddRepositoryRequest>>,
) -> Result<Json<Value>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let repository = state.repository_service.add(request);
    debug!("Repository {} registered", repository.id);

    Ok(Json(json!({
        "success": true,
        "message": "تم إضافة المستودع بنجاح",
    })))
}

/// Refresh every active repository
/// POST /api/repositories/refresh-all
async fn refresh_all_repositories(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    state.repository_service.refresh_all();

    Ok(Json(json!({
        "success": true,
        "message": "تم تحديث جميع المستودعات بنجاح",
    })))
}

/// Refresh a single repository, active or not
/// POST /api/repositories/:id/refresh
async fn refresh_repository(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state.repository_service.refresh_one(&id)?;

    Ok(Json(json!({
        "success": true,
        "message": "تم تحديث المستودع بنجاح",
    })))
}

/// Toggle a repository's active flag
/// PUT /api/repositories/:id
async fn update_repository(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<UpdateRepositoryRequest>>,
) -> Result<Json<Value>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    state.repository_service.set_active(&id, request.is_active)?;

    Ok(Json(json!({
        "success": true,
        "message": "تم تحديث المستودع بنجاح",
    })))
}

/// Delete a repository; succeeds even when the id is unknown
/// DELETE /api/repositories/:id
async fn delete_repository(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state.repository_service.delete(&id);

    Ok(Json(json!({
        "success": true,
        "message": "تم حذف المستودع بنجاح",
    })))
}
