use crate::{error::Result, models::notification::SendNotificationRequest, state::AppState};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/stats", get(notification_stats))
        .route("/send", post(send_notification))
        .route("/:id", delete(delete_notification))
}

/// List notifications, most recent first
/// GET /api/notifications
async fn list_notifications(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    debug!("Listing notifications");

    let notifications = state.notification_service.list();
    Ok(Json(json!({ "notifications": notifications })))
}

/// Aggregate notification counters
/// GET /api/notifications/stats
async fn notification_stats(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let stats = state.notification_service.stats();
    Ok(Json(json!({ "stats": stats })))
}

/// Send a new notification to the dashboard
/// POST /api/notifications/send
async fn send_notification(
    State(state): State<Arc<AppState>>,
    body: Option<Json<SendNotificationRequest>>,
) -> Result<Json<Value>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let notification = state.notification_service.send(request);
    debug!("Notification {} queued for dashboard", notification.id);

    Ok(Json(json!({
        "success": true,
        "message": "تم إرسال الإشعار بنجاح",
    })))
}

/// Delete a notification; succeeds even when the id is unknown
/// DELETE /api/notifications/:id
async fn delete_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state.notification_service.delete(&id);

    Ok(Json(json!({
        "success": true,
        "message": "تم حذف الإشعار بنجاح",
    })))
}
