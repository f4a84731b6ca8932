use crate::{error::Result, state::AppState};
use axum::{extract::Path, response::Json, routing::post, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/:action", post(run_quick_action))
}

/// Run a one-shot maintenance action
/// POST /api/quick-actions/:action
async fn run_quick_action(Path(action): Path<String>) -> Result<Json<Value>> {
    info!("Running quick action: {}", action);

    // 已知动作有专属回执, 其余动作返回通用回执
    let message = match action.as_str() {
        "clear-cache" => "تم تنظيف الذاكرة المؤقتة بنجاح",
        "export-data" => "تم تصدير البيانات بنجاح",
        _ => "تم تنفيذ العملية بنجاح",
    };

    Ok(Json(json!({
        "success": true,
        "message": message,
    })))
}
