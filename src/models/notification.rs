use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::store::Resource;

/// 推送给仪表盘的通知记录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub sent: bool,
}

impl Resource for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 发送通知请求; 缺失字段静默取默认值
#[derive(Debug, Clone, Deserialize)]
pub struct SendNotificationRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

impl Default for SendNotificationRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            kind: default_kind(),
            priority: default_priority(),
        }
    }
}

fn default_kind() -> String {
    "general".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationStats {
    pub total: usize,
    pub sent: usize,
}
