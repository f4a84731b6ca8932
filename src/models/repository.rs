use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::store::Resource;

/// 漫画源仓库记录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub is_active: bool,
    pub source_count: u32,
    pub last_updated: DateTime<Utc>,
}

impl Resource for Repository {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 添加仓库请求; 缺失字段静默取默认值
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddRepositoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// 更新仓库请求; 只有携带 isActive 字段时才会改动记录
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRepositoryRequest {
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryStats {
    pub total: usize,
    pub active: usize,
}
