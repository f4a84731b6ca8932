use serde::{Deserialize, Serialize};

/// 仪表盘管理员身份
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// 登录请求; 缺失字段静默取空串
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// 当前会话状态的只读视图
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub user: Option<AdminUser>,
}
