use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    error::{AppError, Result},
    models::user::{AdminUser, SessionStatus},
};

// 仪表盘唯一的管理员账号
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

/// 进程级共享会话: 单个认证标志 + 当前管理员身份。
///
/// 整个进程只有一个会话, 所有请求共用同一个门。
#[derive(Clone)]
pub struct SessionService {
    inner: Arc<RwLock<SessionState>>,
}

#[derive(Default)]
struct SessionState {
    authenticated: bool,
    user: Option<AdminUser>,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// 校验凭据; 成功时把会话置为已认证并返回管理员身份,
    /// 失败时会话保持不变
    pub fn login(&self, username: &str, password: &str) -> Result<AdminUser> {
        debug!("Login attempt for user: {}", username);

        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            warn!("Rejected login for user: {}", username);
            return Err(AppError::unauthorized(
                "اسم المستخدم أو كلمة المرور غير صحيحة",
            ));
        }

        let user = AdminUser {
            id: "1".to_string(),
            username: ADMIN_USERNAME.to_string(),
            role: "administrator".to_string(),
        };

        let mut session = self.inner.write();
        session.authenticated = true;
        session.user = Some(user.clone());

        info!("Administrator logged in: {}", user.username);
        Ok(user)
    }

    /// 无条件清除认证状态与身份
    pub fn logout(&self) {
        let mut session = self.inner.write();
        session.authenticated = false;
        session.user = None;
        info!("Administrator logged out");
    }

    /// 当前会话状态的只读视图
    pub fn status(&self) -> SessionStatus {
        let session = self.inner.read();
        SessionStatus {
            authenticated: session.authenticated,
            user: if session.authenticated {
                session.user.clone()
            } else {
                None
            },
        }
    }

    /// 受保护路由的门; 未认证即拒绝
    pub fn require_authenticated(&self) -> Result<()> {
        if self.inner.read().authenticated {
            Ok(())
        } else {
            Err(AppError::unauthorized("غير مصرح بالوصول"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated() {
        let session = SessionService::new();
        let status = session.status();
        assert!(!status.authenticated);
        assert!(status.user.is_none());
        assert!(session.require_authenticated().is_err());
    }

    #[test]
    fn valid_credentials_authenticate_with_fixed_identity() {
        let session = SessionService::new();
        let user = session.login("admin", "admin").unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, "administrator");

        let status = session.status();
        assert!(status.authenticated);
        assert_eq!(status.user.unwrap().username, "admin");
        assert!(session.require_authenticated().is_ok());
    }

    #[test]
    fn invalid_credentials_leave_session_unchanged() {
        let session = SessionService::new();
        assert!(session.login("admin", "wrong").is_err());
        assert!(session.login("root", "admin").is_err());
        assert!(!session.status().authenticated);

        // 已登录的会话不会被失败的再次登录破坏
        session.login("admin", "admin").unwrap();
        assert!(session.login("admin", "wrong").is_err());
        assert!(session.status().authenticated);
    }

    #[test]
    fn logout_clears_state() {
        let session = SessionService::new();
        session.login("admin", "admin").unwrap();
        session.logout();

        let status = session.status();
        assert!(!status.authenticated);
        assert!(status.user.is_none());
        assert!(session.require_authenticated().is_err());
    }
}
