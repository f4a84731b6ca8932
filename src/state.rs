use crate::{
    config::Config,
    services::{
        notification::NotificationService, repository::RepositoryService,
        session::SessionService,
    },
};

/// 应用程序的共享状态
/// 包含所有服务和配置的引用
#[derive(Clone)]
pub struct AppState {
    /// 应用配置
    pub config: Config,

    /// 会话服务
    pub session_service: SessionService,

    /// 通知服务
    pub notification_service: NotificationService,

    /// 仓库服务
    pub repository_service: RepositoryService,
}

impl AppState {
    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.config.is_production()
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.config.is_development()
    }
}
