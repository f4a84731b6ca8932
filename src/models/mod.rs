pub mod notification;
pub mod repository;
pub mod user;

// 重新导出常用类型
pub use notification::{Notification, NotificationStats, SendNotificationRequest};
pub use repository::{AddRepositoryRequest, Repository, RepositoryStats, UpdateRepositoryRequest};
pub use user::{AdminUser, LoginRequest, SessionStatus};
