pub mod notification;
pub mod repository;
pub mod session;
pub mod store;

// 重新导出常用类型
pub use notification::NotificationService;
pub use repository::RepositoryService;
pub use session::SessionService;
pub use store::ResourceStore;
