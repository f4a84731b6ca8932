//! Admin dashboard backend for the FreeGoat manga reader.
//!
//! 管理后台服务: 通知与仓库两个内存集合, 由单个共享会话门控保护。

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
