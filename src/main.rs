use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use freegoat_admin::{
    config::Config,
    routes,
    services::{NotificationService, RepositoryService, SessionService},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "freegoat_admin=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FreeGoat admin dashboard service...");

    // 加载配置
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    // 初始化所有服务
    let session_service = SessionService::new();
    let notification_service = NotificationService::new();
    let repository_service = RepositoryService::new();

    // 创建应用状态
    let app_state = Arc::new(AppState {
        config: config.clone(),
        session_service,
        notification_service,
        repository_service,
    });

    let app = routes::app(app_state);

    // 启动主服务器
    let addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server on http://{}", addr);
    info!("Serving dashboard files from {}", config.static_dir);
    info!("Default admin credentials: admin / admin");

    axum::Server::bind(&addr.parse()?)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
