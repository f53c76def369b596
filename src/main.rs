use anyhow::Context;
use std::{env, path::PathBuf};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use user_api::{build_router, infrastructure::Logger, AppState, Config, LandingPage, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个命令行参数为配置文件路径
    let config_path = Config::locate(env::args().nth(1).map(PathBuf::from));
    let config = match &config_path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("加载配置文件 {} 失败", path.display()))?,
        None => Config::default(),
    };
    config.validate()?;

    let _log_guard = Logger::init(&config.logging)?;

    match &config_path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let store = UserStore::seeded();
    info!("✅ 已初始化 {} 个示例用户", store.len());

    let landing = LandingPage::load(&config.landing.index_file).await;
    let app = build_router(AppState::new(store, landing), &config.http);

    let listener = TcpListener::bind((config.http.bind_address.as_str(), config.http.port))
        .await
        .with_context(|| format!("无法绑定到 {}", config.listen_address()))?;

    info!("🚀 用户 API 服务运行在 http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   GET    /api/users       - 获取所有用户");
    info!("   GET    /api/users/:id   - 获取特定用户");
    info!("   POST   /api/users       - 创建新用户");
    info!("   PUT    /api/users       - 更新用户 (id 在请求体中)");
    info!("   DELETE /api/users/:id   - 删除用户");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("收到 Ctrl-C，正在关闭服务..."),
        Err(err) => {
            error!(error = %err, "无法监听 Ctrl-C 信号");
            std::future::pending::<()>().await;
        }
    }
}
