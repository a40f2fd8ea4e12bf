//! PostHub - 用户与帖子 REST API

use std::sync::Arc;

use posthub::application::{PostRepositoryPort, UserRepositoryPort};
use posthub::config::{load_config, print_config, AppConfig, StorageBackend};
use posthub::infrastructure::http::{AppState, HttpServer};
use posthub::infrastructure::memory::InMemoryStore;
use posthub::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqlitePostRepository, SqliteUserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("PostHub - users & posts API");
    print_config(&config);

    // 创建 Repository 适配器
    let (user_repo, post_repo) = create_repositories(&config).await?;

    // 创建 HTTP 服务器
    let state =
        AppState::new(user_repo, post_repo).with_error_stack(config.server.expose_error_stack);

    let server = HttpServer::new(config.server.clone(), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，RUST_LOG 优先于配置文件
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},posthub={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn create_repositories(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn UserRepositoryPort>, Arc<dyn PostRepositoryPort>)> {
    match config.database.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            let store = InMemoryStore::new().arc();
            let user_repo: Arc<dyn UserRepositoryPort> = store.clone();
            let post_repo: Arc<dyn PostRepositoryPort> = store;
            Ok((user_repo, post_repo))
        }
        StorageBackend::Sqlite => {
            // 确保数据目录存在
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            let user_repo: Arc<dyn UserRepositoryPort> =
                Arc::new(SqliteUserRepository::new(pool.clone()));
            let post_repo: Arc<dyn PostRepositoryPort> = Arc::new(SqlitePostRepository::new(pool));
            Ok((user_repo, post_repo))
        }
    }
}
