use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

use super::seed::seed_demo_data;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 包括 TLS 提供者、存储和演示数据
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    // 空数据库时写入演示数据
    if config.seed.demo_data {
        seed_demo_data(storage.as_ref(), config).await?;
    }

    Ok(StartupContext { storage })
}
