use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub status: StatusPolicy,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// JWT 配置
///
/// 令牌由外部身份服务签发，本服务只做校验，密钥需与签发方一致。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub secret: String,
    pub access_token_expiry: i64, // 分钟，仅用于本地签发测试令牌
    #[serde(default)]
    pub leeway: u64, // 允许的时钟偏差 (秒)
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age: usize,
}

/// 学生评估状态判定阈值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPolicy {
    /// 少于该评估次数即为 WARNING
    pub min_assessments: i64,
    /// 距最近一次评估超过该天数即为 WARNING
    pub stale_after_days: i64,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            min_assessments: 2,
            stale_after_days: 30,
        }
    }
}

/// 演示数据配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    pub demo_data: bool,
}
