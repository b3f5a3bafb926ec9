//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称以及 HTTP 状态码映射。

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::models::ErrorBody;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_vurdering_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum VurderingError {
            $($variant(String),)*
        }

        impl VurderingError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(VurderingError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(VurderingError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(VurderingError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl VurderingError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        VurderingError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_vurdering_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Authentication("E006", "Authentication Error"),
    Authorization("E007", "Authorization Error"),
}

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl VurderingError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 对外暴露的消息，服务端错误不泄露内部细节
    pub fn public_message(&self) -> &str {
        if self.status_code().is_server_error() {
            INTERNAL_ERROR_MESSAGE
        } else {
            self.message()
        }
    }
}

impl fmt::Display for VurderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for VurderingError {}

impl ResponseError for VurderingError {
    fn status_code(&self) -> StatusCode {
        match self {
            VurderingError::Validation(_) => StatusCode::BAD_REQUEST,
            VurderingError::Authentication(_) => StatusCode::UNAUTHORIZED,
            VurderingError::Authorization(_) => StatusCode::FORBIDDEN,
            VurderingError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), "{}", self.format_simple());
        } else {
            tracing::debug!(code = self.code(), "{}", self.format_simple());
        }
        HttpResponse::build(status).json(ErrorBody::new(self.public_message()))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for VurderingError {
    fn from(err: sea_orm::DbErr) -> Self {
        VurderingError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VurderingError>;
