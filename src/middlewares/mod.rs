pub mod current_user;
pub mod require_jwt;
pub mod require_role;

pub use current_user::CurrentUser;
pub use require_jwt::RequireJWT;
pub use require_role::RequireRole;

use actix_web::{HttpResponse, http::StatusCode};

use crate::models::ErrorBody;

// 辅助函数：创建错误响应
pub(crate) fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status).finish(),
        _ => HttpResponse::build(status).json(ErrorBody::new(message)),
    }
}
