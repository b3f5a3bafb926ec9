use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::entities::User;

pub async fn get_current_user(
    _service: &UserService,
    _request: &HttpRequest,
    user: User,
) -> ActixResult<HttpResponse> {
    // RequireJWT 已从存储加载最新的用户信息
    Ok(HttpResponse::Ok().json(user))
}
