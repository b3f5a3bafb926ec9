pub mod get;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::entities::User;

pub struct UserService;

impl UserService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 获取当前登录用户
    pub async fn get_current_user(
        &self,
        request: &HttpRequest,
        user: User,
    ) -> ActixResult<HttpResponse> {
        get::get_current_user(self, request, user).await
    }
}
