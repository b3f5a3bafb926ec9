use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, CurrentUser};
use crate::services::UserService;

// 懒加载的全局 USER_SERVICE 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn get_current_user(req: HttpRequest, user: CurrentUser) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_current_user(&req, user.0).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/me")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(get_current_user)),
    );
}
