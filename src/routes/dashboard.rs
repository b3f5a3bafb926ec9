use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, CurrentUser};
use crate::models::users::entities::UserRole;
use crate::services::DashboardService;

// 懒加载的全局 DASHBOARD_SERVICE 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn get_teacher_stats(req: HttpRequest, user: CurrentUser) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.get_teacher_stats(&req, &user).await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/dashboard")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/stats").route(
                    web::get()
                        .to(get_teacher_stats)
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            ),
    );
}
