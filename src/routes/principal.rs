use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::DashboardService;

// 懒加载的全局 PRINCIPAL_SERVICE 实例
static PRINCIPAL_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn list_class_group_overview(req: HttpRequest) -> ActixResult<HttpResponse> {
    PRINCIPAL_SERVICE.list_class_group_overview(&req).await
}

// 配置路由：校长（rektor）视图
pub fn configure_principal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/rektor")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/class-groups").route(
                    web::get()
                        .to(list_class_group_overview)
                        .wrap(middlewares::RequireRole::new(&UserRole::Principal)),
                ),
            ),
    );
}
