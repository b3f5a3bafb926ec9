use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, CurrentUser};
use crate::models::users::entities::UserRole;
use crate::services::DashboardService;

// 懒加载的全局 CONTACT_TEACHER_SERVICE 实例
static CONTACT_TEACHER_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn list_contact_students(
    req: HttpRequest,
    user: CurrentUser,
) -> ActixResult<HttpResponse> {
    CONTACT_TEACHER_SERVICE
        .list_contact_students(&req, &user)
        .await
}

// 配置路由：联系教师（kontaktlærer）视图
pub fn configure_contact_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/kontaktlaerer")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/elever").route(
                    web::get()
                        .to(list_contact_students)
                        .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                ),
            ),
    );
}
