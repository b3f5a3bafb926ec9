use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, CurrentUser};
use crate::models::users::entities::UserRole;
use crate::services::ClassGroupService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CLASS_GROUP_SERVICE 实例
static CLASS_GROUP_SERVICE: Lazy<ClassGroupService> = Lazy::new(ClassGroupService::new_lazy);

// HTTP处理程序
pub async fn list_class_groups(req: HttpRequest, user: CurrentUser) -> ActixResult<HttpResponse> {
    CLASS_GROUP_SERVICE.list_class_groups(&req, &user).await
}

pub async fn get_class_group(
    req: HttpRequest,
    class_group_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASS_GROUP_SERVICE
        .get_class_group(&req, class_group_id.0)
        .await
}

pub async fn get_students_status(
    req: HttpRequest,
    class_group_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASS_GROUP_SERVICE
        .get_students_status(&req, class_group_id.0)
        .await
}

// 配置路由
pub fn configure_class_groups_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/class-groups")
            .wrap(middlewares::RequireJWT)
            .service(
                // 教师查看自己的教学班，校长查看全部
                web::resource("").route(
                    web::get()
                        .to(list_class_groups)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{id}").route(
                    web::get()
                        .to(get_class_group)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{id}/students-status").route(
                    web::get()
                        .to(get_students_status)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            ),
    );
}
