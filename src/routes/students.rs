use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::students::requests::{ClassGroupScopeParams, StudentQueryParams};
use crate::models::users::entities::UserRole;
use crate::services::StudentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 STUDENT_SERVICE 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentQueryParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req, query.into_inner()).await
}

pub async fn get_student(
    req: HttpRequest,
    student_id: SafeIDI64,
    query: web::Query<ClassGroupScopeParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .get_student(&req, student_id.0, query.into_inner())
        .await
}

pub async fn get_competence_profile(
    req: HttpRequest,
    student_id: SafeIDI64,
    query: web::Query<ClassGroupScopeParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .get_competence_profile(&req, student_id.0, query.into_inner())
        .await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::get()
                        .to(list_students)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{id}").route(
                    web::get()
                        .to(get_student)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{id}/competence-profile").route(
                    web::get()
                        .to(get_competence_profile)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            ),
    );
}
