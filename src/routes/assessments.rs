use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, CurrentUser};
use crate::models::assessments::requests::{
    AssessmentQueryParams, CreateAssessmentRequest, UpdateAssessmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AssessmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ASSESSMENT_SERVICE 实例
static ASSESSMENT_SERVICE: Lazy<AssessmentService> = Lazy::new(AssessmentService::new_lazy);

// HTTP处理程序
pub async fn list_assessments(
    req: HttpRequest,
    query: web::Query<AssessmentQueryParams>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .list_assessments(&req, query.into_inner())
        .await
}

pub async fn create_assessment(
    req: HttpRequest,
    user: CurrentUser,
    assessment_data: web::Json<CreateAssessmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .create_assessment(&req, &user, assessment_data.into_inner())
        .await
}

pub async fn update_assessment(
    req: HttpRequest,
    user: CurrentUser,
    assessment_id: SafeIDI64,
    update_data: web::Json<UpdateAssessmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .update_assessment(&req, &user, assessment_id.0, update_data.into_inner())
        .await
}

pub async fn delete_assessment(
    req: HttpRequest,
    user: CurrentUser,
    assessment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .delete_assessment(&req, &user, assessment_id.0)
        .await
}

// 配置路由
pub fn configure_assessments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/assessments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_assessments)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_assessment)
                            // 只有教师可以记录评估，且仅限自己的教学班
                            .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::patch()
                            .to(update_assessment)
                            .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                    )
                    .route(
                        web::delete()
                            .to(delete_assessment)
                            .wrap(middlewares::RequireRole::new(&UserRole::Teacher)),
                    ),
            ),
    );
}
