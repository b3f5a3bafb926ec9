use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::competence_goals::requests::CompetenceGoalQueryParams;
use crate::services::CompetenceGoalService;

// 懒加载的全局 COMPETENCE_GOAL_SERVICE 实例
static COMPETENCE_GOAL_SERVICE: Lazy<CompetenceGoalService> =
    Lazy::new(CompetenceGoalService::new_lazy);

pub async fn list_competence_goals(
    req: HttpRequest,
    query: web::Query<CompetenceGoalQueryParams>,
) -> ActixResult<HttpResponse> {
    COMPETENCE_GOAL_SERVICE
        .list_competence_goals(&req, query.into_inner())
        .await
}

// 配置路由，任何登录用户可访问
pub fn configure_competence_goals_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/competence-goals")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_competence_goals)),
    );
}
