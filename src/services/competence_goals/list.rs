use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CompetenceGoalService;
use crate::models::competence_goals::requests::CompetenceGoalQueryParams;
use crate::models::competence_goals::responses::CompetenceGoalListResponse;

pub async fn list_competence_goals(
    service: &CompetenceGoalService,
    request: &HttpRequest,
    query: CompetenceGoalQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let goals = storage.list_competence_goals(query.into()).await?;

    Ok(HttpResponse::Ok().json(CompetenceGoalListResponse::from_goals(goals)))
}
