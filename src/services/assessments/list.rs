use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::models::assessments::requests::{AssessmentListQuery, AssessmentQueryParams};

pub async fn list_assessments(
    service: &AssessmentService,
    request: &HttpRequest,
    query: AssessmentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let assessments = storage
        .list_assessments(AssessmentListQuery {
            student_id: query.student_id,
            class_group_ids: query.class_group_id.map(|id| vec![id]),
            ..Default::default()
        })
        .await?;

    Ok(HttpResponse::Ok().json(assessments))
}
