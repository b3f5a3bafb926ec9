use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssessmentService, load_owned_assessment};
use crate::errors::VurderingError;
use crate::models::assessments::requests::UpdateAssessmentRequest;
use crate::models::users::entities::User;
use crate::utils::validate::validate_grade;

pub async fn update_assessment(
    service: &AssessmentService,
    request: &HttpRequest,
    user: &User,
    assessment_id: i64,
    update: UpdateAssessmentRequest,
) -> ActixResult<HttpResponse> {
    if let Some(Some(grade)) = update.grade {
        validate_grade(grade).map_err(VurderingError::validation)?;
    }

    let storage = service.get_storage(request)?;
    load_owned_assessment(storage.as_ref(), user, assessment_id).await?;

    if let Some(Some(goal_id)) = update.competence_goal_id {
        storage
            .get_competence_goal_by_id(goal_id)
            .await?
            .ok_or_else(|| VurderingError::not_found("Competence goal not found"))?;
    }

    let assessment = storage
        .update_assessment(assessment_id, update)
        .await?
        .ok_or_else(|| VurderingError::not_found("Assessment not found"))?;

    Ok(HttpResponse::Ok().json(assessment))
}
