use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{AssessmentService, ensure_class_group_owner};
use crate::errors::VurderingError;
use crate::models::assessments::requests::CreateAssessmentRequest;
use crate::models::users::entities::User;
use crate::utils::validate::validate_grade;

pub async fn create_assessment(
    service: &AssessmentService,
    request: &HttpRequest,
    user: &User,
    req: CreateAssessmentRequest,
) -> ActixResult<HttpResponse> {
    if let Some(grade) = req.grade {
        validate_grade(grade).map_err(VurderingError::validation)?;
    }

    let storage = service.get_storage(request)?;

    let class_group = storage
        .get_class_group_by_id(req.class_group_id)
        .await?
        .ok_or_else(|| VurderingError::not_found("Class group not found"))?;

    ensure_class_group_owner(&class_group, user)?;

    storage
        .get_student_by_id(req.student_id)
        .await?
        .ok_or_else(|| VurderingError::not_found("Student not found"))?;

    if let Some(goal_id) = req.competence_goal_id {
        storage
            .get_competence_goal_by_id(goal_id)
            .await?
            .ok_or_else(|| VurderingError::not_found("Competence goal not found"))?;
    }

    // 评估时学生必须属于该教学班
    if !storage
        .is_student_in_class_group(req.class_group_id, req.student_id)
        .await?
    {
        return Err(VurderingError::validation(
            "Student is not a member of this class group",
        )
        .into());
    }

    let assessment = storage.create_assessment(req).await?;
    info!(
        "Assessment {} recorded by user {} for student {}",
        assessment.id, user.id, assessment.student_id
    );

    Ok(HttpResponse::Created().json(assessment))
}
