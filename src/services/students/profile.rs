use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::errors::VurderingError;
use crate::models::assessments::requests::AssessmentListQuery;
use crate::models::competence_goals::requests::CompetenceGoalListQuery;
use crate::models::students::requests::ClassGroupScopeParams;
use crate::services::aggregation::build_competence_profile;

pub async fn get_competence_profile(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    scope: ClassGroupScopeParams,
) -> ActixResult<HttpResponse> {
    let class_group_id = scope
        .class_group_id
        .ok_or_else(|| VurderingError::validation("classGroupId is required"))?;

    let storage = service.get_storage(request)?;

    storage
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| VurderingError::not_found("Student not found"))?;

    let class_group = storage
        .get_class_group_by_id(class_group_id)
        .await?
        .ok_or_else(|| VurderingError::not_found("Class group not found"))?;

    let goals = storage
        .list_competence_goals(CompetenceGoalListQuery {
            subject: Some(class_group.subject.clone()),
            grade_level: Some(class_group.grade_level),
        })
        .await?;

    let assessments = storage
        .list_assessments(AssessmentListQuery {
            student_id: Some(student_id),
            class_group_ids: Some(vec![class_group_id]),
            ..Default::default()
        })
        .await?;

    let profile = build_competence_profile(student_id, &class_group, &goals, &assessments);

    Ok(HttpResponse::Ok().json(profile))
}
