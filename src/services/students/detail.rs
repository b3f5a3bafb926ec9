use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::errors::VurderingError;
use crate::models::assessments::requests::AssessmentListQuery;
use crate::models::students::requests::ClassGroupScopeParams;
use crate::models::students::responses::StudentDetailResponse;
use crate::services::aggregation::summarize_status;
use crate::services::status_policy_from_request;

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    scope: ClassGroupScopeParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let student = storage
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| VurderingError::not_found("Student not found"))?;

    // 限定的教学班必须存在
    if let Some(class_group_id) = scope.class_group_id {
        storage
            .get_class_group_by_id(class_group_id)
            .await?
            .ok_or_else(|| VurderingError::not_found("Class group not found"))?;
    }

    let class_groups = storage.list_class_groups_for_student(student_id).await?;

    let mut query = AssessmentListQuery::for_student(student_id);
    query.class_group_ids = scope.class_group_id.map(|id| vec![id]);
    let assessments = storage.list_assessments(query).await?;

    let policy = status_policy_from_request(request);
    let status = summarize_status(
        &assessments,
        scope.class_group_id,
        &policy,
        chrono::Utc::now(),
    );

    Ok(HttpResponse::Ok().json(StudentDetailResponse {
        student,
        class_groups,
        assessments,
        status,
    }))
}
