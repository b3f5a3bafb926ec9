use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::{ClassGroupService, RECENT_ASSESSMENT_LIMIT};
use crate::errors::VurderingError;
use crate::models::assessments::requests::AssessmentListQuery;
use crate::models::class_groups::responses::{ClassGroupDetailResponse, RecentAssessment};
use crate::models::users::entities::UserSummary;

pub async fn get_class_group(
    service: &ClassGroupService,
    request: &HttpRequest,
    class_group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let class_group = storage
        .get_class_group_by_id(class_group_id)
        .await?
        .ok_or_else(|| VurderingError::not_found("Class group not found"))?;

    let teacher = storage
        .get_user_by_id(class_group.teacher_id)
        .await?
        .map(UserSummary::from);

    let students = storage.list_students_in_class_group(class_group_id).await?;

    let mut query = AssessmentListQuery::for_class_group(class_group_id);
    query.limit = Some(RECENT_ASSESSMENT_LIMIT);
    let assessments = storage.list_assessments(query).await?;

    let mut names: HashMap<i64, String> = students
        .iter()
        .map(|s| (s.id, s.name.clone()))
        .collect();

    let mut recent_assessments = Vec::with_capacity(assessments.len());
    for assessment in assessments {
        // 学生可能已离开教学班，单独查询姓名
        if !names.contains_key(&assessment.student_id)
            && let Some(student) = storage.get_student_by_id(assessment.student_id).await?
        {
            names.insert(student.id, student.name);
        }
        let student_name = names
            .get(&assessment.student_id)
            .cloned()
            .unwrap_or_default();
        recent_assessments.push(RecentAssessment {
            assessment,
            student_name,
        });
    }

    Ok(HttpResponse::Ok().json(ClassGroupDetailResponse {
        class_group,
        teacher,
        students,
        recent_assessments,
    }))
}
