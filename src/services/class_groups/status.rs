use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::ClassGroupService;
use crate::config::StatusPolicy;
use crate::errors::{Result, VurderingError};
use crate::models::assessments::entities::Assessment;
use crate::models::assessments::requests::AssessmentListQuery;
use crate::models::class_groups::responses::{StudentStatusEntry, StudentsStatusResponse};
use crate::models::status::StatusCounts;
use crate::services::aggregation::{sort_status_entries, summarize_status};
use crate::services::status_policy_from_request;
use crate::storage::Storage;

pub async fn get_students_status(
    service: &ClassGroupService,
    request: &HttpRequest,
    class_group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let class_group = storage
        .get_class_group_by_id(class_group_id)
        .await?
        .ok_or_else(|| VurderingError::not_found("Class group not found"))?;

    let policy = status_policy_from_request(request);
    let students = status_entries(storage.as_ref(), class_group_id, &policy).await?;
    let summary: StatusCounts = students.iter().map(|s| s.summary.status).collect();

    Ok(HttpResponse::Ok().json(StudentsStatusResponse {
        class_group,
        students,
        summary,
    }))
}

/// 计算教学班内每个学生的状态，已按 CRITICAL → WARNING → OK 排序
pub(crate) async fn status_entries(
    storage: &dyn Storage,
    class_group_id: i64,
    policy: &StatusPolicy,
) -> Result<Vec<StudentStatusEntry>> {
    let students = storage.list_students_in_class_group(class_group_id).await?;
    let assessments = storage
        .list_assessments(AssessmentListQuery::for_class_group(class_group_id))
        .await?;

    let mut by_student: HashMap<i64, Vec<Assessment>> = HashMap::new();
    for assessment in assessments {
        by_student
            .entry(assessment.student_id)
            .or_default()
            .push(assessment);
    }

    let now = chrono::Utc::now();
    let mut entries: Vec<StudentStatusEntry> = students
        .into_iter()
        .map(|student| {
            let own = by_student.get(&student.id).map(Vec::as_slice).unwrap_or(&[]);
            StudentStatusEntry {
                id: student.id,
                name: student.name,
                grade_level: student.grade_level,
                summary: summarize_status(own, Some(class_group_id), policy, now),
            }
        })
        .collect();

    sort_status_entries(&mut entries);
    Ok(entries)
}
