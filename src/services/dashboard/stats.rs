use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use super::DashboardService;
use crate::models::assessments::requests::AssessmentListQuery;
use crate::models::class_groups::requests::ClassGroupListQuery;
use crate::models::dashboard::responses::TeacherDashboardStats;
use crate::models::users::entities::User;

pub async fn get_teacher_stats(
    service: &DashboardService,
    request: &HttpRequest,
    user: &User,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let class_groups = storage
        .list_class_groups(ClassGroupListQuery {
            teacher_id: Some(user.id),
        })
        .await?;

    // 同一学生可能在多个教学班，按 ID 去重
    let mut student_ids: HashSet<i64> = HashSet::new();
    for class_group in &class_groups {
        let students = storage.list_students_in_class_group(class_group.id).await?;
        student_ids.extend(students.iter().map(|s| s.id));
    }

    let class_group_ids: Vec<i64> = class_groups.iter().map(|g| g.id).collect();
    let assessments = storage
        .list_assessments(AssessmentListQuery {
            class_group_ids: Some(class_group_ids),
            ..Default::default()
        })
        .await?;

    let assessed: HashSet<i64> = assessments.iter().map(|a| a.student_id).collect();
    let warning_count = student_ids.difference(&assessed).count() as i64;

    Ok(HttpResponse::Ok().json(TeacherDashboardStats {
        class_group_count: class_groups.len() as i64,
        student_count: student_ids.len() as i64,
        assessment_count: assessments.len() as i64,
        warning_count,
    }))
}
