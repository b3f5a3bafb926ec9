use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::DashboardService;
use crate::models::class_groups::requests::ClassGroupListQuery;
use crate::models::dashboard::responses::ClassGroupOverview;
use crate::models::status::StatusCounts;
use crate::services::class_groups::status::status_entries;
use crate::services::status_policy_from_request;

pub async fn list_class_group_overview(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let policy = status_policy_from_request(request);

    let class_groups = storage
        .list_class_groups(ClassGroupListQuery::default())
        .await?;

    let mut teacher_ids: Vec<i64> = class_groups.iter().map(|g| g.teacher_id).collect();
    teacher_ids.sort_unstable();
    teacher_ids.dedup();
    let teacher_names: HashMap<i64, String> = storage
        .list_users_by_ids(&teacher_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u.name))
        .collect();

    let mut overview = Vec::with_capacity(class_groups.len());
    for class_group in class_groups {
        let entries = status_entries(storage.as_ref(), class_group.id, &policy).await?;
        let counts: StatusCounts = entries.iter().map(|e| e.summary.status).collect();

        overview.push(ClassGroupOverview {
            id: class_group.id,
            name: class_group.name,
            subject: class_group.subject,
            grade_level: class_group.grade_level,
            teacher_name: teacher_names.get(&class_group.teacher_id).cloned(),
            student_count: counts.total,
            ok_count: counts.ok_count,
            warning_count: counts.warning_count,
            critical_count: counts.critical_count,
        });
    }

    Ok(HttpResponse::Ok().json(overview))
}
