use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::cmp::Ordering;

use super::TaskService;
use crate::models::tasks::entities::Task;
use crate::models::users::entities::User;

pub async fn list_tasks(
    service: &TaskService,
    request: &HttpRequest,
    user: &User,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let mut tasks = storage.list_tasks(user.id).await?;
    sort_tasks(&mut tasks);

    Ok(HttpResponse::Ok().json(tasks))
}

/// 未完成在前，再按截止日期（无截止日期排最后），最后按 ID
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.done
            .cmp(&b.done)
            .then_with(|| match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.id.cmp(&b.id))
    });
}
