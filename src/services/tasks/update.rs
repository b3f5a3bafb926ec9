use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TaskService, load_own_task};
use crate::errors::VurderingError;
use crate::models::tasks::requests::UpdateTaskRequest;
use crate::models::users::entities::User;
use crate::utils::validate::validate_task_title;

pub async fn update_task(
    service: &TaskService,
    request: &HttpRequest,
    user: &User,
    task_id: i64,
    mut update: UpdateTaskRequest,
) -> ActixResult<HttpResponse> {
    if let Some(title) = update.title.as_deref() {
        validate_task_title(title).map_err(VurderingError::validation)?;
    }
    update.title = update.title.map(|t| t.trim().to_string());

    let storage = service.get_storage(request)?;
    let existing = load_own_task(storage.as_ref(), user, task_id).await?;

    // 空更新直接返回当前数据
    if update.is_empty() {
        return Ok(HttpResponse::Ok().json(existing));
    }

    let task = storage
        .update_task(task_id, update)
        .await?
        .ok_or_else(|| VurderingError::not_found("Task not found"))?;

    Ok(HttpResponse::Ok().json(task))
}
