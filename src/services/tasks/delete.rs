use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TaskService, load_own_task};
use crate::errors::VurderingError;
use crate::models::users::entities::User;

pub async fn delete_task(
    service: &TaskService,
    request: &HttpRequest,
    user: &User,
    task_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    load_own_task(storage.as_ref(), user, task_id).await?;

    if !storage.delete_task(task_id).await? {
        return Err(VurderingError::not_found("Task not found").into());
    }

    Ok(HttpResponse::NoContent().finish())
}
