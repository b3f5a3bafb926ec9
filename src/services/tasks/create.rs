use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TaskService;
use crate::errors::VurderingError;
use crate::models::tasks::requests::CreateTaskRequest;
use crate::models::users::entities::User;
use crate::utils::validate::validate_task_title;

pub async fn create_task(
    service: &TaskService,
    request: &HttpRequest,
    user: &User,
    mut req: CreateTaskRequest,
) -> ActixResult<HttpResponse> {
    validate_task_title(&req.title).map_err(VurderingError::validation)?;
    req.title = req.title.trim().to_string();

    let storage = service.get_storage(request)?;
    let task = storage.create_task(user.id, req).await?;

    Ok(HttpResponse::Created().json(task))
}
