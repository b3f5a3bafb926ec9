pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::{Result, VurderingError};
use crate::models::tasks::entities::Task;
use crate::models::tasks::requests::{CreateTaskRequest, UpdateTaskRequest};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct TaskService {
    storage: Option<Arc<dyn Storage>>,
}

impl TaskService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 列出当前用户的待办
    pub async fn list_tasks(&self, request: &HttpRequest, user: &User) -> ActixResult<HttpResponse> {
        list::list_tasks(self, request, user).await
    }

    // 创建待办
    pub async fn create_task(
        &self,
        request: &HttpRequest,
        user: &User,
        req: CreateTaskRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_task(self, request, user, req).await
    }

    // 更新待办
    pub async fn update_task(
        &self,
        request: &HttpRequest,
        user: &User,
        task_id: i64,
        update: UpdateTaskRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_task(self, request, user, task_id, update).await
    }

    // 删除待办
    pub async fn delete_task(
        &self,
        request: &HttpRequest,
        user: &User,
        task_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_task(self, request, user, task_id).await
    }
}

// 他人的待办按不存在处理
async fn load_own_task(storage: &dyn Storage, user: &User, task_id: i64) -> Result<Task> {
    storage
        .get_task_by_id(task_id)
        .await?
        .filter(|task| task.owner_id == user.id)
        .ok_or_else(|| VurderingError::not_found("Task not found"))
}
