//! 待办存储操作

use super::SeaOrmStorage;
use crate::entity::tasks::{ActiveModel, Column, Entity as Tasks};
use crate::errors::{Result, VurderingError};
use crate::models::tasks::{
    entities::Task,
    requests::{CreateTaskRequest, UpdateTaskRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出用户的待办，排序由服务层决定
    pub async fn list_tasks_impl(&self, owner_id: i64) -> Result<Vec<Task>> {
        let tasks = Tasks::find()
            .filter(Column::OwnerId.eq(owner_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("查询待办列表失败: {e}")))?;

        Ok(tasks.into_iter().map(|m| m.into_task()).collect())
    }

    /// 创建待办
    pub async fn create_task_impl(&self, owner_id: i64, req: CreateTaskRequest) -> Result<Task> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            owner_id: Set(owner_id),
            title: Set(req.title),
            description: Set(req.description),
            priority: Set(req.priority.to_string()),
            due_date: Set(req.due_date.map(|d| d.timestamp())),
            done: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("创建待办失败: {e}")))?;

        Ok(result.into_task())
    }

    /// 通过 ID 获取待办
    pub async fn get_task_by_id_impl(&self, id: i64) -> Result<Option<Task>> {
        let result = Tasks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("查询待办失败: {e}")))?;

        Ok(result.map(|m| m.into_task()))
    }

    /// 更新待办
    pub async fn update_task_impl(
        &self,
        id: i64,
        update: UpdateTaskRequest,
    ) -> Result<Option<Task>> {
        let existing = self.get_task_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if let Some(priority) = update.priority {
            model.priority = Set(priority.to_string());
        }

        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date.map(|d| d.timestamp()));
        }

        if let Some(done) = update.done {
            model.done = Set(done);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("更新待办失败: {e}")))?;

        self.get_task_by_id_impl(id).await
    }

    /// 删除待办
    pub async fn delete_task_impl(&self, id: i64) -> Result<bool> {
        let result = Tasks::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| VurderingError::database_operation(format!("删除待办失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
