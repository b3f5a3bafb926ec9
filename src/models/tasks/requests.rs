use serde::Deserialize;
use ts_rs::TS;

use super::entities::TaskPriority;
use crate::models::common::nullable::deserialize_nullable;

// 创建待办请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 更新待办请求（部分更新），description / dueDate 传 null 可清空
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub due_date: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub done: Option<bool>,
}

impl UpdateTaskRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.done.is_none()
    }
}
