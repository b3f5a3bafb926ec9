pub mod detail;
pub mod list;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::users::entities::User;
use crate::storage::Storage;

/// 教学班详情中展示的最近评估条数
pub const RECENT_ASSESSMENT_LIMIT: u64 = 10;

pub struct ClassGroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassGroupService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 教师查看自己的教学班，校长查看全部
    pub async fn list_class_groups(
        &self,
        request: &HttpRequest,
        user: &User,
    ) -> ActixResult<HttpResponse> {
        list::list_class_groups(self, request, user).await
    }

    // 获取教学班详情
    pub async fn get_class_group(
        &self,
        request: &HttpRequest,
        class_group_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_class_group(self, request, class_group_id).await
    }

    // 获取教学班学生评估状态
    pub async fn get_students_status(
        &self,
        request: &HttpRequest,
        class_group_id: i64,
    ) -> ActixResult<HttpResponse> {
        status::get_students_status(self, request, class_group_id).await
    }
}
