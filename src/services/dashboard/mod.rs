pub mod contact_teacher;
pub mod principal;
pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 教师首页统计
    pub async fn get_teacher_stats(
        &self,
        request: &HttpRequest,
        user: &User,
    ) -> ActixResult<HttpResponse> {
        stats::get_teacher_stats(self, request, user).await
    }

    // 联系教师（kontaktlærer）查看本班学生
    pub async fn list_contact_students(
        &self,
        request: &HttpRequest,
        user: &User,
    ) -> ActixResult<HttpResponse> {
        contact_teacher::list_contact_students(self, request, user).await
    }

    // 校长查看全部教学班概况
    pub async fn list_class_group_overview(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        principal::list_class_group_overview(self, request).await
    }
}
