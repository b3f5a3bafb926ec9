pub mod detail;
pub mod list;
pub mod profile;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::requests::{ClassGroupScopeParams, StudentQueryParams};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 获取学生列表
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        query: StudentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, query).await
    }

    // 获取学生详情（可限定教学班）
    pub async fn get_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
        scope: ClassGroupScopeParams,
    ) -> ActixResult<HttpResponse> {
        detail::get_student(self, request, student_id, scope).await
    }

    // 获取学生在教学班内的能力画像
    pub async fn get_competence_profile(
        &self,
        request: &HttpRequest,
        student_id: i64,
        scope: ClassGroupScopeParams,
    ) -> ActixResult<HttpResponse> {
        profile::get_competence_profile(self, request, student_id, scope).await
    }
}
