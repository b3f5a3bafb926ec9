pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::competence_goals::requests::CompetenceGoalQueryParams;
use crate::storage::Storage;

pub struct CompetenceGoalService {
    storage: Option<Arc<dyn Storage>>,
}

impl CompetenceGoalService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 按学科、年级列出能力目标
    pub async fn list_competence_goals(
        &self,
        request: &HttpRequest,
        query: CompetenceGoalQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_competence_goals(self, request, query).await
    }
}
