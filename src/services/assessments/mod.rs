pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::{Result, VurderingError};
use crate::models::assessments::entities::Assessment;
use crate::models::assessments::requests::{
    AssessmentQueryParams, CreateAssessmentRequest, UpdateAssessmentRequest,
};
use crate::models::class_groups::entities::ClassGroup;
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct AssessmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssessmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 列出评估
    pub async fn list_assessments(
        &self,
        request: &HttpRequest,
        query: AssessmentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_assessments(self, request, query).await
    }

    // 记录评估
    pub async fn create_assessment(
        &self,
        request: &HttpRequest,
        user: &User,
        req: CreateAssessmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assessment(self, request, user, req).await
    }

    // 更新评估
    pub async fn update_assessment(
        &self,
        request: &HttpRequest,
        user: &User,
        assessment_id: i64,
        update: UpdateAssessmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assessment(self, request, user, assessment_id, update).await
    }

    // 删除评估
    pub async fn delete_assessment(
        &self,
        request: &HttpRequest,
        user: &User,
        assessment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assessment(self, request, user, assessment_id).await
    }
}

// 只有教学班的任课教师可以修改其中的评估
fn ensure_class_group_owner(class_group: &ClassGroup, user: &User) -> Result<()> {
    if class_group.teacher_id != user.id {
        return Err(VurderingError::authorization(
            "Only the class group's teacher can manage its assessments",
        ));
    }
    Ok(())
}

// 加载评估并校验当前用户是否为所属教学班的教师
async fn load_owned_assessment(
    storage: &dyn Storage,
    user: &User,
    assessment_id: i64,
) -> Result<Assessment> {
    let assessment = storage
        .get_assessment_by_id(assessment_id)
        .await?
        .ok_or_else(|| VurderingError::not_found("Assessment not found"))?;

    let class_group = storage
        .get_class_group_by_id(assessment.class_group_id)
        .await?
        .ok_or_else(|| VurderingError::not_found("Class group not found"))?;

    ensure_class_group_owner(&class_group, user)?;
    Ok(assessment)
}
