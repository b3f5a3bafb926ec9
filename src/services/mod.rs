pub mod aggregation;
pub mod assessments;
pub mod class_groups;
pub mod competence_goals;
pub mod dashboard;
pub mod students;
pub mod tasks;
pub mod users;

pub use assessments::AssessmentService;
pub use class_groups::ClassGroupService;
pub use competence_goals::CompetenceGoalService;
pub use dashboard::DashboardService;
pub use students::StudentService;
pub use tasks::TaskService;
pub use users::UserService;

use actix_web::{HttpRequest, web};
use std::sync::Arc;

use crate::config::StatusPolicy;
use crate::errors::{Result, VurderingError};
use crate::storage::Storage;

// 从 app_data 获取存储
pub(crate) fn storage_from_request(request: &HttpRequest) -> Result<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| VurderingError::database_connection("Storage not found in app data"))
}

// 从 app_data 获取状态阈值，未注册时使用默认值
pub(crate) fn status_policy_from_request(request: &HttpRequest) -> StatusPolicy {
    request
        .app_data::<web::Data<StatusPolicy>>()
        .map(|data| data.get_ref().clone())
        .unwrap_or_default()
}
