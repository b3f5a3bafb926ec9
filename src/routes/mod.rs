pub mod assessments;

pub mod class_groups;

pub mod competence_goals;

pub mod contact_teacher;

pub mod dashboard;

pub mod principal;

pub mod students;

pub mod tasks;

pub mod users;

#[cfg(test)]
mod tests;

pub use assessments::configure_assessments_routes;
pub use class_groups::configure_class_groups_routes;
pub use competence_goals::configure_competence_goals_routes;
pub use contact_teacher::configure_contact_teacher_routes;
pub use dashboard::configure_dashboard_routes;
pub use principal::configure_principal_routes;
pub use students::configure_students_routes;
pub use tasks::configure_tasks_routes;
pub use users::configure_user_routes;

use actix_web::{HttpResponse, web};

use crate::models::ErrorBody;

// 配置全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_user_routes)
        .configure(configure_students_routes)
        .configure(configure_class_groups_routes)
        .configure(configure_assessments_routes)
        .configure(configure_competence_goals_routes)
        .configure(configure_dashboard_routes)
        .configure(configure_contact_teacher_routes)
        .configure(configure_principal_routes)
        .configure(configure_tasks_routes);
}

// 未匹配的路由
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("Resource not found"))
}
