use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, CurrentUser};
use crate::models::tasks::requests::{CreateTaskRequest, UpdateTaskRequest};
use crate::services::TaskService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TASK_SERVICE 实例
static TASK_SERVICE: Lazy<TaskService> = Lazy::new(TaskService::new_lazy);

// HTTP处理程序
pub async fn list_tasks(req: HttpRequest, user: CurrentUser) -> ActixResult<HttpResponse> {
    TASK_SERVICE.list_tasks(&req, &user).await
}

pub async fn create_task(
    req: HttpRequest,
    user: CurrentUser,
    task_data: web::Json<CreateTaskRequest>,
) -> ActixResult<HttpResponse> {
    TASK_SERVICE
        .create_task(&req, &user, task_data.into_inner())
        .await
}

pub async fn update_task(
    req: HttpRequest,
    user: CurrentUser,
    task_id: SafeIDI64,
    update_data: web::Json<UpdateTaskRequest>,
) -> ActixResult<HttpResponse> {
    TASK_SERVICE
        .update_task(&req, &user, task_id.0, update_data.into_inner())
        .await
}

pub async fn delete_task(
    req: HttpRequest,
    user: CurrentUser,
    task_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    TASK_SERVICE.delete_task(&req, &user, task_id.0).await
}

// 配置路由，所有登录用户只能操作自己的待办
pub fn configure_tasks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/tasks")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_tasks))
                    .route(web::post().to(create_task)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::patch().to(update_task))
                    .route(web::delete().to(delete_task)),
            ),
    );
}
