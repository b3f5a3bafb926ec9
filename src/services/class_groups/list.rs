use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassGroupService;
use crate::models::class_groups::requests::ClassGroupListQuery;
use crate::models::users::entities::{User, UserRole};

pub async fn list_class_groups(
    service: &ClassGroupService,
    request: &HttpRequest,
    user: &User,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 校长可以查看全部教学班
    let query = match user.role {
        UserRole::Principal => ClassGroupListQuery::default(),
        _ => ClassGroupListQuery {
            teacher_id: Some(user.id),
        },
    };

    let class_groups = storage.list_class_groups(query).await?;

    Ok(HttpResponse::Ok().json(class_groups))
}
