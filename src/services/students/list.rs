use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::{StudentListQuery, StudentQueryParams};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let students = storage
        .list_students(StudentListQuery {
            grade_level: query.grade,
            home_class: None,
        })
        .await?;

    Ok(HttpResponse::Ok().json(students))
}
