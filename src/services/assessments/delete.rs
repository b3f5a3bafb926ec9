use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{AssessmentService, load_owned_assessment};
use crate::errors::VurderingError;
use crate::models::users::entities::User;

pub async fn delete_assessment(
    service: &AssessmentService,
    request: &HttpRequest,
    user: &User,
    assessment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    load_owned_assessment(storage.as_ref(), user, assessment_id).await?;

    if !storage.delete_assessment(assessment_id).await? {
        return Err(VurderingError::not_found("Assessment not found").into());
    }

    info!("Assessment {} deleted by user {}", assessment_id, user.id);
    Ok(HttpResponse::NoContent().finish())
}
