//! 当前用户提取器

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use super::require_jwt::RequireJWT;
use crate::errors::VurderingError;
use crate::models::users::entities::User;

/// RequireJWT 写入请求扩展的用户，缺失时返回 401
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequest for CurrentUser {
    type Error = VurderingError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            RequireJWT::extract_user(req)
                .map(CurrentUser)
                .ok_or_else(|| VurderingError::authentication("Authentication required")),
        )
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
