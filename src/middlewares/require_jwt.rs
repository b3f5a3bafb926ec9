/*!
 * JWT 认证中间件
 *
 * 验证 `Authorization: Bearer <token>` 中的访问令牌，并加载令牌对应的用户。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/api/students")
 *     .wrap(RequireJWT)
 *     .route("", web::get().to(list_students))
 * ```
 *
 * 处理程序中可以通过 `CurrentUser` 提取器或 `RequireJWT::extract_user` 获取当前用户。
 *
 * ## 认证流程
 *
 * 1. 提取 Bearer 令牌，使用 app_data 中的 `JwtConfig` 校验签名、过期时间和令牌类型
 * 2. 通过 `sub` 从存储中加载用户，令牌中的角色必须与存储中的角色一致
 * 3. 成功时将用户写入请求扩展，失败返回 401
 */

use crate::config::JwtConfig;
use crate::models::users::entities::User;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, error, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 认证失败原因
enum AuthFailure {
    Unauthorized(String),
    Internal(String),
}

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<User, AuthFailure> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AuthFailure::Unauthorized("Missing or invalid Authorization header".to_string())
        })?;

    let jwt_config = req
        .app_data::<web::Data<JwtConfig>>()
        .ok_or_else(|| AuthFailure::Internal("JwtConfig not found in app data".to_string()))?;

    let claims = JwtUtils::verify_access_token(jwt_config, token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        AuthFailure::Unauthorized("Invalid or expired token".to_string())
    })?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| AuthFailure::Unauthorized("Invalid user ID in token".to_string()))?;

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| AuthFailure::Internal("Storage not found in app data".to_string()))?
        .get_ref()
        .clone();

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|e| AuthFailure::Internal(format!("Failed to load user: {e}")))?
        .ok_or_else(|| AuthFailure::Unauthorized("User not found".to_string()))?;

    // 令牌角色必须与当前存储中的角色一致
    if claims.role != user.role.to_string() {
        return Err(AuthFailure::Unauthorized(
            "Token role does not match user".to_string(),
        ));
    }

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(AuthFailure::Unauthorized(reason)) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        reason
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, &reason)
                            .map_into_right_body(),
                    ))
                }
                Err(AuthFailure::Internal(reason)) => {
                    error!("JWT authentication error for {}: {}", req.path(), reason);
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireJWT {
    /// 从请求扩展中提取当前用户
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }
}
