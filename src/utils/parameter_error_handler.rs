//! 请求参数解析失败时的统一 400 响应

use actix_web::{
    Error, HttpRequest,
    error::{JsonPayloadError, PathError, QueryPayloadError},
};

use crate::errors::VurderingError;

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    VurderingError::validation(format!("Invalid query parameters: {err}")).into()
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    VurderingError::validation(format!("Invalid request body: {err}")).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    VurderingError::validation(format!("Invalid path parameters: {err}")).into()
}
