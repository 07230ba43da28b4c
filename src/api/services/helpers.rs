//! API 帮助函数

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::errors::BannerdError;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, data: T) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(data)
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, data)
}

/// 构建错误响应 `{"error": "..."}`
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    json_response(status, serde_json::json!({ "error": message }))
}

/// 从 BannerdError 构建错误响应（自动映射 HTTP 状态码）
pub fn error_from_bannerd(err: &BannerdError) -> HttpResponse {
    error_response(err.http_status(), err.message())
}
