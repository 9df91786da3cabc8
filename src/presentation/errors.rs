// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::engines::traits::FetchError;
use crate::utils::errors::WallError;

/// 应用错误类型
///
/// 把领域错误映射为 HTTP 状态码，响应体统一为 `{"error": message}`
#[derive(Debug)]
pub struct AppError(pub WallError);

impl AppError {
    /// 错误对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            WallError::MissingInput => StatusCode::BAD_REQUEST,
            WallError::Fetch(FetchError::InvalidUrl(_) | FetchError::Blocked(_)) => {
                StatusCode::BAD_REQUEST
            }
            WallError::Fetch(FetchError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            WallError::Fetch(
                FetchError::Status(_) | FetchError::TooManyRedirects(_) | FetchError::Request(_),
            ) => StatusCode::BAD_GATEWAY,
            WallError::Decode(_) | WallError::Extract(_) | WallError::Language(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!("Request failed with {}: {}", status, error_message);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<WallError> for AppError {
    fn from(err: WallError) -> Self {
        Self(err)
    }
}
