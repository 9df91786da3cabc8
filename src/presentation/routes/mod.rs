// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::parse_wall_use_case::ParseWallUseCase;
use crate::presentation::handlers::parse_handler;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `use_case` - 解析墙页用例
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(use_case: Arc<ParseWallUseCase>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let parse_routes = Router::new()
        .route("/parse", get(parse_handler::parse_wall))
        .layer(Extension(use_case));

    Router::new()
        .merge(public_routes)
        .merge(parse_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
