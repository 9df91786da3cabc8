// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Query, Extension, Json};
use std::sync::Arc;

use crate::application::dto::parse_request::ParseQueryDto;
use crate::application::use_cases::parse_wall_use_case::ParseWallUseCase;
use crate::domain::models::post::Post;
use crate::presentation::errors::AppError;

/// 解析墙页
///
/// `GET /parse?url=<url>[&keywords=a,b]`，成功时返回帖子数组
pub async fn parse_wall(
    Extension(use_case): Extension<Arc<ParseWallUseCase>>,
    Query(query): Query<ParseQueryDto>,
) -> Result<Json<Vec<Post>>, AppError> {
    let request = query.into_request()?;
    let report = use_case.execute(&request).await?;
    Ok(Json(report.posts))
}
