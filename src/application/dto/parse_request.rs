// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::utils::errors::WallError;

/// 解析请求查询参数
///
/// `GET /parse?url=...&keywords=a,b`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParseQueryDto {
    /// 墙页地址
    pub url: Option<String>,
    /// 逗号分隔的关键词
    pub keywords: Option<String>,
}

/// 解析墙页的用例输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWallRequest {
    pub url: String,
    pub keywords: Option<Vec<String>>,
}

impl ParseQueryDto {
    /// 校验并转换为用例输入，缺少 url 时返回 `MissingInput`
    pub fn into_request(self) -> Result<ParseWallRequest, WallError> {
        let url = self
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(WallError::MissingInput)?;

        let keywords = self.keywords.and_then(|raw| {
            let list: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect();
            (!list.is_empty()).then_some(list)
        });

        Ok(ParseWallRequest { url, keywords })
    }
}
