// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::services::post_extractor::ExtractError;
use crate::domain::services::text_normalizer::UnsupportedLanguage;
use crate::engines::traits::FetchError;
use crate::utils::text_encoding::TextEncodingError;

/// 墙页解析流程错误类型
///
/// 从抓取到提取的每一层错误都汇总到这里，由表示层决定 HTTP 状态码
#[derive(Error, Debug)]
pub enum WallError {
    #[error("URL не указан")]
    MissingInput,

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Decode failed: {0}")]
    Decode(#[from] TextEncodingError),

    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("Invalid configuration: {0}")]
    Language(#[from] UnsupportedLanguage),
}
