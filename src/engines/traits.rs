// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// URL 无效
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// 目标地址被拒绝
    #[error("Blocked target: {0}")]
    Blocked(String),
    /// 非 2xx 响应
    #[error("Upstream responded with HTTP {0}")]
    Status(u16),
    /// 重定向次数超过上限
    #[error("Too many redirects (limit {0})")]
    TooManyRedirects(usize),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 请求失败
    #[error("Request failed: {0}")]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Request(e)
        }
    }
}

/// 抓取到的页面
///
/// 只保存原始字节，编码由调用方决定
#[derive(Debug, Clone)]
pub struct Page {
    /// 最终 URL
    pub url: String,
    /// HTTP状态码
    pub status_code: u16,
    /// 内容类型
    pub content_type: Option<String>,
    /// 未解码的响应体
    pub body: Bytes,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 页面抓取特质
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 以原始字节形式抓取页面，不重试
    async fn fetch(&self, url: &str) -> Result<Page, FetchError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
