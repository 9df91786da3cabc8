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

use crate::config::settings::FetcherSettings;
use crate::engines::traits::{FetchError, Page, PageFetcher};
use crate::engines::validators;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LOCATION};
use reqwest::redirect::Policy;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// 最多跟随的重定向次数
const MAX_REDIRECTS: usize = 10;

/// 抓取引擎
///
/// 基于reqwest实现的页面抓取引擎，响应体按原始字节读取
pub struct ReqwestFetcher {
    client: reqwest::Client,
    block_private_hosts: bool,
}

impl ReqwestFetcher {
    /// 根据抓取配置创建引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestFetcher)` - 抓取引擎
    /// * `Err(FetchError)` - HTTP 客户端构建失败
    pub fn new(settings: &FetcherSettings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
        );

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            // Redirects are followed by hand so every hop is validated
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            client,
            block_private_hosts: settings.block_private_hosts,
        })
    }

    /// 发送请求并逐跳跟随重定向
    ///
    /// 第一个 URL 由调用方校验，之后每个重定向目标都重新经过 `validate_url`
    async fn send_following_redirects(&self, url: Url) -> Result<reqwest::Response, FetchError> {
        let mut current = url;
        for _ in 0..=MAX_REDIRECTS {
            debug!("Fetching {}", current);
            let response = self.client.get(current.clone()).send().await?;
            if !response.status().is_redirection() {
                return Ok(response);
            }

            let Some(location) = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
            else {
                return Ok(response);
            };
            let next = current
                .join(location)
                .map_err(|e| FetchError::InvalidUrl(format!("bad redirect target: {}", e)))?;
            debug!("{} redirected to {}", current, next);
            current = validators::validate_url(next.as_str(), self.block_private_hosts).await?;
        }

        warn!("Gave up after {} redirects", MAX_REDIRECTS);
        Err(FetchError::TooManyRedirects(MAX_REDIRECTS))
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(Page)` - 2xx 响应的原始字节
    /// * `Err(FetchError)` - 校验失败、非 2xx 状态或传输错误
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let url = validators::validate_url(url, self.block_private_hosts).await?;

        let start = Instant::now();
        let response = self.send_following_redirects(url.clone()).await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fetching {} returned HTTP {}", url, status.as_u16());
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let final_url = response.url().to_string();

        // Bytes only: the transport must not guess the charset
        let body = response.bytes().await?;
        let response_time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "Fetched {} ({} bytes) in {} ms",
            final_url,
            body.len(),
            response_time_ms
        );

        Ok(Page {
            url: final_url,
            status_code: status.as_u16(),
            content_type,
            body,
            response_time_ms,
        })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
