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

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::application::dto::parse_request::ParseWallRequest;
use crate::config::settings::Settings;
use crate::domain::document::ParsedDocument;
use crate::domain::models::post::Post;
use crate::domain::services::crawl_loop::{CrawlLoop, CrawlOptions, CrawlReport, Throttle};
use crate::domain::services::post_extractor::PostExtractor;
use crate::domain::services::text_normalizer::{Language, TextNormalizer};
use crate::engines::traits::PageFetcher;
use crate::utils::errors::WallError;
use crate::utils::text_encoding::{decode_page, resolve_encoding};

/// 解析墙页用例
///
/// 抓取 → 解码 → 提取帖子 → 爬取循环。
/// 失败会以类型化错误返回，不会被转换为空结果。
pub struct ParseWallUseCase {
    fetcher: Arc<dyn PageFetcher>,
    extractor: PostExtractor,
    crawl: CrawlLoop,
    encoding: String,
    default_keywords: Vec<String>,
    delay: Duration,
}

impl ParseWallUseCase {
    /// 根据配置装配用例
    ///
    /// 选择器、编码标签和词干语言在这里校验，配置错误在启动时暴露
    pub fn new(
        settings: &Settings,
        fetcher: Arc<dyn PageFetcher>,
        throttle: Arc<dyn Throttle>,
    ) -> Result<Self, WallError> {
        resolve_encoding(&settings.fetcher.encoding)?;
        let language: Language = settings.relevance.language.parse()?;
        let extractor = PostExtractor::new(&settings.selectors)?;
        let crawl = CrawlLoop::new(TextNormalizer::for_language(language), throttle);

        Ok(Self {
            fetcher,
            extractor,
            crawl,
            encoding: settings.fetcher.encoding.clone(),
            default_keywords: settings.crawl.keywords.clone(),
            delay: Duration::from_millis(settings.crawl.delay_ms),
        })
    }

    /// 执行解析
    ///
    /// # 参数
    ///
    /// * `request` - 墙页地址和可选关键词（覆盖默认关键词）
    ///
    /// # 返回值
    ///
    /// * `Ok(CrawlReport)` - 保留的帖子与计数
    /// * `Err(WallError)` - 输入缺失、抓取或解码失败
    pub async fn execute(&self, request: &ParseWallRequest) -> Result<CrawlReport, WallError> {
        let url = request.url.trim();
        if url.is_empty() {
            return Err(WallError::MissingInput);
        }

        info!("Parsing wall {} with {}", url, self.fetcher.name());
        let page = self.fetcher.fetch(url).await.map_err(|e| {
            error!("Fetching {} failed: {}", url, e);
            WallError::from(e)
        })?;
        debug!(
            "Fetched {} with HTTP {} in {} ms",
            page.url, page.status_code, page.response_time_ms
        );
        let text = decode_page(&page.body, &self.encoding)?;
        let posts = self.extract_posts(&text);

        let options = CrawlOptions {
            keywords: self.keywords_for(request),
            delay: self.delay,
        };
        let report = self.crawl.run(posts, &options).await;

        info!(
            "Wall {} parsed: {} of {} posts kept, {} filtered out",
            page.url,
            report.posts.len(),
            report.total_posts,
            report.filtered_out
        );
        Ok(report)
    }

    // The parsed tree is not Send, so it never outlives this call
    fn extract_posts(&self, text: &str) -> Vec<Post> {
        let document = ParsedDocument::parse(text);
        self.extractor.extract(&document)
    }

    fn keywords_for(&self, request: &ParseWallRequest) -> Option<Vec<String>> {
        match &request.keywords {
            Some(keywords) if !keywords.is_empty() => Some(keywords.clone()),
            _ if !self.default_keywords.is_empty() => Some(self.default_keywords.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "parse_wall_use_case_test.rs"]
mod tests;
