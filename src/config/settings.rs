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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 默认浏览器标识
///
/// 源站会拒绝默认的客户端标识，因此必须伪装成桌面浏览器
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// 应用程序配置设置
///
/// 包含服务器、页面抓取、爬取节奏、相关性过滤和 DOM 选择器等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 页面抓取配置
    pub fetcher: FetcherSettings,
    /// 爬取循环配置
    pub crawl: CrawlSettings,
    /// 相关性过滤配置
    pub relevance: RelevanceSettings,
    /// DOM 选择器配置
    pub selectors: SelectorSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 页面抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSettings {
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 页面字节编码标签
    pub encoding: String,
    /// 是否拒绝访问私有地址
    pub block_private_hosts: bool,
}

/// 爬取循环配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlSettings {
    /// 两个帖子之间的固定延迟（毫秒）
    pub delay_ms: u64,
    /// 默认关键词过滤，为空时不过滤
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// 相关性过滤配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RelevanceSettings {
    /// 词干提取语言 (russian, english)
    pub language: String,
}

/// DOM 选择器配置设置
///
/// 页面结构容易变化，所以选择器放在配置里而不是写死在代码中
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorSettings {
    /// 帖子容器
    pub post: String,
    /// 帖子正文
    pub post_text: String,
    /// 帖子作者
    pub author: String,
    /// 帖子相对日期
    pub date: String,
    /// 缩略图链接
    pub thumbnail_link: String,
    /// 评论正文
    pub reply_text: String,
    /// 表情图片
    pub emoji: String,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            post: ".post".to_string(),
            post_text: ".wall_post_text".to_string(),
            author: ".post_header .author".to_string(),
            date: ".post_header .rel_date".to_string(),
            thumbnail_link: ".page_post_sized_thumbs a".to_string(),
            reply_text: ".wall_reply_text".to_string(),
            emoji: "img.emoji".to_string(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、配置文件和环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let selectors = SelectorSettings::default();
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default fetcher settings
            .set_default("fetcher.user_agent", DEFAULT_USER_AGENT)?
            .set_default("fetcher.timeout_secs", 30)?
            .set_default("fetcher.encoding", "windows-1251")?
            .set_default("fetcher.block_private_hosts", true)?
            // Default crawl settings
            .set_default("crawl.delay_ms", 5000)?
            .set_default("crawl.keywords", Vec::<String>::new())?
            .set_default("relevance.language", "russian")?
            // Default selectors
            .set_default("selectors.post", selectors.post)?
            .set_default("selectors.post_text", selectors.post_text)?
            .set_default("selectors.author", selectors.author)?
            .set_default("selectors.date", selectors.date)?
            .set_default("selectors.thumbnail_link", selectors.thumbnail_link)?
            .set_default("selectors.reply_text", selectors.reply_text)?
            .set_default("selectors.emoji", selectors.emoji)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("WALLSCOPE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("crawl.keywords")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
