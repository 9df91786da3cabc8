// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use encoding_rs::WINDOWS_1251;
use std::sync::Arc;
use wallscope::application::use_cases::parse_wall_use_case::ParseWallUseCase;
use wallscope::config::settings::{
    CrawlSettings, FetcherSettings, RelevanceSettings, SelectorSettings, ServerSettings, Settings,
    DEFAULT_USER_AGENT,
};
use wallscope::domain::services::crawl_loop::TokioThrottle;
use wallscope::engines::reqwest_engine::ReqwestFetcher;
use wallscope::presentation::routes;

/// 一个典型墙页：三条帖子，含图片、评论和表情
pub const WALL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="windows-1251"><title>Школа №5</title></head>
<body>
<div id="page_wall_posts">
  <div class="post" id="post-5_100">
    <div class="post_header">
      <a class="author" href="/school5">Школа №5</a>
      <span class="rel_date">сегодня в 9:00</span>
    </div>
    <div class="wall_post_text">Посадка деревьев у школы в субботу</div>
    <div class="page_post_sized_thumbs">
      <a href="/photo-5_1"></a><a href="/photo-5_2"></a>
    </div>
    <div class="wall_reply_text">Придём всем классом <img class="emoji" alt="🌳"></div>
  </div>
  <div class="post" id="post-5_99">
    <div class="post_header">
      <a class="author" href="/school5">Школа №5</a>
      <span class="rel_date">вчера в 18:30</span>
    </div>
    <div class="wall_post_text">Родительское собрание перенесено</div>
    <div class="wall_reply_text">А во сколько?</div>
  </div>
  <div class="post" id="post-5_98">
    <div class="post_header">
      <a class="author" href="/id42">Мария</a>
      <span class="rel_date">3 дня назад</span>
    </div>
    <div class="wall_post_text">Фотоотчёт</div>
    <div class="wall_reply_text">Саженцы привезут к посадке?</div>
  </div>
</div>
</body>
</html>"#;

/// 页面的 windows-1251 字节
pub fn cp1251(html: &str) -> Vec<u8> {
    let (bytes, _, _) = WINDOWS_1251.encode(html);
    bytes.into_owned()
}

pub fn test_settings(delay_ms: u64) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        fetcher: FetcherSettings {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 5,
            encoding: "windows-1251".to_string(),
            block_private_hosts: false,
        },
        crawl: CrawlSettings {
            delay_ms,
            keywords: vec![],
        },
        relevance: RelevanceSettings {
            language: "russian".to_string(),
        },
        selectors: SelectorSettings::default(),
    }
}

/// 使用真实抓取器装配完整应用
pub fn create_test_server(settings: &Settings) -> TestServer {
    let fetcher = Arc::new(ReqwestFetcher::new(&settings.fetcher).unwrap());
    let use_case = ParseWallUseCase::new(settings, fetcher, Arc::new(TokioThrottle)).unwrap();
    TestServer::new(routes::routes(Arc::new(use_case))).unwrap()
}
