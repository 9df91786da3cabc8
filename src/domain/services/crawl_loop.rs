// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::models::post::Post;
use crate::domain::services::relevance_classifier::RelevanceClassifier;
use crate::domain::services::text_normalizer::TextNormalizer;

/// 帖子之间的节流等待
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// 基于 tokio 定时器的节流，不阻塞线程
pub struct TokioThrottle;

#[async_trait]
impl Throttle for TokioThrottle {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// 爬取选项
#[derive(Debug, Clone, Default)]
pub struct CrawlOptions {
    /// 关键词过滤，None 表示不过滤
    pub keywords: Option<Vec<String>>,
    /// 帖子之间的固定延迟
    pub delay: Duration,
}

/// 爬取状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    Idle,
    Processing(usize),
    Delaying(usize),
    Done,
}

/// 爬取结果
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// 保留的帖子，保持文档顺序
    pub posts: Vec<Post>,
    /// 页面上的帖子容器数量
    pub total_posts: usize,
    /// 被关键词过滤掉的帖子数量
    pub filtered_out: usize,
}

/// 爬取循环
///
/// 一次只处理一个帖子，相邻两个帖子之间等待固定时长。
/// 丢弃返回的 future 即取消爬取，已累积的结果随之丢弃。
pub struct CrawlLoop {
    normalizer: TextNormalizer,
    throttle: Arc<dyn Throttle>,
}

impl CrawlLoop {
    pub fn new(normalizer: TextNormalizer, throttle: Arc<dyn Throttle>) -> Self {
        Self {
            normalizer,
            throttle,
        }
    }

    /// 依次处理帖子并按需过滤
    ///
    /// # 参数
    ///
    /// * `posts` - 已提取的帖子，按文档顺序
    /// * `options` - 关键词与延迟
    ///
    /// # 返回值
    ///
    /// 保留下来的帖子及计数
    pub async fn run(&self, posts: Vec<Post>, options: &CrawlOptions) -> CrawlReport {
        let classifier = options.keywords.as_ref().map(|keywords| {
            RelevanceClassifier::new(self.normalizer.clone(), keywords.as_slice())
        });
        if let Some(classifier) = &classifier {
            debug!("Filtering with {} keyword(s)", classifier.keyword_count());
        }

        let total_posts = posts.len();
        let mut report = CrawlReport {
            total_posts,
            ..CrawlReport::default()
        };
        let mut pending = posts.into_iter();
        let mut state = CrawlState::Idle;

        loop {
            state = match state {
                CrawlState::Idle if total_posts == 0 => CrawlState::Done,
                CrawlState::Idle => CrawlState::Processing(0),
                CrawlState::Processing(i) => {
                    let Some(post) = pending.next() else {
                        break;
                    };
                    let keep = classifier
                        .as_ref()
                        .map_or(true, |c| c.is_relevant_post(&post.text, &post.comments));

                    info!(
                        "({}/{}) Post \"{}...\" processed",
                        i + 1,
                        total_posts,
                        post.preview(30)
                    );
                    if keep {
                        report.posts.push(post);
                    } else {
                        debug!("Post {} filtered out by keywords", i + 1);
                        report.filtered_out += 1;
                    }

                    if i + 1 < total_posts {
                        CrawlState::Delaying(i)
                    } else {
                        CrawlState::Done
                    }
                }
                CrawlState::Delaying(i) => {
                    self.throttle.pause(options.delay).await;
                    CrawlState::Processing(i + 1)
                }
                CrawlState::Done => break,
            };
        }

        report
    }
}

#[cfg(test)]
#[path = "crawl_loop_test.rs"]
mod tests;
