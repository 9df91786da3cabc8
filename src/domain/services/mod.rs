// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含墙页解析的核心业务逻辑：
/// - 文本规范化（text_normalizer）：分词与词干提取
/// - 相关性分类（relevance_classifier）：基于共享词干的关键词匹配
/// - 帖子提取（post_extractor）：从 DOM 中提取帖子、评论、图片和表情
/// - 爬取循环（crawl_loop）：逐个处理帖子并在帖子之间节流
pub mod crawl_loop;
pub mod post_extractor;
pub mod relevance_classifier;
pub mod text_normalizer;
