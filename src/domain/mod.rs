// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 文档模型（document）：解析后的页面与帖子节点
/// - 领域模型（models）：帖子与评论
/// - 服务（services）：提取、分类和爬取循环
///
/// 领域层不依赖 HTTP 传输或 Web 框架。
pub mod document;
pub mod models;
pub mod services;
