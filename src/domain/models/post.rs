// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 帖子实体
///
/// 一个帖子容器提取后的结果。文本字段均已去除首尾空白，
/// `images` 与 `comments` 保持页面中的出现顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// 容器的 id 属性，缺失时为空字符串，不保证唯一
    pub id: String,
    /// 作者
    pub author: String,
    /// 相对日期，原样保留页面上的文本
    pub date: String,
    /// 帖子正文
    pub text: String,
    /// 缩略图链接
    pub images: Vec<String>,
    /// 评论
    pub comments: Vec<Comment>,
}

/// 评论实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// 评论块的直接文本节点内容，不含表情等嵌套元素的文本
    pub text: String,
    /// 表情的 alt 文本，缺失 alt 时为空字符串
    pub emojis: Vec<String>,
}

impl Post {
    /// 正文前若干个字符，用于日志
    pub fn preview(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }
}
