// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Selector;
use thiserror::Error;

use crate::config::settings::SelectorSettings;
use crate::domain::document::{DomNode, ParsedDocument, PostNode};
use crate::domain::models::post::{Comment, Post};

/// 提取错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Invalid selector for {name}: {selector}")]
    InvalidSelector { name: &'static str, selector: String },
}

fn compile(name: &'static str, selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|_| ExtractError::InvalidSelector {
        name,
        selector: selector.to_string(),
    })
}

/// 帖子提取器
///
/// 负责从墙页文档中提取帖子、评论、图片和表情。
/// 缺少预期的元素不算错误，对应字段取空值。
pub struct PostExtractor {
    post: Selector,
    post_text: Selector,
    author: Selector,
    date: Selector,
    thumbnail_link: Selector,
    reply_text: Selector,
    emoji: Selector,
}

impl PostExtractor {
    /// 编译配置中的选择器
    ///
    /// # 参数
    ///
    /// * `selectors` - 选择器配置
    ///
    /// # 返回值
    ///
    /// * `Ok(PostExtractor)` - 提取器
    /// * `Err(ExtractError)` - 某个选择器无法解析
    pub fn new(selectors: &SelectorSettings) -> Result<Self, ExtractError> {
        Ok(Self {
            post: compile("post", &selectors.post)?,
            post_text: compile("post_text", &selectors.post_text)?,
            author: compile("author", &selectors.author)?,
            date: compile("date", &selectors.date)?,
            thumbnail_link: compile("thumbnail_link", &selectors.thumbnail_link)?,
            reply_text: compile("reply_text", &selectors.reply_text)?,
            emoji: compile("emoji", &selectors.emoji)?,
        })
    }

    /// 按文档顺序返回帖子容器节点
    pub fn post_nodes<'a>(&self, document: &'a ParsedDocument) -> Vec<PostNode<'a>> {
        document.root().find_all(&self.post)
    }

    /// 提取文档中的全部帖子
    pub fn extract(&self, document: &ParsedDocument) -> Vec<Post> {
        self.post_nodes(document)
            .into_iter()
            .map(|node| self.extract_one(node))
            .collect()
    }

    /// 提取单个帖子容器
    ///
    /// 节点仍挂在原文档上，选择器可以引用容器外的祖先
    pub fn extract_one(&self, node: PostNode<'_>) -> Post {
        let mut post = self.extract_fields(node);
        post.id = DomNode::attr(&node, "id").unwrap_or_default();
        post
    }

    fn extract_fields<N: DomNode<Query = Selector>>(&self, root: N) -> Post {
        Post {
            id: String::new(),
            author: joined_text(&root, &self.author),
            date: joined_text(&root, &self.date),
            text: joined_text(&root, &self.post_text),
            images: root
                .find_all(&self.thumbnail_link)
                .iter()
                .map(|link| link.attr("href").unwrap_or_default())
                .collect(),
            comments: root
                .find_all(&self.reply_text)
                .iter()
                .map(|reply| self.extract_comment(reply))
                .collect(),
        }
    }

    fn extract_comment<N: DomNode<Query = Selector>>(&self, reply: &N) -> Comment {
        Comment {
            text: reply.direct_text().trim().to_string(),
            emojis: reply
                .find_all(&self.emoji)
                .iter()
                .map(|emoji| emoji.attr("alt").unwrap_or_default())
                .collect(),
        }
    }
}

/// 所有匹配节点的文本按文档顺序拼接后去除首尾空白
fn joined_text<N: DomNode<Query = Selector>>(root: &N, query: &Selector) -> String {
    root.find_all(query)
        .iter()
        .map(DomNode::text)
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "post_extractor_test.rs"]
mod tests;
