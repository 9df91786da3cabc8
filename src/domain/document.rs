// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// DOM 查询能力
///
/// 提取逻辑只依赖这四个操作，不关心底层 HTML 解析库
pub trait DomNode: Sized {
    /// 预编译的查询
    type Query;

    /// 按文档顺序返回匹配查询的后代节点
    fn find_all(&self, query: &Self::Query) -> Vec<Self>;

    /// 读取属性
    fn attr(&self, name: &str) -> Option<String>;

    /// 节点及其所有后代的文本
    fn text(&self) -> String;

    /// 仅直接子文本节点的文本
    fn direct_text(&self) -> String;
}

impl<'a> DomNode for ElementRef<'a> {
    type Query = Selector;

    fn find_all(&self, query: &Selector) -> Vec<Self> {
        self.select(query).collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn direct_text(&self) -> String {
        self.children()
            .filter_map(|child| child.value().as_text())
            .map(|text| &**text)
            .collect()
    }
}

/// 解析后的页面文档
///
/// 只在一次爬取中存在。底层树不是 `Send`，因此不能跨 `.await` 持有。
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// 解析解码后的 HTML 文本
    ///
    /// HTML 解析是容错的，语法错误只记录数量，不会失败
    pub fn parse(text: &str) -> Self {
        let html = Html::parse_document(text);
        if !html.errors.is_empty() {
            debug!("HTML 解析时修复了 {} 处错误", html.errors.len());
        }
        Self { html }
    }

    /// 文档根元素
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

/// 帖子节点
///
/// 文档中以一个帖子容器为根的子树，借用自 `ParsedDocument`
pub type PostNode<'a> = ElementRef<'a>;
