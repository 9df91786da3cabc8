// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer as Snowball};
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").unwrap());

/// 不支持的词干语言
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported stemming language: {0}")]
pub struct UnsupportedLanguage(pub String);

/// 词干提取语言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Russian,
    English,
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "russian" | "ru" => Ok(Language::Russian),
            "english" | "en" => Ok(Language::English),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

/// 词干提取器
///
/// 纯算法的后缀剥离，相同输入总是得到相同输出
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// 基于 Snowball 规则集的词干提取器
pub struct SnowballStemmer {
    inner: Snowball,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        let algorithm = match language {
            Language::Russian => Algorithm::Russian,
            Language::English => Algorithm::English,
        };
        Self {
            inner: Snowball::create(algorithm),
        }
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        self.inner.stem(word).into_owned()
    }
}

/// 分词：转小写，`ё` 归一为 `е`，按非字母数字字符切分
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase().replace('ё', "е");
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// 文本规范化器
///
/// 无状态，可在一次爬取的所有帖子间共享
#[derive(Clone)]
pub struct TextNormalizer {
    stemmer: Arc<dyn Stemmer>,
}

impl TextNormalizer {
    pub fn new(stemmer: Arc<dyn Stemmer>) -> Self {
        Self { stemmer }
    }

    /// 指定语言的 Snowball 规范化器
    pub fn for_language(language: Language) -> Self {
        Self::new(Arc::new(SnowballStemmer::new(language)))
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// 文本中所有非空词干的集合
    pub fn stems(&self, text: &str) -> HashSet<String> {
        tokenize(text)
            .iter()
            .map(|token| self.stem(token))
            .filter(|stem| !stem.is_empty())
            .collect()
    }
}
