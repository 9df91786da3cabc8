// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

use crate::domain::models::post::Comment;
use crate::domain::services::text_normalizer::TextNormalizer;

/// 相关性分类器
///
/// 关键词在构造时规范化为词干集合，之后不再变化。
/// 只要文本与任一关键词共享一个词干即视为相关。
pub struct RelevanceClassifier {
    normalizer: TextNormalizer,
    keyword_stems: Vec<HashSet<String>>,
}

impl RelevanceClassifier {
    pub fn new<S: AsRef<str>>(normalizer: TextNormalizer, keywords: &[S]) -> Self {
        let keyword_stems = keywords
            .iter()
            .map(|keyword| normalizer.stems(keyword.as_ref()))
            .filter(|stems| !stems.is_empty())
            .collect();

        Self {
            normalizer,
            keyword_stems,
        }
    }

    /// 规范化后仍然有效的关键词数量
    pub fn keyword_count(&self) -> usize {
        self.keyword_stems.len()
    }

    /// 判断一段文本是否相关
    pub fn is_relevant(&self, text: &str) -> bool {
        if self.keyword_stems.is_empty() {
            return false;
        }
        let text_stems = self.normalizer.stems(text);
        self.keyword_stems
            .iter()
            .any(|keyword| !keyword.is_disjoint(&text_stems))
    }

    /// 判断帖子是否相关：正文相关，或按顺序任一评论相关
    pub fn is_relevant_post(&self, post_text: &str, comments: &[Comment]) -> bool {
        self.is_relevant(post_text)
            || comments
                .iter()
                .any(|comment| self.is_relevant(&comment.text))
    }
}

/// 一次性判断文本与关键词的相关性
pub fn is_relevant<S: AsRef<str>>(
    normalizer: &TextNormalizer,
    text: &str,
    keywords: &[S],
) -> bool {
    RelevanceClassifier::new(normalizer.clone(), keywords).is_relevant(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::text_normalizer::{Language, Stemmer};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn russian() -> TextNormalizer {
        TextNormalizer::for_language(Language::Russian)
    }

    fn comment(text: &str) -> Comment {
        Comment {
            text: text.to_string(),
            emojis: vec![],
        }
    }

    #[test]
    fn test_relevant_planting_text() {
        assert!(is_relevant(&russian(), "посадка деревьев у школы", &["посадка"]));
        assert!(!is_relevant(&russian(), "сегодня солнечно", &["посадка"]));
    }

    #[test]
    fn test_inflected_form_matches_keyword() {
        assert!(is_relevant(&russian(), "Приходите на посадку!", &["посадка"]));
    }

    #[test]
    fn test_any_keyword_triggers_relevance() {
        let classifier = RelevanceClassifier::new(russian(), &["субботник", "посадка"]);

        assert!(classifier.is_relevant("Посадка клёнов"));
        assert!(classifier.is_relevant("Субботник в парке"));
        assert!(!classifier.is_relevant("Концерт в пятницу"));
    }

    #[test]
    fn test_single_shared_stem_is_enough_for_multiword_keyword() {
        let classifier = RelevanceClassifier::new(russian(), &["посадка деревьев"]);
        assert!(classifier.is_relevant("Посадка цветов"));
    }

    #[test]
    fn test_comment_relevance_propagates_to_post() {
        let classifier = RelevanceClassifier::new(russian(), &["посадка"]);
        let comments = vec![comment("Когда?"), comment("Я приду на посадку")];

        assert!(classifier.is_relevant_post("Сегодня солнечно", &comments));
        assert!(!classifier.is_relevant_post("Сегодня солнечно", &comments[..1]));
    }

    #[test]
    fn test_empty_keywords_never_match() {
        let classifier = RelevanceClassifier::new(russian(), &["", "!!!"]);

        assert_eq!(classifier.keyword_count(), 0);
        assert!(!classifier.is_relevant(""));
        assert!(!classifier.is_relevant("посадка"));
    }

    struct CountingStemmer(AtomicUsize);

    impl Stemmer for CountingStemmer {
        fn stem(&self, word: &str) -> String {
            self.0.fetch_add(1, Ordering::SeqCst);
            word.to_string()
        }
    }

    #[test]
    fn test_post_check_short_circuits_on_first_relevant_comment() {
        let stemmer = Arc::new(CountingStemmer(AtomicUsize::new(0)));
        let classifier = RelevanceClassifier::new(TextNormalizer::new(stemmer.clone()), &["tree"]);
        let after_keywords = stemmer.0.load(Ordering::SeqCst);

        let comments = vec![comment("tree"), comment("never stemmed")];
        assert!(classifier.is_relevant_post("nothing", &comments));

        // "nothing" + "tree"; the last comment is never tokenized
        assert_eq!(stemmer.0.load(Ordering::SeqCst) - after_keywords, 2);
    }
}
