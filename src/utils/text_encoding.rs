// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use encoding_rs::Encoding;
use thiserror::Error;
use tracing::{debug, warn};

/// 文本编码处理错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextEncodingError {
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("Byte sequence is not valid {0}")]
    Malformed(&'static str),
}

/// 根据标签查找编码
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, TextEncodingError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| TextEncodingError::UnknownEncoding(label.to_string()))
}

/// 将页面原始字节按指定编码解码为 Unicode 文本
///
/// 编码是固定配置的，不做探测，也不处理 BOM。
/// 单字节编码几乎总能成功，只有字节序列对该编码不合法时才返回错误。
pub fn decode_page(bytes: &[u8], label: &str) -> Result<String, TextEncodingError> {
    let encoding = resolve_encoding(label)?;
    debug!("解码页面: {} 字节, 编码 {}", bytes.len(), encoding.name());

    match encoding.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => Ok(text.into_owned()),
        None => {
            warn!("页面字节不是合法的 {}", encoding.name());
            Err(TextEncodingError::Malformed(encoding.name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1251;

    #[test]
    fn test_decode_windows_1251_cyrillic() {
        let (bytes, _, _) = WINDOWS_1251.encode("<div class=\"post\">Привет, мир</div>");

        let text = decode_page(&bytes, "windows-1251").unwrap();

        assert_eq!(text, "<div class=\"post\">Привет, мир</div>");
    }

    #[test]
    fn test_decode_does_not_treat_cp1251_as_utf8() {
        // "Пост" in cp1251
        let bytes = [0xCF, 0xEE, 0xF1, 0xF2];

        assert_eq!(decode_page(&bytes, "cp1251").unwrap(), "Пост");
        assert!(std::str::from_utf8(&bytes).is_err());
    }

    #[test]
    fn test_decode_unknown_label() {
        let err = decode_page(b"abc", "klingon-8").unwrap_err();
        assert_eq!(err, TextEncodingError::UnknownEncoding("klingon-8".to_string()));
    }

    #[test]
    fn test_decode_malformed_bytes() {
        let err = decode_page(&[0x61, 0xFF, 0xFE], "utf-8").unwrap_err();
        assert_eq!(err, TextEncodingError::Malformed("UTF-8"));
    }
}
