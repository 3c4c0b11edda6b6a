//! 单元文件解析器
//!
//! 支持两种磁盘格式：
//! - 传统文本：每行 `word # definition`
//! - 结构化 JSON：`{ meta: {...}, words: [...] }`（由迁移脚本产出）

use crate::models::word::{UnitDocument, WordEntry};
use std::path::Path;
use thiserror::Error;

/// 单元文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFormat {
    /// 传统文本格式（.txt）
    LegacyText,
    /// 结构化 JSON 格式（.json）
    Structured,
}

impl UnitFormat {
    /// 根据扩展名识别单元文件格式；无法识别的文件不属于语料库
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("txt") => Some(UnitFormat::LegacyText),
            Some("json") => Some(UnitFormat::Structured),
            _ => None,
        }
    }
}

/// 单元内容解析错误
///
/// 单个单元解析失败不会中断整体加载，调用方记录后跳过该单元
#[derive(Debug, Error)]
pub enum UnitParseError {
    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 解析一个单元的内容为词条列表，所有词条的来源标为 `source`
pub fn parse_unit(
    content: &str,
    format: UnitFormat,
    source: &str,
) -> Result<Vec<WordEntry>, UnitParseError> {
    match format {
        UnitFormat::LegacyText => Ok(parse_legacy(content, source)),
        UnitFormat::Structured => parse_structured(content, source),
    }
}

/// 传统格式：按行切分，首个 `#` 之前是单词、之后是释义
///
/// 空行与单词为空的行直接丢弃
fn parse_legacy(content: &str, source: &str) -> Vec<WordEntry> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let (word, definition) = match trimmed.split_once('#') {
                Some((word, rest)) => (word.trim(), rest.trim()),
                None => (trimmed, ""),
            };
            if word.is_empty() {
                return None;
            }
            Some(WordEntry::new(word, definition).with_source(source))
        })
        .collect()
}

/// 结构化格式：词条原样采用，仅覆写来源标识
fn parse_structured(content: &str, source: &str) -> Result<Vec<WordEntry>, UnitParseError> {
    let document: UnitDocument = serde_json::from_str(content)?;
    Ok(document
        .words
        .into_iter()
        .map(|mut entry| {
            entry.source = source.to_string();
            entry
        })
        .collect())
}
