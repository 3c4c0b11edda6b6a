use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 语料结构：词书名 → 该书下的单元文件名列表（有序）
///
/// 合成词书 `Default` 收纳根目录下的散装单元文件
pub type CorpusStructure = BTreeMap<String, Vec<String>>;

/// 一条词条：拼写目标 + 释义 + 来源单元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// 拼写目标（区分大小写）
    pub word: String,

    /// 释义，允许为空
    #[serde(default)]
    pub definition: String,

    /// 来源单元标识（词书/单元路径），由解析器覆写
    #[serde(default)]
    pub source: String,

    /// 音标（为后续格式预留，引擎不使用但必须原样保留）
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phonetic: String,

    /// 例句（为后续格式预留）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl WordEntry {
    /// 创建仅含单词和释义的词条
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            source: String::new(),
            phonetic: String::new(),
            examples: Vec::new(),
        }
    }

    /// 设置来源单元标识
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// 结构化单元文件的元信息（磁盘键为 camelCase）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitMeta {
    #[serde(rename = "bookId", default)]
    pub book_id: String,

    #[serde(rename = "unitId", default)]
    pub unit_id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub version: String,
}

/// 结构化单元文件：`{ meta: {...}, words: [...] }`
///
/// 缺失 words 数组的记录产出零条词条
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<UnitMeta>,

    #[serde(default)]
    pub words: Vec<WordEntry>,
}
