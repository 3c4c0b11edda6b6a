//! 语料库服务 - 业务能力层
//!
//! 把磁盘上的"词书/单元"目录树解析成扁平的词条列表：
//! - 词书 = 语料根目录下的子目录
//! - 单元 = 词书里的一个文件（传统文本或结构化 JSON）
//! - 根目录下的散装单元归入合成词书 `Default`
//!
//! 每次查询都重新扫描目录，磁盘内容就是唯一事实来源，不做缓存。
//! 找不到的词书/单元一律按空结果处理；单元解析失败按单元隔离跳过；
//! 只有根目录不可读这类 I/O 失败才作为错误向上传播。

use crate::error::{AppError, AppResult};
use crate::models::loaders::unit_loader::{self, UnitFormat};
use crate::models::word::{CorpusStructure, WordEntry};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// 合成词书名：根目录下的散装单元文件归入该书
pub const DEFAULT_BOOK: &str = "Default";

/// 首次运行时写入的示例单元
const SAMPLE_UNIT: &str = "sample.txt";
const SAMPLE_CONTENT: &str = "test # 试验；测试；检测
apple # 苹果
computer # 计算机；电脑
spelling # 拼写
challenge # 挑战
";

/// 词条加载范围：词书 + 可选的单元
///
/// `unit` 仅在指定 `book` 时生效；查询参数里也接受 `file` 作为别名
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordScope {
    #[serde(default)]
    pub book: Option<String>,
    #[serde(default, alias = "file")]
    pub unit: Option<String>,
}

impl WordScope {
    /// 全部语料
    pub fn all() -> Self {
        Self::default()
    }

    /// 某本词书的全部单元
    pub fn for_book(book: impl Into<String>) -> Self {
        Self {
            book: Some(book.into()),
            unit: None,
        }
    }

    /// 某本词书里的单个单元
    pub fn for_unit(book: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            book: Some(book.into()),
            unit: Some(unit.into()),
        }
    }
}

/// 语料库服务
///
/// 职责：
/// - 扫描词书/单元结构
/// - 按范围加载词条
/// - 首次运行时初始化示例语料
/// - 不持有任何会话状态
pub struct CorpusService {
    root: PathBuf,
}

impl CorpusService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 确保语料目录存在；不存在时创建并写入示例单元
    pub async fn ensure_root(&self) -> AppResult<()> {
        if self.root.exists() {
            return Ok(());
        }
        info!("📁 语料目录不存在，正在写入示例词书: {}", self.root.display());
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::provision_failed(self.root.display().to_string(), e))?;
        let sample_path = self.root.join(SAMPLE_UNIT);
        fs::write(&sample_path, SAMPLE_CONTENT)
            .await
            .map_err(|e| AppError::provision_failed(sample_path.display().to_string(), e))?;
        Ok(())
    }

    /// 扫描语料结构：词书 → 单元文件名列表
    ///
    /// 不含可识别单元的子目录整体省略
    pub async fn list_structure(&self) -> AppResult<CorpusStructure> {
        self.ensure_root().await?;

        let (loose, book_dirs) = self.scan_root().await?;
        let mut structure = CorpusStructure::new();

        if !loose.is_empty() {
            structure.insert(DEFAULT_BOOK.to_string(), loose);
        }
        for dir in book_dirs {
            let units = self.list_units_in(&dir).await?;
            if units.is_empty() {
                continue;
            }
            structure.insert(file_name_of(&dir), units);
        }
        Ok(structure)
    }

    /// 按范围加载词条
    ///
    /// - 不指定词书：加载全部语料
    /// - 词书为 `Default`：只加载根目录下的散装单元，从不进入子目录
    /// - 指定的词书/单元不存在：返回空列表，不报错
    pub async fn load_words(&self, scope: &WordScope) -> AppResult<Vec<WordEntry>> {
        self.ensure_root().await?;

        match (&scope.book, &scope.unit) {
            (Some(book), Some(unit)) => self.load_unit(book, unit).await,
            (Some(book), None) => self.load_book(book).await,
            // 没有词书时 unit 参数无意义，加载全部语料
            (None, _) => self.load_all().await,
        }
    }

    // ========== 范围加载 ==========

    async fn load_all(&self) -> AppResult<Vec<WordEntry>> {
        let (loose, book_dirs) = self.scan_root().await?;
        let mut words = Vec::new();

        for unit in &loose {
            let path = self.root.join(unit);
            words.extend(self.read_unit(&path, unit).await?);
        }
        for dir in &book_dirs {
            let book = file_name_of(dir);
            for unit in self.list_units_in(dir).await? {
                let path = dir.join(&unit);
                let source = format!("{}/{}", book, unit);
                words.extend(self.read_unit(&path, &source).await?);
            }
        }
        Ok(words)
    }

    async fn load_book(&self, book: &str) -> AppResult<Vec<WordEntry>> {
        if book == DEFAULT_BOOK {
            let (loose, _) = self.scan_root().await?;
            let mut words = Vec::new();
            for unit in &loose {
                let path = self.root.join(unit);
                words.extend(self.read_unit(&path, unit).await?);
            }
            return Ok(words);
        }

        let dir = match self.resolve_book_dir(book) {
            Some(dir) => dir,
            None => return Ok(Vec::new()),
        };
        if !dir.is_dir() {
            debug!("词书不存在: {}", book);
            return Ok(Vec::new());
        }

        let mut words = Vec::new();
        for unit in self.list_units_in(&dir).await? {
            let path = dir.join(&unit);
            let source = format!("{}/{}", book, unit);
            words.extend(self.read_unit(&path, &source).await?);
        }
        Ok(words)
    }

    async fn load_unit(&self, book: &str, unit: &str) -> AppResult<Vec<WordEntry>> {
        if !is_safe_segment(unit) {
            debug!("非法单元名，按未找到处理: {}", unit);
            return Ok(Vec::new());
        }
        let dir = if book == DEFAULT_BOOK {
            self.root.clone()
        } else {
            match self.resolve_book_dir(book) {
                Some(dir) => dir,
                None => return Ok(Vec::new()),
            }
        };
        let path = dir.join(unit);
        if !path.starts_with(&self.root) {
            return Ok(Vec::new());
        }
        // 指定到单元的范围下，来源直接用单元名
        self.read_unit(&path, unit).await
    }

    // ========== 目录扫描 ==========

    /// 扫描根目录一层：散装单元文件名 + 词书子目录，都按名称排序保证顺序稳定
    async fn scan_root(&self) -> AppResult<(Vec<String>, Vec<PathBuf>)> {
        let mut loose = Vec::new();
        let mut dirs = Vec::new();

        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| AppError::root_unreadable(self.root.display().to_string(), e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::root_unreadable(self.root.display().to_string(), e))?
        {
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            } else if UnitFormat::from_path(&path).is_some() {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    loose.push(name.to_string());
                }
            }
        }
        loose.sort();
        dirs.sort();
        Ok((loose, dirs))
    }

    /// 列出一个词书目录里的可识别单元文件名（排序后）
    async fn list_units_in(&self, dir: &Path) -> AppResult<Vec<String>> {
        let mut units = Vec::new();
        let mut entries = fs::read_dir(dir)
            .await
            .map_err(|e| AppError::corpus_read_failed(dir.display().to_string(), e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::corpus_read_failed(dir.display().to_string(), e))?
        {
            let path = entry.path();
            if path.is_dir() || UnitFormat::from_path(&path).is_none() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                units.push(name.to_string());
            }
        }
        units.sort();
        Ok(units)
    }

    /// 读取并解析一个单元文件
    ///
    /// 文件不存在 → 空列表；解析失败 → 记录警告后跳过该单元；
    /// 其余 I/O 失败向上传播
    async fn read_unit(&self, path: &Path, source: &str) -> AppResult<Vec<WordEntry>> {
        let format = match UnitFormat::from_path(path) {
            Some(format) => format,
            None => return Ok(Vec::new()),
        };
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("单元文件不存在: {}", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(AppError::corpus_read_failed(path.display().to_string(), e)),
        };
        match unit_loader::parse_unit(&content, format, source) {
            Ok(entries) => {
                debug!("已加载单元 {} ({} 条)", source, entries.len());
                Ok(entries)
            }
            Err(e) => {
                warn!("⚠️ 单元解析失败，已跳过 {}: {}", path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    /// 把调用方提供的词书名解析成根目录下的子目录
    ///
    /// 名称必须是单层路径段，拼接后仍须落在根目录之内；
    /// 越界一律按未找到处理
    fn resolve_book_dir(&self, book: &str) -> Option<PathBuf> {
        if !is_safe_segment(book) {
            debug!("非法词书名，按未找到处理: {}", book);
            return None;
        }
        let dir = self.root.join(book);
        if !dir.starts_with(&self.root) {
            return None;
        }
        Some(dir)
    }
}

/// 校验调用方提供的路径段：仅允许单层文件/目录名
fn is_safe_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
