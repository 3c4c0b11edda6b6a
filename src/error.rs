use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 语料库错误
    Corpus(CorpusError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Corpus(e) => write!(f, "语料库错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Corpus(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 语料库错误
///
/// 只有 I/O 类失败会走到这里：找不到的词书/单元一律按空结果处理，
/// 单元内容解析失败按单元隔离跳过，都不构成错误
#[derive(Debug)]
pub enum CorpusError {
    /// 语料根目录不可读
    RootUnreadable {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 读取单元文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 初始化示例语料失败
    ProvisionFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::RootUnreadable { path, source } => {
                write!(f, "无法读取语料目录 ({}): {}", path, source)
            }
            CorpusError::ReadFailed { path, source } => {
                write!(f, "读取单元文件失败 ({}): {}", path, source)
            }
            CorpusError::ProvisionFailed { path, source } => {
                write!(f, "初始化示例语料失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::RootUnreadable { source, .. }
            | CorpusError::ReadFailed { source, .. }
            | CorpusError::ProvisionFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Corpus(CorpusError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建语料根目录不可读错误
    pub fn root_unreadable(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Corpus(CorpusError::RootUnreadable {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建单元文件读取错误
    pub fn corpus_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Corpus(CorpusError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建示例语料初始化错误
    pub fn provision_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Corpus(CorpusError::ProvisionFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
