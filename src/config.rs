/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 语料（词书/单元）根目录
    pub words_dir: String,
    /// 听写范围：词书名（空表示全部词书）
    pub book: Option<String>,
    /// 听写范围：单元文件名（仅与词书一起生效）
    pub unit: Option<String>,
    /// 判题前的等待毫秒数
    pub checking_delay_ms: u64,
    /// 瞄词窗口毫秒数
    pub peek_window_ms: u64,
    /// 默认难度
    pub default_difficulty: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_dir: "words".to_string(),
            book: None,
            unit: None,
            checking_delay_ms: 3000,
            peek_window_ms: 1500,
            default_difficulty: "simple".to_string(),
            verbose_logging: false,
            output_log_file: "session_log.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            words_dir: std::env::var("WORDS_DIR").unwrap_or(default.words_dir),
            book: std::env::var("BOOK").ok().filter(|v| !v.is_empty()),
            unit: std::env::var("UNIT").ok().filter(|v| !v.is_empty()),
            checking_delay_ms: std::env::var("CHECKING_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.checking_delay_ms),
            peek_window_ms: std::env::var("PEEK_WINDOW_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.peek_window_ms),
            default_difficulty: std::env::var("DEFAULT_DIFFICULTY").unwrap_or(default.default_difficulty),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
