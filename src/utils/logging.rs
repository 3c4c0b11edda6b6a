use anyhow::Result;
/// 日志工具模块
///
/// 提供日志初始化、会话日志文件与统计输出的辅助函数
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 默认级别 info，可用 RUST_LOG 覆盖
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 初始化会话日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n听写练习日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `words_dir`: 语料根目录
/// - `difficulty`: 默认难度
pub fn log_startup(words_dir: &str, difficulty: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 单词听写练习");
    info!("📁 语料目录: {}", words_dir);
    info!("🎚️ 难度: {}", difficulty);
    info!("{}", "=".repeat(60));
}

/// 记录词条加载信息
///
/// # 参数
/// - `total`: 词条总数
/// - `scope`: 范围描述
pub fn log_words_loaded(total: usize, scope: &str) {
    info!("✓ 在范围 [{}] 内找到 {} 个单词", scope, total);
    info!("💡 输入 help 查看可用指令\n");
}

/// 打印最终统计信息
///
/// # 参数
/// - `solved`: 拼对数量
/// - `passed`: 跳过数量
/// - `total`: 总数
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(solved: usize, passed: usize, total: usize, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 本轮听写完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 拼对: {}/{}", solved, total);
    info!("⏭️ 跳过: {}", passed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("abc", 5), "abc");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        // 按字符截断而不是字节
        assert_eq!(truncate_text("苹果电脑", 2), "苹果...");
    }
}
