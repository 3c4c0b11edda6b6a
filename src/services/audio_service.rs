//! 发音服务 - 业务能力层
//!
//! 朗读与音效的实际播放交给外部播放器（TTS、音频设备），
//! 核心只负责在正确的时机发出指令；默认实现仅记录日志。

use tracing::info;

/// 发音与音效服务
///
/// 职责：
/// - 出题时与用户请求时朗读目标单词
/// - 答错时播放提示音
/// - 不关心播放的实现方式
pub struct AudioService {
    enabled: bool,
}

impl AudioService {
    /// 创建新的发音服务
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// 静音版本（测试用）
    pub fn muted() -> Self {
        Self { enabled: false }
    }

    /// 朗读目标单词
    pub fn speak_word(&self, word: &str) {
        if !self.enabled {
            return;
        }
        info!("🔊 朗读单词: {}", word);
    }

    /// 答错提示音
    pub fn play_wrong_cue(&self) {
        if !self.enabled {
            return;
        }
        info!("🔔 提示音: Wrong, try again");
    }
}

impl Default for AudioService {
    fn default() -> Self {
        Self::new()
    }
}
