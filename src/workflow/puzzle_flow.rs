//! 单词作答流程 - 流程层
//!
//! 核心职责：编排"一个单词"的完整作答流程
//!
//! 流程顺序：
//! 1. 出题（按难度遮蔽字母）→ 朗读单词
//! 2. 填字母 → 全部填满后进入延迟判题
//! 3. 判对 → 前进；判错 → 提示音，允许继续修改
//!
//! 判题延迟与瞄词窗口都是可取消的定时等待：流程持有世代号计数，
//! 出新题或放弃时自增，落后于当前世代的判题凭据在结算时作废，
//! 不会污染新单词的状态。

use crate::config::Config;
use crate::models::word::WordEntry;
use crate::services::AudioService;
use crate::workflow::difficulty::Difficulty;
use crate::workflow::puzzle::{CheckOutcome, CheckTicket, PuzzleState};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

/// 单词作答流程
///
/// - 编排出题、判题与提示音时机
/// - 持有世代号，保证过期定时器无副作用
/// - 不持有会话队列（那是编排层的事）
pub struct PuzzleFlow {
    audio: AudioService,
    checking_delay: Duration,
    peek_window: Duration,
    verbose_logging: bool,
    generation: u64,
}

impl PuzzleFlow {
    /// 创建新的作答流程
    pub fn new(config: &Config, audio: AudioService) -> Self {
        Self {
            audio,
            checking_delay: Duration::from_millis(config.checking_delay_ms),
            peek_window: Duration::from_millis(config.peek_window_ms),
            verbose_logging: config.verbose_logging,
            generation: 0,
        }
    }

    /// 瞄词窗口时长
    pub fn peek_window(&self) -> Duration {
        self.peek_window
    }

    /// 开始一个新单词
    ///
    /// 世代号自增，使该词之前所有未决的判题凭据失效；随后朗读单词
    pub fn begin<R: Rng + ?Sized>(
        &mut self,
        entry: WordEntry,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> PuzzleState {
        self.generation += 1;
        let state = PuzzleState::begin(entry, difficulty, rng, self.generation);
        if self.verbose_logging {
            debug!(
                "🎯 新单词: {} (长度 {}，隐藏 {} 个字母)",
                state.word(),
                state.len(),
                state.hidden_count()
            );
        }
        self.audio.speak_word(state.word());
        state
    }

    /// 再听一遍当前单词
    pub fn replay(&self, state: &PuzzleState) {
        self.audio.speak_word(state.word());
    }

    /// 放弃当前单词（换词、退回开始界面）
    ///
    /// 仅使未决的定时器失效，不触碰任何谜题状态
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// 等待配置的判题延迟后结算
    ///
    /// 等待期间世代号前进（换了单词）则凭据过期，结算为空操作；
    /// 判错时播放提示音
    pub async fn resolve_after_delay(
        &self,
        state: &mut PuzzleState,
        ticket: CheckTicket,
    ) -> Option<CheckOutcome> {
        info!("⏳ 正在检查拼写...");
        tokio::time::sleep(self.checking_delay).await;

        // 等待期间流程已经换词或放弃，定时器视为已取消
        if state.generation() != self.generation {
            debug!("判题定时器落后于当前单词，忽略");
            return None;
        }

        let outcome = state.resolve_check(ticket);
        match outcome {
            Some(CheckOutcome::Correct) => {
                info!("✅ 拼写正确: {}", state.word());
            }
            Some(CheckOutcome::Wrong) => {
                info!("❌ 拼写错误，请修改后重试");
                self.audio.play_wrong_cue();
            }
            None => {
                debug!("判题凭据已过期，忽略本次结算");
            }
        }
        outcome
    }
}
