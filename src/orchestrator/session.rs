//! 练习会话 - 编排层
//!
//! 管理一轮听写的单词队列、进度与跳过记录。
//! 会话状态是一个显式的值，由调用方持有并穿过每次操作，
//! 引擎本身不碰全局可变状态。

use crate::models::word::WordEntry;
use rand::seq::SliceRandom;
use rand::Rng;

/// 会话阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// 开始界面，尚未选定范围
    Start,
    /// 练习中
    Playing,
    /// 队列耗尽
    Finished,
}

/// 一轮听写会话
#[derive(Debug, Clone)]
pub struct SessionState {
    queue: Vec<WordEntry>,
    current_index: usize,
    passed_words: Vec<WordEntry>,
    phase: SessionPhase,
}

impl SessionState {
    /// 开始界面上的空会话
    pub fn idle() -> Self {
        Self {
            queue: Vec::new(),
            current_index: 0,
            passed_words: Vec::new(),
            phase: SessionPhase::Start,
        }
    }

    /// 用打乱后的词条队列开启新会话
    ///
    /// 队列在会话期间固定不变；空词表直接进入结束态
    pub fn start<R: Rng + ?Sized>(mut words: Vec<WordEntry>, rng: &mut R) -> Self {
        words.shuffle(rng);
        let phase = if words.is_empty() {
            SessionPhase::Finished
        } else {
            SessionPhase::Playing
        };
        Self {
            queue: words,
            current_index: 0,
            passed_words: Vec::new(),
            phase,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// 当前待作答的词条；非练习阶段返回 None
    pub fn current(&self) -> Option<&WordEntry> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        self.queue.get(self.current_index)
    }

    /// 进度：当前第几个 / 共几个
    pub fn progress(&self) -> (usize, usize) {
        let total = self.queue.len();
        ((self.current_index + 1).min(total), total)
    }

    /// 本轮被跳过的单词（按单词文本去重，保持跳过顺序）
    pub fn passed_words(&self) -> &[WordEntry] {
        &self.passed_words
    }

    /// 前进到下一个单词；队列耗尽则会话结束
    pub fn advance(&mut self) -> SessionPhase {
        if self.phase != SessionPhase::Playing {
            return self.phase;
        }
        self.current_index += 1;
        if self.current_index >= self.queue.len() {
            self.phase = SessionPhase::Finished;
        }
        self.phase
    }

    /// 跳过当前单词：记入跳过列表（去重）并前进
    pub fn pass(&mut self) -> SessionPhase {
        if let Some(entry) = self.current().cloned() {
            if !self.passed_words.iter().any(|w| w.word == entry.word) {
                self.passed_words.push(entry);
            }
        }
        self.advance()
    }

    /// 会话结束后，用跳过的单词开启复习子会话
    ///
    /// 复习队列就是跳过列表的一份打乱拷贝；跳过记录本身保留，
    /// 复习中再次跳过同一个单词不会产生重复。
    /// 只有在结束态且存在跳过单词时才会开启，返回是否开启成功。
    pub fn start_review<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.phase != SessionPhase::Finished || self.passed_words.is_empty() {
            return false;
        }
        self.queue = self.passed_words.clone();
        self.queue.shuffle(rng);
        self.current_index = 0;
        self.phase = SessionPhase::Playing;
        true
    }

    /// 退回开始界面：丢弃全部会话状态
    pub fn reset(&mut self) {
        self.queue.clear();
        self.passed_words.clear();
        self.current_index = 0;
        self.phase = SessionPhase::Start;
    }
}
