//! 单词谜题状态机 - 流程层
//!
//! 一个单词一次作答的全部状态：哪些位置预先揭示、用户填了什么、
//! 当前处于哪个阶段。状态流转：
//!
//! ```text
//! playing → checking → correct
//!                    → wrong → playing（答错后继续修改）
//! ```
//!
//! 延迟判题通过世代号凭据保护：换词后旧凭据一律作废

use crate::models::word::WordEntry;
use crate::workflow::difficulty::Difficulty;
use rand::seq::index;
use rand::Rng;

/// 谜题阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzlePhase {
    /// 作答中
    Playing,
    /// 判题等待中（所有格子已填满）
    Checking,
    /// 拼写正确
    Correct,
    /// 拼写错误
    Wrong,
}

/// 延迟判题凭据
///
/// 填满最后一个格子时发放，携带发放时的世代号；
/// 结算时世代号不匹配（期间换了单词）则判题作废
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket {
    generation: u64,
}

/// 判题结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Correct,
    Wrong,
}

/// 单个单词的谜题状态
#[derive(Debug, Clone)]
pub struct PuzzleState {
    entry: WordEntry,
    chars: Vec<char>,
    revealed: Vec<bool>,
    inputs: Vec<Option<char>>,
    phase: PuzzlePhase,
    generation: u64,
}

impl PuzzleState {
    /// 开始一个新单词
    ///
    /// 按难度计算隐藏数，不放回地均匀抽取隐藏位置；
    /// 其余位置预先填入真实字母且不可编辑
    pub fn begin<R: Rng + ?Sized>(
        entry: WordEntry,
        difficulty: Difficulty,
        rng: &mut R,
        generation: u64,
    ) -> Self {
        let chars: Vec<char> = entry.word.chars().collect();
        let num_hide = difficulty.num_hide(chars.len());

        let mut revealed = vec![true; chars.len()];
        for idx in index::sample(rng, chars.len(), num_hide) {
            revealed[idx] = false;
        }

        let inputs = chars
            .iter()
            .zip(&revealed)
            .map(|(&c, &shown)| if shown { Some(c) } else { None })
            .collect();

        Self {
            entry,
            chars,
            revealed,
            inputs,
            phase: PuzzlePhase::Playing,
            generation,
        }
    }

    pub fn entry(&self) -> &WordEntry {
        &self.entry
    }

    pub fn word(&self) -> &str {
        &self.entry.word
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 字母格数量
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// 该位置是否为预先揭示的不可编辑格
    pub fn is_revealed(&self, position: usize) -> bool {
        self.revealed.get(position).copied().unwrap_or(false)
    }

    /// 该位置当前填入的字母
    pub fn input(&self, position: usize) -> Option<char> {
        self.inputs.get(position).copied().flatten()
    }

    /// 隐藏（非预填）位置的数量
    pub fn hidden_count(&self) -> usize {
        self.revealed.iter().filter(|&&shown| !shown).count()
    }

    /// 写入一个字母格
    ///
    /// 多字符输入只保留最后一个字符（单字符格的编辑习惯）；
    /// 空串表示清空该格。预填格、或不在可作答阶段时为静默空操作。
    /// 答错后的任何编辑先回到作答状态再生效。
    /// 本次编辑若填满了最后一个空格，自动进入判题阶段并发放判题凭据。
    pub fn set_letter(&mut self, position: usize, text: &str) -> Option<CheckTicket> {
        if position >= self.inputs.len() || self.revealed[position] {
            return None;
        }
        if !matches!(self.phase, PuzzlePhase::Playing | PuzzlePhase::Wrong) {
            return None;
        }

        if self.phase == PuzzlePhase::Wrong {
            self.phase = PuzzlePhase::Playing;
        }

        self.inputs[position] = text.chars().last();

        if self.inputs.iter().all(|slot| slot.is_some()) {
            self.phase = PuzzlePhase::Checking;
            return Some(CheckTicket {
                generation: self.generation,
            });
        }
        None
    }

    /// 结算延迟判题
    ///
    /// 仅在判题阶段、且凭据世代号与当前一致时生效；
    /// 过期凭据（定时器落后于换词）静默忽略。
    /// 按严格的大小写敏感比较判定对错。
    pub fn resolve_check(&mut self, ticket: CheckTicket) -> Option<CheckOutcome> {
        if ticket.generation != self.generation || self.phase != PuzzlePhase::Checking {
            return None;
        }

        let assembled: String = self.inputs.iter().flatten().collect();
        if assembled == self.entry.word {
            self.phase = PuzzlePhase::Correct;
            Some(CheckOutcome::Correct)
        } else {
            self.phase = PuzzlePhase::Wrong;
            Some(CheckOutcome::Wrong)
        }
    }

    /// 瞄一眼：返回当前为空的非预填格的真实字母
    ///
    /// 只读操作，绝不写入输入状态；显示多久、何时恢复由调用方决定
    pub fn peek_letters(&self) -> Vec<(usize, char)> {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.revealed[i] && self.inputs[i].is_none())
            .map(|(i, &c)| (i, c))
            .collect()
    }

    /// 以一行文本渲染作答进度，空格显示为下划线
    pub fn display_row(&self) -> String {
        self.inputs
            .iter()
            .map(|slot| slot.unwrap_or('_').to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }
}
