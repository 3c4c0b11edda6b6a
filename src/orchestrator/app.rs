//! 应用编排 - 编排层
//!
//! 驱动一轮完整的听写：展示语料结构 → 按范围加载词条 → 打乱队列 →
//! 逐词作答 → 复习跳过的单词 → 输出统计。
//! 终端行输入充当 UI 事件流，所有状态变更都经由它串行化。

use crate::config::Config;
use crate::orchestrator::session::{SessionPhase, SessionState};
use crate::services::{AudioService, CorpusService, WordScope};
use crate::utils::logging;
use crate::workflow::difficulty::Difficulty;
use crate::workflow::puzzle::{CheckOutcome, PuzzleState};
use crate::workflow::puzzle_flow::PuzzleFlow;
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};

/// 单个单词的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordOutcome {
    /// 拼写正确
    Solved,
    /// 用户跳过
    Passed,
    /// 退出会话
    Quit,
}

/// 一轮会话的运行统计
#[derive(Debug, Default)]
struct SessionRun {
    solved: usize,
    quit: bool,
}

/// 应用主结构
pub struct App {
    config: Config,
    corpus: CorpusService,
    flow: PuzzleFlow,
    difficulty: Difficulty,
    rng: SmallRng,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化会话日志文件
        logging::init_log_file(&config.output_log_file)?;
        logging::log_startup(&config.words_dir, &config.default_difficulty);

        // 首次运行时准备示例语料
        let corpus = CorpusService::new(&config.words_dir);
        corpus.ensure_root().await?;

        let difficulty =
            Difficulty::from_str(&config.default_difficulty).unwrap_or(Difficulty::Simple);
        let flow = PuzzleFlow::new(&config, AudioService::new());

        Ok(Self {
            config,
            corpus,
            flow,
            difficulty,
            rng: SmallRng::from_entropy(),
        })
    }

    /// 运行应用主逻辑
    pub async fn run(mut self) -> Result<()> {
        // 展示语料结构
        let structure = self.corpus.list_structure().await?;
        info!("📚 语料结构:");
        for (book, units) in &structure {
            info!("  {} ({} 个单元)", book, units.len());
        }

        // 选定范围并加载词条
        let scope = WordScope {
            book: self.config.book.clone(),
            unit: self.config.unit.clone(),
        };
        let scope_label = match (&scope.book, &scope.unit) {
            (Some(book), Some(unit)) => format!("{}/{}", book, unit),
            (Some(book), None) => book.clone(),
            _ => "全部词书".to_string(),
        };
        let words = self.corpus.load_words(&scope).await?;
        if words.is_empty() {
            warn!("⚠️ 选定范围内没有找到任何单词，程序结束");
            return Ok(());
        }
        let total = words.len();
        logging::log_words_loaded(total, &scope_label);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut session = SessionState::start(words, &mut self.rng);

        let mut run = self.drive_session(&mut session, &mut lines).await?;

        // 队列走完后，用跳过的单词开启复习子会话
        if !run.quit && !session.passed_words().is_empty() {
            info!(
                "📖 有 {} 个跳过的单词，进入复习",
                session.passed_words().len()
            );
            if session.start_review(&mut self.rng) {
                let review = self.drive_session(&mut session, &mut lines).await?;
                run.solved += review.solved;
            }
        }

        let passed = session.passed_words().len();
        logging::print_final_stats(run.solved, passed, total, &self.config.output_log_file);
        Ok(())
    }

    /// 逐词驱动一轮会话直到队列耗尽或用户退出
    async fn drive_session(
        &mut self,
        session: &mut SessionState,
        lines: &mut Lines<BufReader<Stdin>>,
    ) -> Result<SessionRun> {
        let mut run = SessionRun::default();

        while let Some(entry) = session.current().cloned() {
            let (pos, total) = session.progress();
            let definition = if entry.definition.is_empty() {
                "（无释义）".to_string()
            } else {
                logging::truncate_text(&entry.definition, 80)
            };
            info!("📝 第 {}/{} 个单词 | 释义: {}", pos, total, definition);

            let mut state = self.flow.begin(entry, self.difficulty, &mut self.rng);
            match self.drive_word(&mut state, lines).await? {
                WordOutcome::Solved => {
                    run.solved += 1;
                    session.advance();
                }
                WordOutcome::Passed => {
                    session.pass();
                }
                WordOutcome::Quit => {
                    // 退出时使未决定时器失效，防止复活旧状态
                    self.flow.invalidate();
                    session.reset();
                    run.quit = true;
                    break;
                }
            }
        }
        if session.phase() == SessionPhase::Finished {
            info!("🏁 本轮队列已走完");
        }
        Ok(run)
    }

    /// 驱动单个单词直到拼对、跳过或退出
    ///
    /// 行指令：
    /// - `<位置> <字母>` 填写某一格（位置从 1 开始），`<位置> -` 清空
    /// - `say` 再听一遍 / `peek` 瞄一眼 / `redo` 重新出题
    /// - `pass` 跳过 / `quit` 退出 / `help` 指令说明
    async fn drive_word(
        &mut self,
        state: &mut PuzzleState,
        lines: &mut Lines<BufReader<Stdin>>,
    ) -> Result<WordOutcome> {
        loop {
            info!("🔤 {}", state.display_row());

            let line = match lines.next_line().await? {
                Some(line) => line,
                // 输入流关闭视为退出
                None => return Ok(WordOutcome::Quit),
            };
            let input = line.trim();

            match input {
                "" => continue,
                "quit" => return Ok(WordOutcome::Quit),
                "pass" => {
                    info!("⏭️ 已跳过: {}", state.word());
                    return Ok(WordOutcome::Passed);
                }
                "say" => {
                    self.flow.replay(state);
                    continue;
                }
                "redo" => {
                    // 同一个单词换一批遮蔽位置重新作答
                    *state = self
                        .flow
                        .begin(state.entry().clone(), self.difficulty, &mut self.rng);
                    continue;
                }
                "peek" => {
                    self.peek(state).await;
                    continue;
                }
                "help" => {
                    log_help();
                    continue;
                }
                _ => {}
            }

            let Some((pos, text)) = parse_letter_command(input) else {
                warn!("无法识别的指令: {}（输入 help 查看帮助）", input);
                continue;
            };
            if pos == 0 || pos > state.len() {
                warn!("位置 {} 超出范围 [1, {}]", pos, state.len());
                continue;
            }
            let Some(ticket) = state.set_letter(pos - 1, text) else {
                continue;
            };

            // 所有格子已填满，延迟判题
            if let Some(CheckOutcome::Correct) = self.flow.resolve_after_delay(state, ticket).await
            {
                return Ok(WordOutcome::Solved);
            }
        }
    }

    /// 瞄一眼：短暂显示空格的真实字母，窗口结束后恢复
    async fn peek(&self, state: &PuzzleState) {
        let letters = state.peek_letters();
        if letters.is_empty() {
            info!("👀 没有可瞄的空格");
            return;
        }
        let shown: Vec<String> = letters
            .iter()
            .map(|(i, c)| format!("{}={}", i + 1, c))
            .collect();
        info!("👀 瞄一眼: {}", shown.join(" "));
        tokio::time::sleep(self.flow.peek_window()).await;
        info!("👀 瞄词窗口结束");
    }
}

/// 解析 `<位置> <字母>` 填格指令；`<位置> -` 表示清空该格
fn parse_letter_command(input: &str) -> Option<(usize, &str)> {
    let (pos, rest) = input.split_once(char::is_whitespace)?;
    let pos: usize = pos.parse().ok()?;
    let rest = rest.trim();
    let text = if rest == "-" { "" } else { rest };
    Some((pos, text))
}

fn log_help() {
    info!("指令: <位置> <字母> 填格 | <位置> - 清空 | say 再听 | peek 瞄一眼 | redo 重新出题 | pass 跳过 | quit 退出");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letter_command() {
        assert_eq!(parse_letter_command("3 a"), Some((3, "a")));
        assert_eq!(parse_letter_command("1  xy"), Some((1, "xy")));
        assert_eq!(parse_letter_command("2 -"), Some((2, "")));
        assert_eq!(parse_letter_command("abc"), None);
        assert_eq!(parse_letter_command("x a"), None);
    }
}
