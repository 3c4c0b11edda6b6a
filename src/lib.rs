//! # Word Dictation
//!
//! 一个基于文件语料库的单词听写练习程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 词条、单元文档与语料结构
//! - `models/loaders/` - 单元文件解析（传统文本 / 结构化 JSON）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个能力
//! - `CorpusService` - 词书/单元扫描与词条加载能力
//! - `AudioService` - 朗读与提示音能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个单词"的完整作答流程
//! - `PuzzleState` - 单词谜题状态机（遮蔽 → 填写 → 判题）
//! - `PuzzleFlow` - 流程编排（出题 → 延迟判题 → 提示音）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/session` - 会话队列、进度与复习子会话
//! - `orchestrator/app` - 应用生命周期与交互式练习循环
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, CorpusError};
pub use models::word::{CorpusStructure, UnitDocument, UnitMeta, WordEntry};
pub use orchestrator::{App, SessionPhase, SessionState};
pub use services::{AudioService, CorpusService, WordScope, DEFAULT_BOOK};
pub use workflow::{CheckOutcome, CheckTicket, Difficulty, PuzzleFlow, PuzzlePhase, PuzzleState};
