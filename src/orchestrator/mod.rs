//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责会话生命周期与流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `session` - 练习会话
//! - 持有打乱后的单词队列（Vec<WordEntry>）
//! - 管理进度指针与跳过记录（去重）
//! - 队列耗尽后可用跳过的单词开启复习子会话
//!
//! ### `app` - 应用驱动器
//! - 管理应用生命周期（初始化、运行、统计）
//! - 展示语料结构并按范围加载词条
//! - 以终端行输入为事件流驱动逐词作答
//!
//! ## 层次关系
//!
//! ```text
//! app (处理一轮会话)
//!     ↓
//! session (处理 Vec<WordEntry>)
//!     ↓
//! workflow::PuzzleFlow (处理单个单词)
//!     ↓
//! services (能力层：corpus / audio)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：session 管队列，app 管交互
//! 2. **显式状态**：会话状态是值，由调用方持有并穿过每次操作
//! 3. **向下依赖**：编排层 → workflow → services
//! 4. **无业务逻辑**：只做调度和统计，不做拼写判定

pub mod app;
pub mod session;

// 重新导出主要类型
pub use app::App;
pub use session::{SessionPhase, SessionState};
