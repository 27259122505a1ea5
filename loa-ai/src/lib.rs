//! Lines of Action AI 引擎
//!
//! 包含:
//! - 难度与搜索配置
//! - 重心距离评估函数
//! - Minimax + Alpha-Beta 搜索

mod config;
mod evaluate;
mod search;

pub use config::{AiConfig, Difficulty, DistancePolicy};
pub use evaluate::Evaluator;
pub use search::{AiEngine, SearchReport, SearchStats, MAX_UTILITY, MIN_UTILITY};
