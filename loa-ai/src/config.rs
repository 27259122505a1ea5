//! AI 配置

use serde::{Deserialize, Serialize};

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：depth=5，距离取 min(行差, 列差)
    Easy,
    /// 中等：depth=7，距离取 max(行差, 列差)
    Medium,
    /// 困难：depth=7，距离取行差 + 列差
    Hard,
}

impl Difficulty {
    /// 该难度使用的距离度量
    pub fn distance_policy(&self) -> DistancePolicy {
        match self {
            Difficulty::Easy => DistancePolicy::Min,
            Difficulty::Medium => DistancePolicy::Max,
            Difficulty::Hard => DistancePolicy::Sum,
        }
    }
}

/// 棋子到重心距离的度量方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistancePolicy {
    Min,
    Max,
    Sum,
}

impl DistancePolicy {
    /// 合并行差和列差
    pub fn combine(&self, d_row: f64, d_col: f64) -> f64 {
        match self {
            DistancePolicy::Min => d_row.min(d_col),
            DistancePolicy::Max => d_row.max(d_col),
            DistancePolicy::Sum => d_row + d_col,
        }
    }
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub max_depth: u8,
    pub time_limit_ms: u64,
    /// 同分走法随机选择的种子，None 时使用系统熵
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                max_depth: 5,
                time_limit_ms: 10_000,
                seed: None,
            },
            Difficulty::Medium => Self {
                difficulty,
                max_depth: 7,
                time_limit_ms: 10_000,
                seed: None,
            },
            Difficulty::Hard => Self {
                difficulty,
                max_depth: 7,
                time_limit_ms: 10_000,
                seed: None,
            },
        }
    }

    /// 指定随机种子
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 距离度量由难度决定
    pub fn distance_policy(&self) -> DistancePolicy {
        self.difficulty.distance_policy()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}
