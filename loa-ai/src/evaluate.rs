//! 局面评估函数
//!
//! 棋子越向各自重心聚拢，越接近连成一片。评估值为
//! 对方的重心距离减去己方的重心距离，己方越紧凑分数越高。

use loa_rules::{Board, Location, Side};

use crate::config::DistancePolicy;

/// 距离放大倍数，保留三位小数后取整
const DISTANCE_SCALE: f64 = 1000.0;

/// 评估器
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    policy: DistancePolicy,
}

impl Evaluator {
    pub fn new(policy: DistancePolicy) -> Self {
        Self { policy }
    }

    /// 站在 machine 一方评估局面
    pub fn evaluate(&self, board: &Board, machine: Side) -> i32 {
        let own = self.center_distance(board, machine);
        let opponent = self.center_distance(board, machine.opponent());
        (opponent - own).round() as i32
    }

    /// 某方棋子到其重心的平均距离（放大 1000 倍），没有棋子时为 0
    pub fn center_distance(&self, board: &Board, side: Side) -> f64 {
        let pieces = board.pieces(side);
        let Some((center_row, center_col)) = Self::centroid(&pieces) else {
            return 0.0;
        };

        let total: f64 = pieces
            .iter()
            .map(|loc| {
                let d_row = (loc.row as f64 - center_row).abs();
                let d_col = (loc.col as f64 - center_col).abs();
                self.policy.combine(d_row, d_col)
            })
            .sum();

        total / pieces.len() as f64 * DISTANCE_SCALE
    }

    /// 棋子的重心（平均行、平均列）
    pub fn centroid(pieces: &[Location]) -> Option<(f64, f64)> {
        if pieces.is_empty() {
            return None;
        }
        let count = pieces.len() as f64;
        let row_sum: f64 = pieces.iter().map(|loc| loc.row as f64).sum();
        let col_sum: f64 = pieces.iter().map(|loc| loc.col as f64).sum();
        Some((row_sum / count, col_sum / count))
    }
}
