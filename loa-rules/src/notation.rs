//! 走法输入输出格式
//!
//! 格式：`<起始行> <起始列> <目标行> <目标列>`，均从 1 开始，空白分隔。
//!
//! 示例：`1 2 3 2` 表示 (0, 1) -> (2, 1)

use crate::board::Board;
use crate::error::{Result, RulesError};
use crate::moves::Move;
use crate::piece::Location;

/// 走法表示法
pub struct Notation;

impl Notation {
    /// 解析走法（不检查是否在棋盘内）
    pub fn parse_move(input: &str) -> Result<Move> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(RulesError::InvalidNotation {
                reason: format!("Expected 4 numbers, got {}", parts.len()),
            });
        }

        let mut numbers = [0u8; 4];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            let value: u8 = part.parse().map_err(|_| RulesError::InvalidNotation {
                reason: format!("Not a number: {}", part),
            })?;
            if value == 0 {
                return Err(RulesError::InvalidNotation {
                    reason: "Rows and columns start at 1".to_string(),
                });
            }
            *slot = value - 1;
        }

        Ok(Move::new(
            Location::new(numbers[0], numbers[1]),
            Location::new(numbers[2], numbers[3]),
        ))
    }

    /// 解析走法并检查起点、终点都在棋盘内
    pub fn parse_move_on(board: &Board, input: &str) -> Result<Move> {
        let mv = Self::parse_move(input)?;
        for loc in [mv.from, mv.to] {
            if !board.contains(loc) {
                return Err(RulesError::InvalidLocation {
                    row: loc.row,
                    col: loc.col,
                });
            }
        }
        Ok(mv)
    }

    /// 将走法转换为输入格式
    pub fn format_move(mv: &Move) -> String {
        format!(
            "{} {} {} {}",
            mv.from.row + 1,
            mv.from.col + 1,
            mv.to.row + 1,
            mv.to.col + 1
        )
    }
}
