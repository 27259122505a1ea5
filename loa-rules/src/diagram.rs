//! 棋盘图示格式
//!
//! 每行一段，行之间用 `/` 分隔，第 0 行在最前：
//! - `B` 黑子，`W` 白子（大小写均可）
//! - `-` 或 `.` 空格
//! - 数字表示连续的空格数
//!
//! 局面格式在图示后可附带走子方：`<图示> <b|w>`，省略时为黑方。
//!
//! 示例：
//! `-BBB-/W---W/W---W/W---W/-BBB- b`

use crate::board::Board;
use crate::error::{Result, RulesError};
use crate::piece::{Cell, Location, Side};

/// 棋盘图示处理
pub struct Diagram;

impl Diagram {
    /// 解析图示为棋盘
    pub fn parse(diagram: &str) -> Result<Board> {
        let rows: Vec<&str> = diagram.trim().split('/').map(str::trim).collect();
        let size = rows.len();

        let mut board = Board::empty(size).map_err(|_| RulesError::InvalidDiagram {
            reason: format!("Expected 5 or 6 rows, got {}", size),
        })?;

        for (row_idx, row) in rows.iter().enumerate() {
            let mut col = 0usize;

            for c in row.chars() {
                if col >= size {
                    return Err(RulesError::InvalidDiagram {
                        reason: format!("Row {} has too many columns", row_idx),
                    });
                }

                if let Some(empty_count) = c.to_digit(10) {
                    col += empty_count as usize;
                } else if let Some(cell) = Cell::from_char(c) {
                    board.put(Location::new(row_idx as u8, col as u8), cell);
                    col += 1;
                } else {
                    return Err(RulesError::InvalidDiagram {
                        reason: format!("Invalid cell character: {}", c),
                    });
                }
            }

            if col != size {
                return Err(RulesError::InvalidDiagram {
                    reason: format!("Row {} has {} columns, expected {}", row_idx, col, size),
                });
            }
        }

        board.recount_all();
        Ok(board)
    }

    /// 解析带走子方的局面
    pub fn parse_position(position: &str) -> Result<(Board, Side)> {
        let parts: Vec<&str> = position.split_whitespace().collect();
        let Some(diagram) = parts.first() else {
            return Err(RulesError::InvalidDiagram {
                reason: "Empty diagram".to_string(),
            });
        };
        if parts.len() > 2 {
            return Err(RulesError::InvalidDiagram {
                reason: format!("Unexpected trailing fields: {}", parts[2..].join(" ")),
            });
        }

        let board = Self::parse(diagram)?;

        let side = match parts.get(1) {
            None => Side::Black,
            Some(field) => {
                let mut chars = field.chars();
                match (chars.next().and_then(Side::from_char), chars.next()) {
                    (Some(side), None) => side,
                    _ => {
                        return Err(RulesError::InvalidDiagram {
                            reason: format!("Invalid side to move: {}", field),
                        })
                    }
                }
            }
        };

        Ok((board, side))
    }

    /// 将棋盘转换为图示（空格统一用 `-`）
    pub fn format(board: &Board) -> String {
        let size = board.size() as u8;
        let mut rows = Vec::with_capacity(size as usize);

        for row in 0..size {
            let line: String = (0..size)
                .map(|col| {
                    board
                        .cell(Location::new(row, col))
                        .unwrap_or_default()
                        .to_char()
                })
                .collect();
            rows.push(line);
        }

        rows.join("/")
    }

    /// 将局面转换为带走子方的图示
    pub fn format_position(board: &Board, side_to_move: Side) -> String {
        format!(
            "{} {}",
            Self::format(board),
            side_to_move.to_char().to_ascii_lowercase()
        )
    }
}
