//! 走法生成和验证

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::direction::Direction;
use crate::error::MoveError;
use crate::piece::{Location, Side};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Location,
    /// 目标位置
    pub to: Location,
}

impl Move {
    /// 创建新走法
    pub const fn new(from: Location, to: Location) -> Self {
        Self { from, to }
    }

    /// 走子方向，不在同一直线上返回 None
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.from, self.to)
    }

    /// 走子步数（行差、列差中较大者）
    pub fn distance(&self) -> usize {
        let d_row = self.from.row.abs_diff(self.to.row);
        let d_col = self.from.col.abs_diff(self.to.col);
        d_row.max(d_col) as usize
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 按规则逐项检查走法，返回走子方向
    ///
    /// 检查顺序：起点在界内、起点为己方棋子、终点在界内、同一直线、
    /// 步数等于该直线棋子数、路径上无对方棋子、终点不是己方棋子。
    pub fn check(board: &Board, mv: Move, side: Side) -> Result<Direction, MoveError> {
        let piece = board
            .cell(mv.from)
            .ok_or(MoveError::OutOfBounds { location: mv.from })?;
        if !piece.is_side(side) {
            return Err(MoveError::NotOwnPiece { location: mv.from });
        }

        if !board.contains(mv.to) {
            return Err(MoveError::OutOfBounds { location: mv.to });
        }

        let direction = mv.direction().ok_or(MoveError::NotStraightLine)?;

        let expected = board.move_distance(mv.from, direction).unwrap_or(0);
        let actual = mv.distance();
        if actual != expected {
            return Err(MoveError::WrongDistance { expected, actual });
        }

        // 可以跳过己方棋子，不能跳过对方棋子
        let (d_row, d_col) = direction.delta();
        let opponent = side.opponent().cell();
        for steps in 1..actual {
            if let Some(loc) = mv.from.step(d_row, d_col, steps) {
                if board.cell(loc) == Some(opponent) {
                    return Err(MoveError::PathBlocked { location: loc });
                }
            }
        }

        if board.cell(mv.to) == Some(side.cell()) {
            return Err(MoveError::FriendlyDestination { location: mv.to });
        }

        Ok(direction)
    }

    /// 检查走法是否合法
    pub fn is_legal(board: &Board, mv: Move, side: Side) -> bool {
        Self::check(board, mv, side).is_ok()
    }

    /// 从 from 沿 direction 走规定步数得到的候选走法，终点出界返回 None
    pub fn candidate(board: &Board, from: Location, direction: Direction) -> Option<Move> {
        let distance = board.move_distance(from, direction)?;
        let (d_row, d_col) = direction.delta();
        let to = from.step(d_row, d_col, distance)?;
        board.contains(to).then_some(Move::new(from, to))
    }

    /// 生成单个棋子的所有合法走法
    pub fn generate_piece_moves(board: &Board, from: Location, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(8);
        Self::push_piece_moves(board, from, side, &mut moves);
        moves
    }

    /// 生成指定阵营的所有合法走法
    ///
    /// 顺序固定：棋子按行优先，每个棋子按 `Direction::ALL` 的顺序。
    pub fn generate_legal(board: &Board, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(32);

        for from in board.pieces(side) {
            Self::push_piece_moves(board, from, side, &mut moves);
        }

        moves
    }

    /// 是否至少有一个合法走法
    pub fn has_legal_move(board: &Board, side: Side) -> bool {
        board.pieces(side).into_iter().any(|from| {
            Direction::ALL.into_iter().any(|direction| {
                Self::candidate(board, from, direction)
                    .is_some_and(|mv| Self::is_legal(board, mv, side))
            })
        })
    }

    fn push_piece_moves(board: &Board, from: Location, side: Side, moves: &mut Vec<Move>) {
        for direction in Direction::ALL {
            if let Some(mv) = Self::candidate(board, from, direction) {
                if Self::is_legal(board, mv, side) {
                    moves.push(mv);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::Diagram;

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(Location::new(from.0, from.1), Location::new(to.0, to.1))
    }

    #[test]
    fn test_initial_moves() {
        let board = Board::new(5).unwrap();

        let black = MoveGenerator::generate_legal(&board, Side::Black);
        let white = MoveGenerator::generate_legal(&board, Side::White);
        assert_eq!(black.len(), 18);
        assert_eq!(white.len(), 18);

        // 生成顺序：行优先，再按方向顺序
        assert_eq!(black[0], mv((0, 1), (2, 1)));
        assert_eq!(black[1], mv((0, 1), (0, 4)));
        assert_eq!(black[2], mv((0, 1), (2, 3)));
        assert_eq!(black[3], mv((0, 2), (2, 2)));
    }

    #[test]
    fn test_generated_moves_are_legal() {
        for size in [5, 6] {
            let board = Board::new(size).unwrap();
            for side in [Side::Black, Side::White] {
                for m in MoveGenerator::generate_legal(&board, side) {
                    let direction = MoveGenerator::check(&board, m, side).unwrap();
                    assert_eq!(board.move_distance(m.from, direction), Some(m.distance()));
                }
            }
        }
    }

    #[test]
    fn test_lone_piece_moves() {
        let board = Diagram::parse("W----/-----/--B--/-----/-----").unwrap();
        let center = Location::new(2, 2);

        let moves = MoveGenerator::generate_piece_moves(&board, center, Side::Black);
        assert_eq!(
            moves,
            vec![
                mv((2, 2), (1, 2)),
                mv((2, 2), (3, 2)),
                mv((2, 2), (2, 1)),
                mv((2, 2), (2, 3)),
                mv((2, 2), (0, 0)),
                mv((2, 2), (4, 4)),
                mv((2, 2), (1, 3)),
                mv((2, 2), (3, 1)),
            ]
        );
        assert_eq!(MoveGenerator::generate_legal(&board, Side::Black), moves);
    }

    #[test]
    fn test_wrong_distance_every_direction() {
        let board = Diagram::parse("W----/-----/--B--/-----/-----").unwrap();
        let center = Location::new(2, 2);

        for direction in Direction::ALL {
            let expected = board.move_distance(center, direction).unwrap();
            let (d_row, d_col) = direction.delta();
            for distance in 1..=2 {
                if distance == expected {
                    continue;
                }
                let to = center.step(d_row, d_col, distance).unwrap();
                assert_eq!(
                    MoveGenerator::check(&board, Move::new(center, to), Side::Black),
                    Err(MoveError::WrongDistance {
                        expected,
                        actual: distance
                    }),
                    "direction {:?}",
                    direction
                );
            }
        }
    }

    #[test]
    fn test_capture_by_landing() {
        let board = Diagram::parse("W----/-----/--B--/-----/-----").unwrap();
        let m = mv((2, 2), (0, 0));
        assert_eq!(MoveGenerator::check(&board, m, Side::Black), Ok(Direction::UpLeft));
    }

    #[test]
    fn test_path_blocked_by_opponent() {
        let board = Diagram::parse("-----/-----/BW-W-/-----/----W").unwrap();
        assert_eq!(
            MoveGenerator::check(&board, mv((2, 0), (2, 3)), Side::Black),
            Err(MoveError::PathBlocked {
                location: Location::new(2, 1)
            })
        );
    }

    #[test]
    fn test_jump_over_friendly() {
        let board = Diagram::parse("-----/-----/BB-W-/-----/----W").unwrap();
        assert!(MoveGenerator::is_legal(&board, mv((2, 0), (2, 3)), Side::Black));
    }

    #[test]
    fn test_friendly_destination() {
        let board = Diagram::parse("-----/-----/B-B--/-----/----W").unwrap();
        assert_eq!(
            MoveGenerator::check(&board, mv((2, 0), (2, 2)), Side::Black),
            Err(MoveError::FriendlyDestination {
                location: Location::new(2, 2)
            })
        );
    }

    #[test]
    fn test_not_own_piece() {
        let board = Board::new(5).unwrap();
        // 空格
        assert_eq!(
            MoveGenerator::check(&board, mv((2, 2), (2, 4)), Side::Black),
            Err(MoveError::NotOwnPiece {
                location: Location::new(2, 2)
            })
        );
        // 对方棋子
        assert_eq!(
            MoveGenerator::check(&board, mv((1, 0), (1, 2)), Side::Black),
            Err(MoveError::NotOwnPiece {
                location: Location::new(1, 0)
            })
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new(5).unwrap();
        assert_eq!(
            MoveGenerator::check(&board, mv((5, 1), (3, 1)), Side::Black),
            Err(MoveError::OutOfBounds {
                location: Location::new(5, 1)
            })
        );
        assert_eq!(
            MoveGenerator::check(&board, mv((0, 1), (0, 5)), Side::Black),
            Err(MoveError::OutOfBounds {
                location: Location::new(0, 5)
            })
        );
    }

    #[test]
    fn test_not_straight_line() {
        let board = Board::new(5).unwrap();
        assert_eq!(
            MoveGenerator::check(&board, mv((0, 1), (2, 2)), Side::Black),
            Err(MoveError::NotStraightLine)
        );
        assert_eq!(
            MoveGenerator::check(&board, mv((0, 1), (0, 1)), Side::Black),
            Err(MoveError::NotStraightLine)
        );
    }

    #[test]
    fn test_candidate_off_board() {
        let board = Board::new(5).unwrap();
        // (0,1) 向上走 2 步会出界
        assert_eq!(MoveGenerator::candidate(&board, Location::new(0, 1), Direction::Up), None);
        assert_eq!(
            MoveGenerator::candidate(&board, Location::new(0, 1), Direction::Down),
            Some(mv((0, 1), (2, 1)))
        );
    }

    #[test]
    fn test_has_legal_move() {
        let board = Board::new(5).unwrap();
        assert!(MoveGenerator::has_legal_move(&board, Side::Black));

        // 角落的白子三个方向都被黑子挡住，其余方向出界
        let boxed = Diagram::parse("WB---/BB---/-----/-----/-----").unwrap();
        assert!(MoveGenerator::generate_legal(&boxed, Side::White).is_empty());
        assert!(!MoveGenerator::has_legal_move(&boxed, Side::White));
        assert!(MoveGenerator::has_legal_move(&boxed, Side::Black));
    }

    #[test]
    fn test_move_display() {
        assert_eq!(mv((0, 1), (2, 1)).to_string(), "(0, 1) -> (2, 1)");
        assert_eq!(mv((0, 1), (2, 3)).distance(), 2);
    }
}
