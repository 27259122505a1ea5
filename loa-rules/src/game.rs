//! 对局进度
//!
//! 在棋盘之上维护走子方、走法记录和胜负状态。

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{Result, RulesError};
use crate::moves::{Move, MoveGenerator};
use crate::piece::Side;

/// 胜利原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// 所有棋子连成一片
    Connected,
    /// 对方轮到走子时无子可走
    NoLegalMoves,
}

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 进行中
    InProgress,
    /// 已结束
    GameOver { winner: Side, reason: WinReason },
}

impl GameStatus {
    /// 胜方，未结束返回 None
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::GameOver { winner, .. } => Some(*winner),
        }
    }
}

/// 走法记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    /// 走子方
    pub side: Side,
    /// 走法
    pub mv: Move,
    /// 被吃掉的棋子
    pub captured: Option<Side>,
}

/// 对局
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    status: GameStatus,
    history: Vec<PlayedMove>,
}

impl Game {
    /// 从初始局面开始新对局，黑方先走
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self::from_board(Board::new(size)?, Side::Black))
    }

    /// 从任意局面开始对局
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let status = Self::judge(&board, side_to_move);
        Self {
            board,
            side_to_move,
            status,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// 当前走子方的所有合法走法
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        MoveGenerator::generate_legal(&self.board, self.side_to_move)
    }

    /// 当前走子方走一步
    pub fn play(&mut self, mv: Move) -> Result<GameStatus> {
        if self.is_game_over() {
            return Err(RulesError::GameOver);
        }

        let side = self.side_to_move;
        let captured = match self.board.apply(mv, side) {
            Ok(captured) => captured,
            Err(e) => {
                debug!("Rejected move {} by {}: {}", mv, side, e);
                return Err(e);
            }
        };

        self.history.push(PlayedMove { side, mv, captured });
        self.side_to_move = side.opponent();
        self.status = Self::judge(&self.board, self.side_to_move);

        if let GameStatus::GameOver { winner, reason } = self.status {
            info!(
                "Game over after {} moves: {} wins ({:?})",
                self.history.len(),
                winner,
                reason
            );
        }

        Ok(self.status)
    }

    /// 以指定阵营走一步，不是该阵营的回合时返回 `NotYourTurn`
    pub fn play_as(&mut self, side: Side, mv: Move) -> Result<GameStatus> {
        if self.is_game_over() {
            return Err(RulesError::GameOver);
        }
        if side != self.side_to_move {
            debug!("Rejected move {} by {}: not on turn", mv, side);
            return Err(RulesError::NotYourTurn);
        }
        self.play(mv)
    }

    /// 判定局面胜负
    ///
    /// 刚走完的一方连通即获胜（双方同时连通也算走子方胜），
    /// 否则看对方是否连通，最后看轮到的一方是否无子可走。
    fn judge(board: &Board, side_to_move: Side) -> GameStatus {
        let mover = side_to_move.opponent();

        if board.is_connected(mover) {
            GameStatus::GameOver {
                winner: mover,
                reason: WinReason::Connected,
            }
        } else if board.is_connected(side_to_move) {
            GameStatus::GameOver {
                winner: side_to_move,
                reason: WinReason::Connected,
            }
        } else if !MoveGenerator::has_legal_move(board, side_to_move) {
            GameStatus::GameOver {
                winner: mover,
                reason: WinReason::NoLegalMoves,
            }
        } else {
            GameStatus::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::Diagram;
    use crate::error::MoveError;
    use crate::piece::Location;

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(Location::new(from.0, from.1), Location::new(to.0, to.1))
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(5).unwrap();
        assert_eq!(game.side_to_move(), Side::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.legal_moves().len(), 18);

        assert!(Game::new(7).is_err());
    }

    #[test]
    fn test_scripted_game() {
        let mut game = Game::new(5).unwrap();
        let script = [
            mv((0, 1), (2, 1)),
            mv((1, 0), (4, 0)),
            mv((0, 2), (2, 2)),
            mv((1, 4), (4, 4)),
        ];
        for m in script {
            assert_eq!(game.play(m).unwrap(), GameStatus::InProgress);
        }
        assert_eq!(game.side_to_move(), Side::Black);

        let status = game.play(mv((0, 3), (3, 0))).unwrap();
        assert_eq!(
            status,
            GameStatus::GameOver {
                winner: Side::Black,
                reason: WinReason::Connected
            }
        );
        assert_eq!(status.winner(), Some(Side::Black));
        assert_eq!(game.history().len(), 5);
        assert_eq!(game.history()[4].captured, Some(Side::White));
        assert_eq!(game.history()[1].side, Side::White);

        // 结束后不能再走
        assert_eq!(game.play(mv((2, 4), (2, 3))), Err(RulesError::GameOver));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_not_your_turn() {
        let mut game = Game::new(5).unwrap();
        assert_eq!(
            game.play_as(Side::White, mv((1, 0), (4, 0))),
            Err(RulesError::NotYourTurn)
        );
        assert!(game.play_as(Side::Black, mv((0, 1), (2, 1))).is_ok());
        assert_eq!(game.side_to_move(), Side::White);
    }

    #[test]
    fn test_illegal_move_keeps_state() {
        let mut game = Game::new(5).unwrap();
        let before = game.board().clone();

        // 白子不属于黑方
        assert_eq!(
            game.play(mv((1, 0), (1, 2))),
            Err(RulesError::IllegalMove(MoveError::NotOwnPiece {
                location: Location::new(1, 0)
            }))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.side_to_move(), Side::Black);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_mover_wins_when_both_connected() {
        let board = Diagram::parse("---W-/--W--/WBB--/-----/B----").unwrap();
        let mut game = Game::from_board(board, Side::Black);
        assert_eq!(game.status(), GameStatus::InProgress);

        // 吃掉孤立的白子后双方都连通，走子方获胜
        let status = game.play(mv((4, 0), (2, 0))).unwrap();
        assert!(game.board().is_connected(Side::White));
        assert_eq!(
            status,
            GameStatus::GameOver {
                winner: Side::Black,
                reason: WinReason::Connected
            }
        );
    }

    #[test]
    fn test_no_legal_moves_loses() {
        let board = Diagram::parse("WB---/BB---/-----/---BB/---BW").unwrap();
        let game = Game::from_board(board, Side::White);
        assert_eq!(
            game.status(),
            GameStatus::GameOver {
                winner: Side::Black,
                reason: WinReason::NoLegalMoves
            }
        );
    }

    #[test]
    fn test_status_serialization() {
        let status = GameStatus::GameOver {
            winner: Side::White,
            reason: WinReason::Connected,
        };
        let json = serde_json::to_string(&status).unwrap();
        let restored: GameStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, status);
    }
}
