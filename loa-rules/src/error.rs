//! 错误类型定义

use thiserror::Error;

use crate::piece::Location;

/// 走法不合法的具体原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// 起点或终点不在棋盘内
    #[error("Location {location} is off the board")]
    OutOfBounds { location: Location },

    /// 起点没有己方棋子
    #[error("No own piece at {location}")]
    NotOwnPiece { location: Location },

    /// 起点与终点不在同一直线上
    #[error("Move is not along a row, column or diagonal")]
    NotStraightLine,

    /// 步数与该直线上的棋子数不符
    #[error("Move distance must be {expected}, got {actual}")]
    WrongDistance { expected: usize, actual: usize },

    /// 路径上有对方棋子
    #[error("Path is blocked by an opposing piece at {location}")]
    PathBlocked { location: Location },

    /// 终点有己方棋子
    #[error("Destination {location} holds a friendly piece")]
    FriendlyDestination { location: Location },
}

/// 规则引擎错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// 不支持的棋盘尺寸
    #[error("Invalid board size: {size} (expected 5 or 6)")]
    InvalidBoardSize { size: usize },

    /// 无效的位置
    #[error("Invalid location: ({row}, {col})")]
    InvalidLocation { row: u8, col: u8 },

    /// 非法走法
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] MoveError),

    /// 无效的棋盘图示
    #[error("Invalid board diagram: {reason}")]
    InvalidDiagram { reason: String },

    /// 无效的走法输入
    #[error("Invalid move notation: {reason}")]
    InvalidNotation { reason: String },

    /// 不是你的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, RulesError>;
