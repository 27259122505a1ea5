//! Lines of Action 规则库
//!
//! 包含:
//! - 阵营、格子、位置、方向等核心数据结构
//! - 带直线计数的棋盘
//! - 走法生成和规则验证
//! - 连通判定与对局进度
//! - 棋盘图示与走法输入格式

mod board;
mod constants;
mod diagram;
mod direction;
mod error;
mod game;
mod moves;
mod notation;
mod piece;

pub use board::Board;
pub use constants::*;
pub use diagram::Diagram;
pub use direction::{Direction, Line};
pub use error::{MoveError, Result, RulesError};
pub use game::{Game, GameStatus, PlayedMove, WinReason};
pub use moves::{Move, MoveGenerator};
pub use notation::Notation;
pub use piece::{Cell, Location, Side};
