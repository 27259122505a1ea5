//! 棋子、阵营与位置定义

use serde::{Deserialize, Serialize};

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 黑方（先手，初始位于上下两行）
    Black,
    /// 白方（后手，初始位于左右两列）
    White,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// 该阵营棋子对应的格子值
    pub fn cell(&self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Side::Black => 'B',
            Side::White => 'W',
        }
    }

    /// 从字符解析（大小写均可）
    pub fn from_char(c: char) -> Option<Side> {
        match c {
            'b' | 'B' => Some(Side::Black),
            'w' | 'W' => Some(Side::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// 格子内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// 格子上棋子所属阵营，空格返回 None
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// 是否为指定阵营的棋子
    pub fn is_side(&self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// 获取图示字符（空格为 `-`）
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    /// 从图示字符解析
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' => Some(Cell::Empty),
            _ => Side::from_char(c).map(|side| side.cell()),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        side.cell()
    }
}

/// 棋盘位置（行、列均从 0 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// 行（0 为最上方）
    pub row: u8,
    /// 列（0 为最左侧）
    pub col: u8,
}

impl Location {
    /// 创建新位置（不检查边界，边界取决于棋盘尺寸）
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 获取偏移后的位置，坐标变为负数时返回 None
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Location> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if (0..=u8::MAX as i16).contains(&row) && (0..=u8::MAX as i16).contains(&col) {
            Some(Location::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// 沿 (d_row, d_col) 方向走 steps 步后的位置
    pub fn step(&self, d_row: i8, d_col: i8, steps: usize) -> Option<Location> {
        let steps = i16::try_from(steps).ok()?;
        let row = self.row as i16 + d_row as i16 * steps;
        let col = self.col as i16 + d_col as i16 * steps;
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Some(Location::new(row, col))
    }

    /// 周围 8 个相邻位置（越过上/左边界的被过滤掉）
    pub fn neighbors(&self) -> impl Iterator<Item = Location> + '_ {
        const OFFSETS: [(i8, i8); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        OFFSETS
            .iter()
            .filter_map(move |&(d_row, d_col)| self.offset(d_row, d_col))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
