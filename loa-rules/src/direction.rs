//! 走子方向与直线

use serde::{Deserialize, Serialize};

use crate::piece::Location;

/// 棋盘上的直线类型，每种直线各自维护一组棋子计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// 横线（行）
    Row,
    /// 竖线（列）
    Column,
    /// 主对角线 `\`，索引为 `(N-1-row) + col`
    MainDiagonal,
    /// 副对角线 `/`，索引为 `row + col`
    CounterDiagonal,
}

impl Line {
    pub const ALL: [Line; 4] = [
        Line::Row,
        Line::Column,
        Line::MainDiagonal,
        Line::CounterDiagonal,
    ];

    /// 沿该直线前进一步的 (行, 列) 增量
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Line::Row => (0, 1),
            Line::Column => (1, 0),
            Line::MainDiagonal => (1, 1),
            Line::CounterDiagonal => (1, -1),
        }
    }

    /// 位置在该类直线计数数组中的索引
    pub fn index(self, loc: Location, size: usize) -> usize {
        let row = loc.row as usize;
        let col = loc.col as usize;
        match self {
            Line::Row => row,
            Line::Column => col,
            Line::MainDiagonal => size - 1 - row + col,
            Line::CounterDiagonal => row + col,
        }
    }

    /// 该类直线的条数
    pub const fn line_total(self, size: usize) -> usize {
        match self {
            Line::Row | Line::Column => size,
            Line::MainDiagonal | Line::CounterDiagonal => size * 2 - 1,
        }
    }
}

/// 走子方向（8 个）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// 沿主对角线向左上
    UpLeft,
    /// 沿主对角线向右下
    DownRight,
    /// 沿副对角线向右上
    UpRight,
    /// 沿副对角线向左下
    DownLeft,
}

impl Direction {
    /// 全部方向，走法生成按此顺序遍历
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::UpRight,
        Direction::DownLeft,
    ];

    /// 每步的 (行, 列) 增量
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// 该方向所在的直线类型
    pub const fn line(self) -> Line {
        match self {
            Direction::Up | Direction::Down => Line::Column,
            Direction::Left | Direction::Right => Line::Row,
            Direction::UpLeft | Direction::DownRight => Line::MainDiagonal,
            Direction::UpRight | Direction::DownLeft => Line::CounterDiagonal,
        }
    }

    /// 判断从 from 到 to 的方向
    ///
    /// 两点不在同一行、列或对角线上（或两点重合）时返回 None。
    pub fn between(from: Location, to: Location) -> Option<Direction> {
        let d_row = to.row as i16 - from.row as i16;
        let d_col = to.col as i16 - from.col as i16;

        match (d_row.signum(), d_col.signum()) {
            (0, 0) => None,
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ if d_row.abs() != d_col.abs() => None,
            (-1, -1) => Some(Direction::UpLeft),
            (1, 1) => Some(Direction::DownRight),
            (-1, 1) => Some(Direction::UpRight),
            (1, -1) => Some(Direction::DownLeft),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between_orthogonal() {
        let from = Location::new(2, 2);
        assert_eq!(Direction::between(from, Location::new(0, 2)), Some(Direction::Up));
        assert_eq!(Direction::between(from, Location::new(4, 2)), Some(Direction::Down));
        assert_eq!(Direction::between(from, Location::new(2, 0)), Some(Direction::Left));
        assert_eq!(Direction::between(from, Location::new(2, 3)), Some(Direction::Right));
    }

    #[test]
    fn test_direction_between_diagonal() {
        let from = Location::new(2, 2);
        assert_eq!(Direction::between(from, Location::new(0, 0)), Some(Direction::UpLeft));
        assert_eq!(Direction::between(from, Location::new(4, 4)), Some(Direction::DownRight));
        assert_eq!(Direction::between(from, Location::new(1, 3)), Some(Direction::UpRight));
        assert_eq!(Direction::between(from, Location::new(4, 0)), Some(Direction::DownLeft));
    }

    #[test]
    fn test_direction_between_invalid() {
        let from = Location::new(2, 2);
        // 马步
        assert_eq!(Direction::between(from, Location::new(0, 3)), None);
        assert_eq!(Direction::between(from, Location::new(3, 4)), None);
        // 原地不动
        assert_eq!(Direction::between(from, from), None);
    }

    #[test]
    fn test_delta_matches_between() {
        let from = Location::new(2, 2);
        for dir in Direction::ALL {
            let (d_row, d_col) = dir.delta();
            let to = from.offset(d_row, d_col).unwrap();
            assert_eq!(Direction::between(from, to), Some(dir));
            // 反方向落在同一条直线上
            let back = from.offset(-d_row, -d_col).unwrap();
            assert_eq!(dir.line().index(back, 5), dir.line().index(to, 5));
        }
    }

    #[test]
    fn test_line_index() {
        // 5x5：主对角线 (N-1-row)+col，副对角线 row+col
        assert_eq!(Line::MainDiagonal.index(Location::new(4, 0), 5), 0);
        assert_eq!(Line::MainDiagonal.index(Location::new(0, 4), 5), 8);
        assert_eq!(Line::MainDiagonal.index(Location::new(2, 2), 5), 4);
        assert_eq!(Line::CounterDiagonal.index(Location::new(0, 0), 5), 0);
        assert_eq!(Line::CounterDiagonal.index(Location::new(4, 4), 5), 8);
        assert_eq!(Line::MainDiagonal.line_total(6), 11);
        assert_eq!(Line::Row.line_total(6), 6);
    }

    #[test]
    fn test_line_delta_stays_on_line() {
        let loc = Location::new(2, 2);
        for line in Line::ALL {
            let (d_row, d_col) = line.delta();
            let next = loc.offset(d_row, d_col).unwrap();
            assert_eq!(line.index(loc, 5), line.index(next, 5));
        }
    }
}
