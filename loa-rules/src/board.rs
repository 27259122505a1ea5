//! 棋盘状态
//!
//! 棋盘除格子外还维护四组直线计数（行、列、主对角线、副对角线），
//! 走子步数直接读取这些计数。每次走子后，起点和终点所在的直线都会
//! 重新数一遍，而不是按增量修改。

use std::collections::VecDeque;

use crate::constants::is_supported_size;
use crate::direction::{Direction, Line};
use crate::error::{MoveError, Result, RulesError};
use crate::moves::{Move, MoveGenerator};
use crate::piece::{Cell, Location, Side};

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// 边长（5 或 6）
    size: usize,
    /// 格子，索引为 row * size + col
    cells: Vec<Cell>,
    /// 每行棋子数
    row_counts: Vec<usize>,
    /// 每列棋子数
    column_counts: Vec<usize>,
    /// 每条 `\` 对角线棋子数，索引 (N-1-row)+col
    main_diagonal_counts: Vec<usize>,
    /// 每条 `/` 对角线棋子数，索引 row+col
    counter_diagonal_counts: Vec<usize>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty(size: usize) -> Result<Self> {
        if !is_supported_size(size) {
            return Err(RulesError::InvalidBoardSize { size });
        }

        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            row_counts: vec![0; Line::Row.line_total(size)],
            column_counts: vec![0; Line::Column.line_total(size)],
            main_diagonal_counts: vec![0; Line::MainDiagonal.line_total(size)],
            counter_diagonal_counts: vec![0; Line::CounterDiagonal.line_total(size)],
        })
    }

    /// 创建初始棋盘
    ///
    /// 黑方占据第一行和最后一行（去掉两角），白方占据第一列和最后一列（去掉两角）。
    pub fn new(size: usize) -> Result<Self> {
        let mut board = Self::empty(size)?;
        let last = (size - 1) as u8;

        for i in 1..last {
            board.put(Location::new(0, i), Cell::Black);
            board.put(Location::new(last, i), Cell::Black);
            board.put(Location::new(i, 0), Cell::White);
            board.put(Location::new(i, last), Cell::White);
        }

        board.recount_all();
        Ok(board)
    }

    /// 棋盘边长
    pub fn size(&self) -> usize {
        self.size
    }

    /// 位置是否在棋盘内
    pub fn contains(&self, loc: Location) -> bool {
        (loc.row as usize) < self.size && (loc.col as usize) < self.size
    }

    /// 获取指定位置的格子，越界返回 `InvalidLocation`
    pub fn get(&self, loc: Location) -> Result<Cell> {
        self.cell(loc).ok_or(RulesError::InvalidLocation {
            row: loc.row,
            col: loc.col,
        })
    }

    /// 获取指定位置的格子，越界返回 None
    pub fn cell(&self, loc: Location) -> Option<Cell> {
        if self.contains(loc) {
            Some(self.cells[self.index(loc)])
        } else {
            None
        }
    }

    /// 按行优先顺序遍历所有位置
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let size = self.size as u8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Location::new(row, col)))
    }

    /// 获取指定阵营所有棋子的位置（行优先）
    pub fn pieces(&self, side: Side) -> Vec<Location> {
        self.locations()
            .filter(|&loc| self.cells[self.index(loc)].is_side(side))
            .collect()
    }

    /// 指定阵营的棋子数
    pub fn piece_count(&self, side: Side) -> usize {
        self.cells.iter().filter(|cell| cell.is_side(side)).count()
    }

    /// 位置所在直线的棋子数，越界返回 None
    pub fn line_count(&self, loc: Location, line: Line) -> Option<usize> {
        if !self.contains(loc) {
            return None;
        }
        Some(self.counts(line)[line.index(loc, self.size)])
    }

    /// 从 loc 沿 direction 走子时必须走的步数
    pub fn move_distance(&self, loc: Location, direction: Direction) -> Option<usize> {
        self.line_count(loc, direction.line())
    }

    /// 某类直线的全部计数
    pub fn counts(&self, line: Line) -> &[usize] {
        match line {
            Line::Row => &self.row_counts,
            Line::Column => &self.column_counts,
            Line::MainDiagonal => &self.main_diagonal_counts,
            Line::CounterDiagonal => &self.counter_diagonal_counts,
        }
    }

    fn counts_mut(&mut self, line: Line) -> &mut [usize] {
        match line {
            Line::Row => &mut self.row_counts,
            Line::Column => &mut self.column_counts,
            Line::MainDiagonal => &mut self.main_diagonal_counts,
            Line::CounterDiagonal => &mut self.counter_diagonal_counts,
        }
    }

    /// 检查走法是否合法
    pub fn is_legal(&self, mv: Move, side: Side) -> bool {
        MoveGenerator::is_legal(self, mv, side)
    }

    /// 检查走法，返回走子方向或不合法的原因
    pub fn check_move(&self, mv: Move, side: Side) -> std::result::Result<Direction, MoveError> {
        MoveGenerator::check(self, mv, side)
    }

    /// 执行走法
    ///
    /// 内部会重新验证，非法走法返回 `IllegalMove` 且棋盘不变。
    /// 成功时返回被吃掉的棋子所属阵营。
    pub fn apply(&mut self, mv: Move, side: Side) -> Result<Option<Side>> {
        MoveGenerator::check(self, mv, side)?;
        Ok(self.move_piece(mv.from, mv.to))
    }

    /// 移动棋子并重算相关直线计数（不检查规则）
    fn move_piece(&mut self, from: Location, to: Location) -> Option<Side> {
        let piece = self.cells[self.index(from)];
        let captured = self.cells[self.index(to)].side();

        self.put(to, piece);
        self.put(from, Cell::Empty);
        self.recount_lines(from);
        self.recount_lines(to);

        captured
    }

    /// 检查指定阵营的棋子是否全部八向连通
    ///
    /// 没有棋子或只有一个棋子时视为连通。
    pub fn is_connected(&self, side: Side) -> bool {
        let pieces = self.pieces(side);
        let Some(&start) = pieces.first() else {
            return true;
        };
        if pieces.len() == 1 {
            return true;
        }

        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([start]);
        visited[self.index(start)] = true;
        let mut reached = 0;

        while let Some(current) = queue.pop_front() {
            reached += 1;
            for next in current.neighbors() {
                if !self.contains(next) {
                    continue;
                }
                let idx = self.index(next);
                if !visited[idx] && self.cells[idx].is_side(side) {
                    visited[idx] = true;
                    queue.push_back(next);
                }
            }
        }

        reached == pieces.len()
    }

    /// 写入格子（不重算计数），调用方负责之后重算
    pub(crate) fn put(&mut self, loc: Location, cell: Cell) {
        let idx = self.index(loc);
        self.cells[idx] = cell;
    }

    /// 重算全部直线计数
    pub(crate) fn recount_all(&mut self) {
        for row in 0..self.size as u8 {
            for col in 0..self.size as u8 {
                self.recount_lines(Location::new(row, col));
            }
        }
    }

    /// 重算经过 loc 的四条直线
    fn recount_lines(&mut self, loc: Location) {
        for line in Line::ALL {
            let count = self.count_line(loc, line);
            let idx = line.index(loc, self.size);
            self.counts_mut(line)[idx] = count;
        }
    }

    /// 逐格数出经过 loc 的某条直线上的棋子数
    fn count_line(&self, loc: Location, line: Line) -> usize {
        let (d_row, d_col) = line.delta();

        // 先退到直线起点
        let mut start = loc;
        while let Some(prev) = start
            .offset(-d_row, -d_col)
            .filter(|&prev| self.contains(prev))
        {
            start = prev;
        }

        let mut count = 0;
        let mut current = Some(start);
        while let Some(loc) = current.filter(|&loc| self.contains(loc)) {
            if !self.cells[self.index(loc)].is_empty() {
                count += 1;
            }
            current = loc.offset(d_row, d_col);
        }
        count
    }

    fn index(&self, loc: Location) -> usize {
        loc.row as usize * self.size + loc.col as usize
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size as u8 {
            write!(f, "|")?;
            for col in 0..self.size as u8 {
                let cell = self.cells[self.index(Location::new(row, col))];
                write!(f, " {} |", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
