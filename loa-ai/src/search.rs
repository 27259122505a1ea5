//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝：机器方走子的 max 节点与对手走子的
//! min 节点互相递归，到达深度限制或超时后使用静态评估。

use std::time::{Duration, Instant};

use loa_rules::{Board, Move, MoveGenerator, Side};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{AiConfig, Difficulty};
use crate::evaluate::Evaluator;

/// 机器方获胜的分值，高于任何评估值
pub const MAX_UTILITY: i32 = 100_000;
/// 对手获胜的分值
pub const MIN_UTILITY: i32 = -100_000;

/// 根节点的初始窗口，比胜负分值再宽一点
const NEG_INFINITY: i32 = MIN_UTILITY - 1;
const POS_INFINITY: i32 = MAX_UTILITY + 1;

/// 搜索统计，每次搜索从零开始
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// 访问的节点数
    pub nodes: u64,
    /// max 节点的静态评估次数
    pub max_evaluations: u64,
    /// min 节点的静态评估次数
    pub min_evaluations: u64,
    /// max 节点的剪枝次数
    pub max_prunings: u64,
    /// min 节点的剪枝次数
    pub min_prunings: u64,
    /// 到达的最大深度
    pub deepest_depth: u8,
    /// 根节点的合法走法数
    pub root_moves: usize,
    /// 耗时
    pub elapsed: Duration,
}

/// 一次搜索的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// 选中的走法，机器方无子可走时为 None
    pub best_move: Option<Move>,
    /// 根节点的分值
    pub value: Option<i32>,
    /// 是否走了一步即胜的走法
    pub immediate_win: bool,
    pub stats: SearchStats,
}

/// 单次搜索的上下文
struct SearchContext {
    machine: Side,
    depth_limit: u8,
    started: Instant,
    /// 截止时间，时间限制过大无法表示时为 None
    deadline: Option<Instant>,
    deadline_hit: bool,
    /// 根节点每个走法的分值，按走法生成顺序
    root_values: Vec<(Move, i32)>,
    stats: SearchStats,
}

impl SearchContext {
    fn new(machine: Side, depth_limit: u8, time_limit_ms: u64) -> Self {
        let started = Instant::now();
        Self {
            machine,
            depth_limit: depth_limit.max(1),
            started,
            deadline: started.checked_add(Duration::from_millis(time_limit_ms)),
            deadline_hit: false,
            root_values: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    fn visit(&mut self, depth: u8) {
        self.stats.nodes += 1;
        self.stats.deepest_depth = self.stats.deepest_depth.max(depth);
    }

    /// 是否需要在该深度停止展开（根节点总是展开）
    fn cutoff(&mut self, depth: u8) -> bool {
        if depth == 0 {
            return false;
        }
        depth >= self.depth_limit || self.out_of_time()
    }

    fn out_of_time(&mut self) -> bool {
        if self.deadline_hit {
            return true;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                debug!(
                    "Search deadline reached after {} nodes",
                    self.stats.nodes
                );
                self.deadline_hit = true;
                true
            }
            _ => false,
        }
    }

    fn finish(mut self, best_move: Option<Move>, value: Option<i32>, immediate_win: bool) -> SearchReport {
        self.stats.elapsed = self.started.elapsed();
        SearchReport {
            best_move,
            value,
            immediate_win,
            stats: self.stats,
        }
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    evaluator: Evaluator,
    /// 机器方执子颜色
    machine: Side,
    /// 同分走法的随机选择
    rng: ChaCha8Rng,
    last_stats: Option<SearchStats>,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig, machine: Side) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            evaluator: Evaluator::new(config.distance_policy()),
            config,
            machine,
            rng,
            last_stats: None,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty, machine: Side) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty), machine)
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn machine(&self) -> Side {
        self.machine
    }

    /// 按配置的深度和时间限制搜索最佳走法
    pub fn search(&mut self, board: &Board) -> Option<Move> {
        self.search_report(board).best_move
    }

    /// 按指定的深度和时间限制搜索最佳走法
    ///
    /// 深度限制小于 1 时按 1 处理。机器方没有合法走法时返回 None。
    pub fn choose_move(&mut self, board: &Board, depth_limit: u8, time_limit_ms: u64) -> Option<Move> {
        self.search_with_limits(board, depth_limit, time_limit_ms)
            .best_move
    }

    /// 按配置搜索并返回完整结果
    pub fn search_report(&mut self, board: &Board) -> SearchReport {
        self.search_with_limits(board, self.config.max_depth, self.config.time_limit_ms)
    }

    /// 按指定限制搜索并返回完整结果
    pub fn search_with_limits(&mut self, board: &Board, depth_limit: u8, time_limit_ms: u64) -> SearchReport {
        let mut ctx = SearchContext::new(self.machine, depth_limit, time_limit_ms);

        let moves = MoveGenerator::generate_legal(board, self.machine);
        ctx.stats.root_moves = moves.len();
        if moves.is_empty() {
            debug!("{} has no legal moves", self.machine);
            return self.record(ctx.finish(None, None, false));
        }

        // 一步即胜的走法直接返回
        if let Some(mv) = self.immediate_win(board, &moves) {
            debug!("Immediate win for {}: {}", self.machine, mv);
            return self.record(ctx.finish(Some(mv), Some(MAX_UTILITY), true));
        }

        let value = self.max_value(&mut ctx, board, NEG_INFINITY, POS_INFINITY, 0);

        let candidates: Vec<Move> = ctx
            .root_values
            .iter()
            .filter(|(_, v)| *v == value)
            .map(|(mv, _)| *mv)
            .collect();

        // 根节点已是终局时没有记录任何分值，退回第一个合法走法
        let best_move = candidates
            .choose(&mut self.rng)
            .copied()
            .or_else(|| moves.first().copied());

        self.record(ctx.finish(best_move, Some(value), false))
    }

    /// 最近一次搜索的统计
    pub fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }

    /// 最近一次搜索访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.last_stats.as_ref().map_or(0, |stats| stats.nodes)
    }

    fn record(&mut self, report: SearchReport) -> SearchReport {
        let stats = &report.stats;
        debug!(
            "Search stats: nodes={}, evals={}/{}, prunings={}/{}, depth={}, root_moves={}, elapsed={:?}",
            stats.nodes,
            stats.max_evaluations,
            stats.min_evaluations,
            stats.max_prunings,
            stats.min_prunings,
            stats.deepest_depth,
            stats.root_moves,
            stats.elapsed
        );
        if let Some(mv) = report.best_move {
            info!(
                "{} AI chose {} (value {:?})",
                self.machine, mv, report.value
            );
        }
        self.last_stats = Some(report.stats.clone());
        report
    }

    /// 按生成顺序找第一个走完即连通的走法
    fn immediate_win(&self, board: &Board, moves: &[Move]) -> Option<Move> {
        moves.iter().copied().find(|&mv| {
            let mut child = board.clone();
            child.apply(mv, self.machine).is_ok() && child.is_connected(self.machine)
        })
    }

    /// 终局分值：机器方连通优先于对手连通
    fn terminal_value(board: &Board, machine: Side) -> Option<i32> {
        if board.is_connected(machine) {
            Some(MAX_UTILITY)
        } else if board.is_connected(machine.opponent()) {
            Some(MIN_UTILITY)
        } else {
            None
        }
    }

    /// 机器方走子
    fn max_value(&self, ctx: &mut SearchContext, board: &Board, mut alpha: i32, beta: i32, depth: u8) -> i32 {
        ctx.visit(depth);

        if let Some(value) = Self::terminal_value(board, ctx.machine) {
            return value;
        }

        if ctx.cutoff(depth) {
            ctx.stats.max_evaluations += 1;
            return self.evaluator.evaluate(board, ctx.machine);
        }

        let moves = MoveGenerator::generate_legal(board, ctx.machine);
        // 无子可走判负
        if moves.is_empty() {
            return MIN_UTILITY;
        }

        // 根节点的子节点用放宽一分的下界，与最佳值相同的走法都能得到精确分值
        let child_alpha = |alpha: i32| if depth == 0 { alpha.saturating_sub(1) } else { alpha };

        let mut best = MIN_UTILITY;
        for mv in moves {
            let mut child = board.clone();
            if child.apply(mv, ctx.machine).is_err() {
                continue;
            }

            let value = self.min_value(ctx, &child, child_alpha(alpha), beta, depth + 1);
            if depth == 0 {
                ctx.root_values.push((mv, value));
            }

            best = best.max(value);
            if best >= beta {
                ctx.stats.max_prunings += 1;
                return best;
            }
            alpha = alpha.max(best);
        }

        best
    }

    /// 对手走子
    fn min_value(&self, ctx: &mut SearchContext, board: &Board, alpha: i32, mut beta: i32, depth: u8) -> i32 {
        ctx.visit(depth);

        if let Some(value) = Self::terminal_value(board, ctx.machine) {
            return value;
        }

        if ctx.cutoff(depth) {
            ctx.stats.min_evaluations += 1;
            return self.evaluator.evaluate(board, ctx.machine);
        }

        let opponent = ctx.machine.opponent();
        let moves = MoveGenerator::generate_legal(board, opponent);
        if moves.is_empty() {
            return MAX_UTILITY;
        }

        let mut best = MAX_UTILITY;
        for mv in moves {
            let mut child = board.clone();
            if child.apply(mv, opponent).is_err() {
                continue;
            }

            let value = self.max_value(ctx, &child, alpha, beta, depth + 1);

            best = best.min(value);
            if best <= alpha {
                ctx.stats.min_prunings += 1;
                return best;
            }
            beta = beta.min(best);
        }

        best
    }
}
