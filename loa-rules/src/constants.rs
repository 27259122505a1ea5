//! 规则常量定义

/// 最小棋盘边长
pub const MIN_BOARD_SIZE: usize = 5;

/// 最大棋盘边长
pub const MAX_BOARD_SIZE: usize = 6;

/// 支持的棋盘边长
pub const SUPPORTED_SIZES: [usize; 2] = [MIN_BOARD_SIZE, MAX_BOARD_SIZE];

/// 5x5 初始局面图示（第 0 行在最上方）
pub const INITIAL_DIAGRAM_5: &str = "-BBB-/W---W/W---W/W---W/-BBB-";

/// 6x6 初始局面图示
pub const INITIAL_DIAGRAM_6: &str = "-BBBB-/W----W/W----W/W----W/W----W/-BBBB-";

/// 检查棋盘边长是否受支持
pub fn is_supported_size(size: usize) -> bool {
    SUPPORTED_SIZES.contains(&size)
}
