//! AI 引擎模块
//!
//! 提供 Minimax / Alpha-Beta 搜索引擎及搜索统计

mod eval;
mod search;

pub use eval::{evaluate, evaluate_detail, EvalDetail, WIN_SCORE};
pub use search::{Algorithm, ScoredMove, AVAILABLE_ALGORITHMS};

use crate::error::GameError;
use crate::state::GameState;
use crate::types::Move;
use serde::Serialize;
use std::time::Instant;

/// 默认搜索深度
pub const DEFAULT_DEPTH: u32 = 6;

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIConfig {
    /// 搜索深度（层数）
    pub depth: u32,
    /// 搜索算法
    pub algorithm: Algorithm,
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            depth: DEFAULT_DEPTH,
            algorithm: Algorithm::Minimax,
        }
    }
}

/// 搜索统计
///
/// `last_*` 记录最近一次选步，`total_*` / `moves` 为整局累计，需在对局之间显式重置。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub last_nodes: u64,
    pub last_time_ms: u64,
    pub last_score: Option<i32>,
    pub total_nodes: u64,
    pub total_time_ms: u64,
    pub moves: u32,
}

impl SearchStats {
    /// 本局平均每步耗时（毫秒）
    pub fn average_time_ms(&self) -> u64 {
        if self.moves == 0 {
            0
        } else {
            self.total_time_ms / u64::from(self.moves)
        }
    }
}

/// AI 引擎
///
/// 统计数据挂在引擎实例上；`&mut self` 保证同一实例不会被并发搜索。
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: AIConfig,
    stats: SearchStats,
}

impl AIEngine {
    pub fn new(config: AIConfig) -> Self {
        AIEngine {
            config,
            stats: SearchStats::default(),
        }
    }

    /// 创建 Minimax 引擎
    pub fn minimax(depth: u32) -> Self {
        Self::new(AIConfig {
            depth,
            algorithm: Algorithm::Minimax,
        })
    }

    /// 创建 Alpha-Beta 引擎
    pub fn alpha_beta(depth: u32) -> Self {
        Self::new(AIConfig {
            depth,
            algorithm: Algorithm::AlphaBeta,
        })
    }

    /// 从算法名称创建
    pub fn from_algorithm(name: &str, depth: u32) -> Result<Self, GameError> {
        let algorithm = Algorithm::from_name(name)?;
        Ok(Self::new(AIConfig { depth, algorithm }))
    }

    pub fn config(&self) -> &AIConfig {
        &self.config
    }

    /// 按引擎配置选择最佳走法
    pub fn select_best_move(&mut self, state: &GameState) -> Option<Move> {
        let AIConfig { depth, algorithm } = self.config;
        self.search(state, depth, algorithm)
    }

    /// 指定深度与算法选择最佳走法；终局返回 None
    pub fn search(&mut self, state: &GameState, depth: u32, algorithm: Algorithm) -> Option<Move> {
        if state.is_terminal() {
            return None;
        }

        self.stats.last_nodes = 0;
        let start = Instant::now();
        let outcome = search::search_root(state, depth, algorithm);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        self.stats.last_nodes = outcome.nodes;
        self.stats.last_time_ms = elapsed_ms;
        self.stats.last_score = outcome.best.map(|sm| sm.score);
        self.stats.total_nodes += outcome.nodes;
        self.stats.total_time_ms += elapsed_ms;
        self.stats.moves += 1;

        log::debug!(
            "{} depth={} state=[{}] best={:?} nodes={} time={}ms",
            algorithm,
            depth,
            state,
            outcome.best,
            outcome.nodes,
            elapsed_ms
        );

        outcome.best.map(|sm| sm.mv)
    }

    /// 返回根节点所有走法及其搜索分数（按走法生成顺序）
    ///
    /// 只更新最近一次统计，不计入整局累计。
    pub fn score_moves(&mut self, state: &GameState) -> Vec<ScoredMove> {
        let start = Instant::now();
        let outcome = search::search_root(state, self.config.depth, self.config.algorithm);
        self.stats.last_nodes = outcome.nodes;
        self.stats.last_time_ms = start.elapsed().as_millis() as u64;
        self.stats.last_score = outcome.best.map(|sm| sm.score);
        outcome.scored
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// 最近一次选步访问的节点数
    pub fn last_nodes(&self) -> u64 {
        self.stats.last_nodes
    }

    /// 最近一次选步耗时（毫秒）
    pub fn last_time_ms(&self) -> u64 {
        self.stats.last_time_ms
    }

    /// 最近一次选步的最佳分数
    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn total_nodes(&self) -> u64 {
        self.stats.total_nodes
    }

    pub fn total_time_ms(&self) -> u64 {
        self.stats.total_time_ms
    }

    pub fn moves_played(&self) -> u32 {
        self.stats.moves
    }

    pub fn average_time_ms(&self) -> u64 {
        self.stats.average_time_ms()
    }

    /// 重置整局统计
    pub fn reset_game_stats(&mut self) {
        self.stats.total_nodes = 0;
        self.stats.total_time_ms = 0;
        self.stats.moves = 0;
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(AIConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn test_default_config() {
        let config = AIConfig::default();
        assert_eq!(config.depth, 6);
        assert_eq!(config.algorithm, Algorithm::Minimax);
    }

    #[test]
    fn test_from_algorithm() {
        let ai = AIEngine::from_algorithm("alphabeta", 4).unwrap();
        assert_eq!(ai.config().algorithm, Algorithm::AlphaBeta);
        assert_eq!(ai.config().depth, 4);
        assert!(AIEngine::from_algorithm("greedy", 4).is_err());
    }

    #[test]
    fn test_terminal_state_returns_none_and_keeps_stats() {
        let mut ai = AIEngine::minimax(6);
        let state = GameState::new(10, Side::Computer).unwrap();
        assert_eq!(ai.select_best_move(&state), None);
        assert_eq!(ai.moves_played(), 0);
        assert_eq!(ai.total_nodes(), 0);
    }

    #[test]
    fn test_select_best_move_updates_stats() {
        let mut ai = AIEngine::minimax(6);
        let state = GameState::new(1728, Side::Computer).unwrap();
        let mv = ai.select_best_move(&state);
        assert_eq!(mv, Some(Move::DIVIDE_BY_THREE));
        assert_eq!(ai.last_nodes(), 97);
        assert_eq!(ai.last_score(), Some(10005));
        assert_eq!(ai.total_nodes(), 97);
        assert_eq!(ai.moves_played(), 1);

        let state = GameState::new(36, Side::Computer).unwrap();
        ai.search(&state, 2, Algorithm::Minimax);
        assert_eq!(ai.last_nodes(), 6);
        assert_eq!(ai.total_nodes(), 103);
        assert_eq!(ai.moves_played(), 2);
        assert!(ai.total_time_ms() >= ai.last_time_ms());
    }

    #[test]
    fn test_reset_game_stats() {
        let mut ai = AIEngine::alpha_beta(4);
        let state = GameState::new(7776, Side::Player).unwrap();
        ai.select_best_move(&state);
        assert!(ai.total_nodes() > 0);

        ai.reset_game_stats();
        assert_eq!(ai.total_nodes(), 0);
        assert_eq!(ai.total_time_ms(), 0);
        assert_eq!(ai.moves_played(), 0);
        assert_eq!(ai.average_time_ms(), 0);
        // 最近一次统计保留
        assert_eq!(ai.last_nodes(), 22);
    }

    #[test]
    fn test_alpha_beta_matches_minimax_engine() {
        let state = GameState::new(13824, Side::Player).unwrap();
        let mut mm = AIEngine::minimax(6);
        let mut ab = AIEngine::alpha_beta(6);
        assert_eq!(mm.select_best_move(&state), ab.select_best_move(&state));
        assert_eq!(mm.last_score(), ab.last_score());
        assert_eq!(mm.last_score(), Some(4));
        assert_eq!(mm.last_nodes(), 97);
        assert_eq!(ab.last_nodes(), 57);
    }

    #[test]
    fn test_player_to_move_maximizes_computer_score() {
        // ÷2 让电脑得 2 分（10002），÷3 让玩家得 3 分（-10003）
        let mut ai = AIEngine::minimax(1);
        let state = GameState::new(12, Side::Player).unwrap();
        assert_eq!(ai.select_best_move(&state), Some(Move::DIVIDE_BY_TWO));
        assert_eq!(ai.last_score(), Some(10002));
    }

    #[test]
    fn test_score_moves() {
        let mut ai = AIEngine::minimax(2);
        let state = GameState::new(36, Side::Computer).unwrap();
        let scored = ai.score_moves(&state);
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].mv, Move::DIVIDE_BY_TWO);
        assert_eq!(scored[0].score, -10005);
        assert_eq!(scored[1].score, 0);
        assert_eq!(ai.moves_played(), 0);
        assert_eq!(ai.last_nodes(), 6);
    }

    #[test]
    fn test_average_time() {
        let stats = SearchStats {
            total_time_ms: 10,
            moves: 3,
            ..Default::default()
        };
        assert_eq!(stats.average_time_ms(), 3);
    }
}
