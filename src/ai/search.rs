//! Minimax / Alpha-Beta 搜索
//!
//! 两种算法共用同一个递归函数，仅在剪枝判断处分支，
//! 保证交替规则和节点计数方式完全一致。

use super::eval::evaluate;
use crate::error::GameError;
use crate::state::GameState;
use crate::types::Move;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 可用算法名称
pub const AVAILABLE_ALGORITHMS: &[&str] = &["minimax", "alphabeta"];

/// 搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    /// 朴素 Minimax
    Minimax,
    /// Alpha-Beta 剪枝
    AlphaBeta,
}

impl Algorithm {
    /// 从名称解析
    pub fn from_name(name: &str) -> Result<Self, GameError> {
        match name.to_lowercase().as_str() {
            "minimax" | "mm" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" | "ab" => Ok(Algorithm::AlphaBeta),
            _ => Err(GameError::UnknownAlgorithm(name.to_string())),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "Minimax"),
            Algorithm::AlphaBeta => write!(f, "Alpha-Beta"),
        }
    }
}

/// 走法评分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: i32,
}

/// 根节点搜索结果
#[derive(Debug, Clone)]
pub(crate) struct RootOutcome {
    pub best: Option<ScoredMove>,
    pub scored: Vec<ScoredMove>,
    pub nodes: u64,
}

/// 单次搜索的递归状态
///
/// 叶子分数直接取评估函数（电脑视角），与根节点走子方无关。
struct Searcher {
    algorithm: Algorithm,
    nodes: u64,
}

impl Searcher {
    fn new(algorithm: Algorithm) -> Self {
        Searcher {
            algorithm,
            nodes: 0,
        }
    }

    /// 递归搜索
    ///
    /// Minimax 也维护 alpha/beta，但从不剪枝。
    fn explore(
        &mut self,
        state: &GameState,
        plies: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if plies == 0 || state.is_terminal() {
            return evaluate(state);
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return evaluate(state);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let Some(child) = state.apply_move(mv.divisor()) else {
                continue;
            };
            let score = self.explore(&child, plies - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.algorithm == Algorithm::AlphaBeta && beta <= alpha {
                break;
            }
        }
        best
    }
}

/// 从根节点走法评分中选出最佳走法
///
/// 严格更高分才替换，同分保留先出现的走法；一个都没选中时退回第一个合法走法。
fn choose_root_move(moves: &[Move], scored: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    let mut best_score = i32::MIN;
    for &sm in scored {
        if sm.score > best_score {
            best_score = sm.score;
            best = Some(sm);
        }
    }

    if best.is_none() {
        if let Some(&first) = moves.first() {
            log::warn!("no move adopted at root, selecting first legal move {}", first);
            best = Some(ScoredMove {
                mv: first,
                score: best_score,
            });
        }
    }
    best
}

/// 根节点搜索：逐个走法打分，严格更高分才替换（同分保留先出现的走法）
pub(crate) fn search_root(state: &GameState, depth: u32, algorithm: Algorithm) -> RootOutcome {
    let mut searcher = Searcher::new(algorithm);

    if state.is_terminal() {
        return RootOutcome {
            best: None,
            scored: Vec::new(),
            nodes: 0,
        };
    }

    let moves = state.legal_moves();
    let plies = depth.max(1) - 1;

    let mut scored = Vec::with_capacity(moves.len());
    for &mv in &moves {
        let Some(child) = state.apply_move(mv.divisor()) else {
            continue;
        };
        // 根节点之下由对手应对，为最小化节点
        let score = searcher.explore(&child, plies, i32::MIN, i32::MAX, false);
        scored.push(ScoredMove { mv, score });
    }

    let best = choose_root_move(&moves, &scored);
    RootOutcome {
        best,
        scored,
        nodes: searcher.nodes,
    }
}
