//! Divide Game AI Engine
//!
//! 除法淘汰游戏 AI 引擎 - Minimax / Alpha-Beta 搜索

pub mod ai;
pub mod arena;
pub mod error;
pub mod notation;
pub mod start_numbers;
pub mod state;
pub mod types;

pub use ai::{
    evaluate, evaluate_detail, AIConfig, AIEngine, Algorithm, EvalDetail, ScoredMove,
    SearchStats, AVAILABLE_ALGORITHMS, DEFAULT_DEPTH, WIN_SCORE,
};
pub use arena::{play_game, run_experiments, ExperimentConfig, ExperimentReport, GameRecord};
pub use error::GameError;
pub use notation::parse_state;
pub use start_numbers::StartNumberGenerator;
pub use state::GameState;
pub use types::{GameResult, Move, Side, DIVISORS, END_THRESHOLD, MAX_SCORE};
