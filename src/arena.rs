//! 对战与实验
//!
//! 让两个引擎自我对弈，并汇总胜负、节点数和耗时统计。

use crate::ai::{AIConfig, AIEngine, Algorithm, DEFAULT_DEPTH};
use crate::error::GameError;
use crate::start_numbers::StartNumberGenerator;
use crate::state::GameState;
use crate::types::{GameResult, Move, Side};
use serde::Serialize;
use std::fmt;

/// 默认实验局数
pub const DEFAULT_GAMES: usize = 10;

/// 单步记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    pub side: Side,
    #[serde(rename = "move")]
    pub mv: Move,
    pub nodes: u64,
}

/// 一局对弈记录
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub start: GameState,
    pub moves: Vec<PlayedMove>,
    pub final_state: GameState,
    pub result: GameResult,
    /// 引擎在非终局给不出走法时中止
    pub abandoned: bool,
}

/// 引擎走一步的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineTurn {
    /// 已执行该走法
    Played(Move),
    /// 引擎给不出走法
    NoMove,
    /// 引擎给出的走法不合法，局面未改变
    Illegal(Move),
}

/// 让引擎为当前走子方选一步并执行
pub fn engine_turn(engine: &mut AIEngine, state: &mut GameState) -> EngineTurn {
    let side = state.turn();
    let Some(mv) = engine.select_best_move(state) else {
        log::warn!("{} engine found no move at [{}]", side, state);
        return EngineTurn::NoMove;
    };
    if !state.make_move(mv.divisor()) {
        log::warn!("{} engine chose illegal {} at [{}]", side, mv, state);
        return EngineTurn::Illegal(mv);
    }
    EngineTurn::Played(mv)
}

/// 让两个引擎下完一局
///
/// `player_engine` 执玩家方，`computer_engine` 执电脑方，开局前重置双方整局统计。
pub fn play_game(
    start: GameState,
    player_engine: &mut AIEngine,
    computer_engine: &mut AIEngine,
) -> GameRecord {
    player_engine.reset_game_stats();
    computer_engine.reset_game_stats();

    let mut state = start;
    let mut moves = Vec::new();
    let mut abandoned = false;

    while !state.is_terminal() {
        let side = state.turn();
        let engine = match side {
            Side::Player => &mut *player_engine,
            Side::Computer => &mut *computer_engine,
        };

        match engine_turn(engine, &mut state) {
            EngineTurn::Played(mv) => moves.push(PlayedMove {
                side,
                mv,
                nodes: engine.last_nodes(),
            }),
            EngineTurn::NoMove | EngineTurn::Illegal(_) => {
                abandoned = true;
                break;
            }
        }
    }

    GameRecord {
        start,
        moves,
        final_state: state,
        result: state.determine_winner(),
        abandoned,
    }
}

/// 实验配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// 起始数字，None 时随机生成
    pub start_number: Option<u64>,
    /// 对局数
    pub games: usize,
    /// 双方使用的引擎配置
    pub ai: AIConfig,
    /// 随机种子
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            start_number: None,
            games: DEFAULT_GAMES,
            ai: AIConfig {
                depth: DEFAULT_DEPTH,
                algorithm: Algorithm::Minimax,
            },
            seed: None,
        }
    }
}

/// 单局摘要（实验引擎视角）
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub game: usize,
    pub first: Side,
    pub result: GameResult,
    pub final_number: u64,
    pub player_score: u32,
    pub computer_score: u32,
    pub nodes: u64,
    pub avg_time_ms: u64,
}

/// 实验报告
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub start_number: u64,
    pub games: usize,
    pub depth: u32,
    pub algorithm: Algorithm,
    pub experiment_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    pub avg_nodes_per_game: u64,
    pub avg_move_time_ms: u64,
    pub summaries: Vec<GameSummary>,
}

/// 运行实验
///
/// 实验引擎执电脑方，对手引擎执玩家方；奇数局玩家先手。
pub fn run_experiments(config: &ExperimentConfig) -> Result<ExperimentReport, GameError> {
    let start_number = match config.start_number {
        Some(n) => n,
        None => StartNumberGenerator::new(config.seed).next_number(),
    };
    // 提前校验起始数字
    GameState::new(start_number, Side::Player)?;

    let mut experiment = AIEngine::new(config.ai);
    let mut opponent = AIEngine::new(config.ai);

    let mut experiment_wins = 0;
    let mut opponent_wins = 0;
    let mut draws = 0;
    let mut total_nodes: u64 = 0;
    let mut total_avg_time: u64 = 0;
    let mut summaries = Vec::with_capacity(config.games);

    for game in 1..=config.games {
        let first = if game % 2 == 1 {
            Side::Player
        } else {
            Side::Computer
        };
        let start = GameState::new(start_number, first)?;
        let record = play_game(start, &mut opponent, &mut experiment);

        match record.result {
            GameResult::ComputerWin => experiment_wins += 1,
            GameResult::PlayerWin => opponent_wins += 1,
            GameResult::Draw => draws += 1,
        }
        total_nodes += experiment.total_nodes();
        total_avg_time += experiment.average_time_ms();

        log::info!(
            "game {} finished: {} (nodes={}, avg_time={}ms)",
            game,
            record.result,
            experiment.total_nodes(),
            experiment.average_time_ms()
        );

        summaries.push(GameSummary {
            game,
            first,
            result: record.result,
            final_number: record.final_state.current_number(),
            player_score: record.final_state.player_score(),
            computer_score: record.final_state.computer_score(),
            nodes: experiment.total_nodes(),
            avg_time_ms: experiment.average_time_ms(),
        });
    }

    let games = config.games as u64;
    let (avg_nodes_per_game, avg_move_time_ms) = if games == 0 {
        (0, 0)
    } else {
        (total_nodes / games, total_avg_time / games)
    };

    Ok(ExperimentReport {
        start_number,
        games: config.games,
        depth: config.ai.depth,
        algorithm: config.ai.algorithm,
        experiment_wins,
        opponent_wins,
        draws,
        avg_nodes_per_game,
        avg_move_time_ms,
        summaries,
    })
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Experiment Results ({} Games) ---", self.games)?;
        writeln!(
            f,
            "Start Number: {}, Algorithm: {}, Fixed Depth: {}",
            self.start_number, self.algorithm, self.depth
        )?;
        writeln!(f, "Experiment AI Wins: {}", self.experiment_wins)?;
        writeln!(f, "Opponent AI Wins: {}", self.opponent_wins)?;
        writeln!(f, "Draws: {}", self.draws)?;
        writeln!(
            f,
            "Avg Nodes Visited per Game (by Exp AI): {}",
            self.avg_nodes_per_game
        )?;
        write!(
            f,
            "Avg Move Time per Game (Avg for Exp AI): {} ms",
            self.avg_move_time_ms
        )
    }
}
