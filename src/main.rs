//! Divide Game AI CLI
//!
//! 命令行界面，用于查询走法、评估局面、运行实验和人机对弈
//!
//! 支持两种模式：
//! 1. 单次命令模式：每次执行一个命令
//! 2. 对弈模式：通过 stdin/stdout 与电脑下一整局

use clap::{Parser, Subcommand};
use divide_game_ai::arena::{engine_turn, EngineTurn};
use divide_game_ai::{
    evaluate_detail, parse_state, run_experiments, AIConfig, AIEngine, Algorithm, ExperimentConfig,
    GameError, GameResult, GameState, Move, ScoredMove, Side, StartNumberGenerator, DEFAULT_DEPTH,
};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "divide-game-ai")]
#[command(about = "Divide by 2 / 3 game AI engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 获取合法走法
    Moves {
        /// 局面记谱，例如 "12 0 0 p"
        #[arg(long)]
        state: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 选择最佳走法
    Best {
        /// 局面记谱
        #[arg(long)]
        state: String,

        /// 搜索深度
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,

        /// 搜索算法 (minimax, alphabeta)
        #[arg(long, default_value = "minimax")]
        algorithm: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 静态评估局面（电脑视角）
    Eval {
        /// 局面记谱
        #[arg(long)]
        state: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 列出根节点所有走法的搜索分数
    Analyze {
        /// 局面记谱
        #[arg(long)]
        state: String,

        /// 搜索深度
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,

        /// 搜索算法 (minimax, alphabeta)
        #[arg(long, default_value = "minimax")]
        algorithm: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 生成起始数字
    Starts {
        /// 数量
        #[arg(long, default_value = "5")]
        count: usize,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 运行自我对弈实验
    Experiment {
        /// 起始数字（不指定则随机生成）
        #[arg(long)]
        start: Option<u64>,

        /// 对局数
        #[arg(long, default_value = "10")]
        games: usize,

        /// 搜索深度
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,

        /// 搜索算法 (minimax, alphabeta)
        #[arg(long, default_value = "minimax")]
        algorithm: String,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 人机对弈（stdin 输入 2 / 3 / quit）
    Play {
        /// 起始数字（不指定则随机生成）
        #[arg(long)]
        start: Option<u64>,

        /// 电脑先手
        #[arg(long)]
        computer_first: bool,

        /// 搜索深度
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,

        /// 搜索算法 (minimax, alphabeta)
        #[arg(long, default_value = "minimax")]
        algorithm: String,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct MovesResponse {
    state: String,
    terminal: bool,
    moves: Vec<Move>,
}

#[derive(Serialize)]
struct BestResponse {
    state: String,
    algorithm: Algorithm,
    depth: u32,
    #[serde(rename = "move")]
    mv: Option<Move>,
    score: Option<i32>,
    nodes: u64,
    elapsed_ms: f64,
    nps: f64,
}

#[derive(Serialize)]
struct AnalyzeResponse {
    state: String,
    algorithm: Algorithm,
    depth: u32,
    moves: Vec<ScoredMove>,
    nodes: u64,
}

fn calc_nps(nodes: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        nodes as f64 / elapsed_secs
    } else {
        0.0
    }
}

/// 打印错误并退出
fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => fail(e),
    }
}

fn engine_config(algorithm: &str, depth: u32) -> Result<AIConfig, GameError> {
    Ok(AIConfig {
        depth,
        algorithm: Algorithm::from_name(algorithm)?,
    })
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Moves { state, json } => {
            let game = parse_state(&state).unwrap_or_else(|e| fail(e));
            let moves = game.legal_moves();
            if json {
                print_json(&MovesResponse {
                    state: game.to_notation(),
                    terminal: game.is_terminal(),
                    moves,
                });
            } else {
                println!("{}", game);
                println!("Terminal: {}", game.is_terminal());
                println!("Legal moves ({}):", moves.len());
                for mv in &moves {
                    println!("  {}", mv);
                }
            }
        }

        Commands::Best {
            state,
            depth,
            algorithm,
            json,
        } => {
            let game = parse_state(&state).unwrap_or_else(|e| fail(e));
            let config = engine_config(&algorithm, depth).unwrap_or_else(|e| fail(e));
            let mut ai = AIEngine::new(config);

            let start = Instant::now();
            let mv = ai.select_best_move(&game);
            let elapsed = start.elapsed().as_secs_f64();
            let nodes = ai.last_nodes();
            let nps = calc_nps(nodes, elapsed);

            if json {
                print_json(&BestResponse {
                    state: game.to_notation(),
                    algorithm: config.algorithm,
                    depth,
                    mv,
                    score: mv.and(ai.last_score()),
                    nodes,
                    elapsed_ms: elapsed * 1000.0,
                    nps,
                });
            } else {
                match mv {
                    Some(mv) => println!(
                        "Best move ({}, depth={}): {} (score: {})",
                        config.algorithm,
                        depth,
                        mv,
                        ai.last_score().unwrap_or_default()
                    ),
                    None => println!("No move: game is over ({})", game.determine_winner()),
                }
                println!(
                    "\nStats: nodes={}, time={:.3}s, nps={:.0}",
                    nodes, elapsed, nps
                );
            }
        }

        Commands::Eval { state, json } => {
            let game = parse_state(&state).unwrap_or_else(|e| fail(e));
            let detail = evaluate_detail(&game);
            if json {
                print_json(&detail);
            } else {
                println!("局面评估 (电脑视角): {}", detail.total);
                if detail.terminal {
                    println!("  终局: {}", game.determine_winner());
                } else {
                    println!("  分差: {}", detail.diff);
                    println!(
                        "  接近度: {} (修正 {})",
                        detail.proximity, detail.proximity_factor
                    );
                    println!("  选择奖励: {}", detail.options_bonus);
                    println!("  策略奖励: {}", detail.strategy_bonus);
                }
            }
        }

        Commands::Analyze {
            state,
            depth,
            algorithm,
            json,
        } => {
            let game = parse_state(&state).unwrap_or_else(|e| fail(e));
            let config = engine_config(&algorithm, depth).unwrap_or_else(|e| fail(e));
            let mut ai = AIEngine::new(config);
            let moves = ai.score_moves(&game);

            if json {
                print_json(&AnalyzeResponse {
                    state: game.to_notation(),
                    algorithm: config.algorithm,
                    depth,
                    moves,
                    nodes: ai.last_nodes(),
                });
            } else {
                println!("Search result ({}, depth={}):", config.algorithm, depth);
                for sm in &moves {
                    println!("  {}: score={}", sm.mv, sm.score);
                }
                println!("\nNodes: {}", ai.last_nodes());
            }
        }

        Commands::Starts { count, seed } => {
            let mut gen = StartNumberGenerator::new(seed);
            for n in gen.generate(count) {
                println!("{}", n);
            }
        }

        Commands::Experiment {
            start,
            games,
            depth,
            algorithm,
            seed,
            json,
        } => {
            let ai = engine_config(&algorithm, depth).unwrap_or_else(|e| fail(e));
            let config = ExperimentConfig {
                start_number: start,
                games,
                ai,
                seed,
            };
            let report = run_experiments(&config).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&report);
            } else {
                for s in &report.summaries {
                    println!(
                        "Game {} finished. Winner: {}, Nodes: {}, AvgTime: {}ms",
                        s.game,
                        match s.result {
                            GameResult::PlayerWin => "Opponent",
                            GameResult::ComputerWin => "ExperimentAI",
                            GameResult::Draw => "Draw",
                        },
                        s.nodes,
                        s.avg_time_ms
                    );
                }
                println!("\n{}", report);
            }
        }

        Commands::Play {
            start,
            computer_first,
            depth,
            algorithm,
            seed,
        } => {
            let config = engine_config(&algorithm, depth).unwrap_or_else(|e| fail(e));
            let start_number =
                start.unwrap_or_else(|| StartNumberGenerator::new(seed).next_number());
            let first = if computer_first {
                Side::Computer
            } else {
                Side::Player
            };
            let game = GameState::new(start_number, first).unwrap_or_else(|e| fail(e));
            run_interactive(game, AIEngine::new(config));
        }
    }
}

/// 人机对弈主循环
/// 从 stdin 读取玩家走法，电脑走法和局面输出到 stdout
fn run_interactive(mut game: GameState, mut ai: AIEngine) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    println!(
        "Game started with number {}. AI: {} (depth {})",
        game.current_number(),
        ai.config().algorithm,
        ai.config().depth
    );
    println!("{} starts.", game.turn());

    while !game.is_terminal() {
        println!("{}", game);

        if game.turn() == Side::Computer {
            match engine_turn(&mut ai, &mut game) {
                EngineTurn::Played(mv) => println!(
                    "Computer chose: {} (Nodes: {}, Time: {}ms)",
                    mv,
                    ai.last_nodes(),
                    ai.last_time_ms()
                ),
                EngineTurn::NoMove => {
                    println!("Computer cannot make a move.");
                    break;
                }
                EngineTurn::Illegal(mv) => {
                    println!("Computer chose illegal {}, ending game.", mv);
                    break;
                }
            }
            continue;
        }

        let options: Vec<String> = game
            .legal_moves()
            .iter()
            .map(|m| m.divisor().to_string())
            .collect();
        print!("Your move [{}]: ", options.join("/"));
        let _ = stdout.flush();

        let line = match lines.next() {
            Some(Ok(l)) => l,
            _ => return,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            return;
        }

        let divisor = match input.parse::<u32>().ok().and_then(|d| Move::new(d).ok()) {
            Some(mv) => mv.divisor(),
            None => {
                println!("Please enter 2 or 3.");
                continue;
            }
        };
        if !game.make_move(divisor) {
            println!(
                "Invalid move: {} not divisible by {}.",
                game.current_number(),
                divisor
            );
            continue;
        }
        println!("Player divides by {}.", divisor);
    }

    println!("\n--- GAME OVER ---");
    println!("Final Number: {}", game.current_number());
    println!(
        "Final Score -> Player: {} | Computer: {}",
        game.player_score(),
        game.computer_score()
    );
    match game.determine_winner() {
        GameResult::PlayerWin => println!(">>> PLAYER WINS! <<<"),
        GameResult::ComputerWin => println!(">>> COMPUTER WINS! <<<"),
        GameResult::Draw => println!(">>> IT'S A DRAW! <<<"),
    }
    println!(
        "Computer stats: moves={}, total nodes={}, avg time={}ms",
        ai.moves_played(),
        ai.total_nodes(),
        ai.average_time_ms()
    );
}
