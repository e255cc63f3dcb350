//! 游戏状态与走法规则
//!
//! `GameState` 是纯值类型：生成后继局面不会修改原局面，
//! 搜索中的每个分支各自持有独立副本。

use crate::error::GameError;
use crate::types::{GameResult, Move, Side, DIVISORS, END_THRESHOLD, MAX_SCORE};
use serde::Serialize;
use std::fmt;

/// 游戏状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    current_number: u64,
    player_score: u32,
    computer_score: u32,
    turn: Side,
}

impl GameState {
    /// 以起始数字和先手方开局
    pub fn new(start_number: u64, first: Side) -> Result<Self, GameError> {
        Self::from_parts(start_number, 0, 0, first)
    }

    /// 由各字段直接构造（用于记谱解析和测试）
    pub fn from_parts(
        current_number: u64,
        player_score: u32,
        computer_score: u32,
        turn: Side,
    ) -> Result<Self, GameError> {
        if current_number == 0 {
            return Err(GameError::InvalidStartNumber(current_number));
        }
        for score in [player_score, computer_score] {
            if score > MAX_SCORE {
                return Err(GameError::InvalidScore(score));
            }
        }
        Ok(GameState {
            current_number,
            player_score,
            computer_score,
            turn,
        })
    }

    pub fn current_number(&self) -> u64 {
        self.current_number
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    /// 指定阵营的得分
    pub fn score_of(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Computer => self.computer_score,
        }
    }

    /// 分差（电脑视角）
    ///
    /// 限制在 i32 一半范围内，评估时加上胜负分不会溢出。
    pub fn score_diff(&self) -> i32 {
        let diff = i64::from(self.computer_score) - i64::from(self.player_score);
        diff.clamp(i64::from(i32::MIN / 2), i64::from(i32::MAX / 2)) as i32
    }

    /// 是否终局：数字不超过阈值，或既不能被 2 也不能被 3 整除
    pub fn is_terminal(&self) -> bool {
        if self.current_number <= END_THRESHOLD {
            return true;
        }
        self.current_number % 2 != 0 && self.current_number % 3 != 0
    }

    /// 走法是否合法（不检查是否已终局）
    pub fn is_move_legal(&self, divisor: u32) -> bool {
        if !DIVISORS.contains(&divisor) {
            return false;
        }
        self.current_number % u64::from(divisor) == 0
    }

    /// 生成后继局面，非法走法返回 None
    ///
    /// 除以 3：走子方得 3 分；除以 2：对方得 2 分。之后轮换走子方。
    pub fn apply_move(&self, divisor: u32) -> Option<GameState> {
        if !self.is_move_legal(divisor) {
            return None;
        }

        let mut next = *self;
        let beneficiary = if divisor == 3 {
            self.turn
        } else {
            self.turn.opposite()
        };
        match beneficiary {
            Side::Player => next.player_score = next.player_score.saturating_add(divisor),
            Side::Computer => next.computer_score = next.computer_score.saturating_add(divisor),
        }
        next.current_number /= u64::from(divisor);
        next.turn = self.turn.opposite();
        Some(next)
    }

    /// 原地执行走法，非法时返回 false 且不改变局面
    pub fn make_move(&mut self, divisor: u32) -> bool {
        match self.apply_move(divisor) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    /// 获取所有合法走法（先 ÷2 后 ÷3）
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(2);
        if self.is_move_legal(2) {
            moves.push(Move::DIVIDE_BY_TWO);
        }
        if self.is_move_legal(3) {
            moves.push(Move::DIVIDE_BY_THREE);
        }
        moves
    }

    /// 按比分判定胜负
    pub fn determine_winner(&self) -> GameResult {
        match self.player_score.cmp(&self.computer_score) {
            std::cmp::Ordering::Greater => GameResult::PlayerWin,
            std::cmp::Ordering::Less => GameResult::ComputerWin,
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Num: {}, Player Score: {}, Computer Score: {}, Turn: {}",
            self.current_number, self.player_score, self.computer_score, self.turn
        )
    }
}
