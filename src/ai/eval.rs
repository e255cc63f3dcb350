//! 局面评估
//!
//! 所有分数均为电脑视角：正分有利于电脑，负分有利于玩家。

use crate::state::GameState;
use crate::types::{GameResult, END_THRESHOLD};
use serde::Serialize;

/// 终局胜负分
pub const WIN_SCORE: i32 = 10000;

/// 距离终点的最大接近度
const MAX_PROXIMITY: i32 = 100;

/// 落后时接近终点的惩罚除数
const BEHIND_DIVISOR: i32 = 5;

/// 领先时接近终点的奖励除数
const AHEAD_DIVISOR: i32 = 10;

/// 两种除法都可走时的选择奖励
const OPTIONS_BONUS: i32 = 3;

/// 评估明细（调试输出用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvalDetail {
    /// 是否终局
    pub terminal: bool,
    /// 分差（电脑 - 玩家）
    pub diff: i32,
    /// 接近终点程度
    pub proximity: i32,
    /// 接近度修正
    pub proximity_factor: i32,
    /// 选择奖励
    pub options_bonus: i32,
    /// 策略奖励
    pub strategy_bonus: i32,
    /// 总分
    pub total: i32,
}

/// 评估局面
#[inline]
pub fn evaluate(state: &GameState) -> i32 {
    evaluate_detail(state).total
}

/// 评估局面并返回各项明细
pub fn evaluate_detail(state: &GameState) -> EvalDetail {
    let diff = state.score_diff();

    if state.is_terminal() {
        let total = match state.determine_winner() {
            GameResult::ComputerWin => WIN_SCORE.saturating_add(diff),
            GameResult::PlayerWin => (-WIN_SCORE).saturating_add(diff),
            GameResult::Draw => 0,
        };
        return EvalDetail {
            terminal: true,
            diff,
            proximity: 0,
            proximity_factor: 0,
            options_bonus: 0,
            strategy_bonus: 0,
            total,
        };
    }

    // 非终局时 current_number > END_THRESHOLD
    let distance = state.current_number().saturating_sub(END_THRESHOLD);
    let proximity = (MAX_PROXIMITY as u64).saturating_sub(distance) as i32;

    // 落后时接近终点惩罚更重
    let proximity_factor = match diff.signum() {
        -1 => -proximity / BEHIND_DIVISOR,
        1 => proximity / AHEAD_DIVISOR,
        _ => 0,
    };

    let can_divide_by_2 = state.is_move_legal(2);
    let can_divide_by_3 = state.is_move_legal(3);

    let options_bonus = if can_divide_by_2 && can_divide_by_3 {
        OPTIONS_BONUS
    } else {
        0
    };

    let mut strategy_bonus = 0;
    if can_divide_by_3 {
        strategy_bonus += 1;
    }
    if can_divide_by_2 && !can_divide_by_3 {
        strategy_bonus -= 1;
    }

    EvalDetail {
        terminal: false,
        diff,
        proximity,
        proximity_factor,
        options_bonus,
        strategy_bonus,
        total: diff + proximity_factor + options_bonus + strategy_bonus,
    }
}
