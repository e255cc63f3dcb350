//! 除法游戏核心类型定义
//!
//! 定义阵营、走法、对局结果等基础数据类型

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 游戏结束阈值：当前数字小于等于该值即终局
pub const END_THRESHOLD: u64 = 10;

/// 单方得分上限（构造局面时校验）
pub const MAX_SCORE: u32 = 1_000_000;

/// 合法除数
pub const DIVISORS: [u32; 2] = [2, 3];

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// 获取对方阵营
    pub fn opposite(&self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// 从记谱字符解析
    pub fn from_char(c: char) -> Option<Side> {
        match c.to_ascii_lowercase() {
            'p' => Some(Side::Player),
            'c' => Some(Side::Computer),
            _ => None,
        }
    }

    /// 转换为记谱字符
    pub fn to_char(&self) -> char {
        match self {
            Side::Player => 'p',
            Side::Computer => 'c',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// 走法：用 2 或 3 整除当前数字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Move {
    divisor: u32,
}

impl Move {
    pub const DIVIDE_BY_TWO: Move = Move { divisor: 2 };
    pub const DIVIDE_BY_THREE: Move = Move { divisor: 3 };

    /// 创建走法，除数只能是 2 或 3
    pub fn new(divisor: u32) -> Result<Self, GameError> {
        if DIVISORS.contains(&divisor) {
            Ok(Move { divisor })
        } else {
            Err(GameError::InvalidDivisor(divisor))
        }
    }

    pub fn divisor(&self) -> u32 {
        self.divisor
    }
}

impl TryFrom<u32> for Move {
    type Error = GameError;

    fn try_from(divisor: u32) -> Result<Self, Self::Error> {
        Move::new(divisor)
    }
}

impl From<Move> for u32 {
    fn from(mv: Move) -> u32 {
        mv.divisor
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Divide by {}", self.divisor)
    }
}

/// 对局结果（按比分判定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    PlayerWin,
    ComputerWin,
    Draw,
}

impl GameResult {
    /// 数值编码：玩家胜 +1，电脑胜 -1，平局 0
    pub fn code(&self) -> i32 {
        match self {
            GameResult::PlayerWin => 1,
            GameResult::ComputerWin => -1,
            GameResult::Draw => 0,
        }
    }

    /// 胜方
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::PlayerWin => Some(Side::Player),
            GameResult::ComputerWin => Some(Side::Computer),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameResult::PlayerWin => "Player wins",
            GameResult::ComputerWin => "Computer wins",
            GameResult::Draw => "Draw",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_accepts_two_and_three() {
        assert_eq!(Move::new(2).unwrap(), Move::DIVIDE_BY_TWO);
        assert_eq!(Move::new(3).unwrap().divisor(), 3);
    }

    #[test]
    fn test_move_rejects_other_divisors() {
        for d in [0, 1, 4, 5, 6, 9, u32::MAX] {
            assert_eq!(Move::new(d), Err(GameError::InvalidDivisor(d)));
        }
        assert!(Move::try_from(7).is_err());
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::DIVIDE_BY_THREE.to_string(), "Divide by 3");
    }

    #[test]
    fn test_move_serde_rejects_bad_divisor() {
        let mv: Move = serde_json::from_str("2").unwrap();
        assert_eq!(mv, Move::DIVIDE_BY_TWO);
        assert!(serde_json::from_str::<Move>("5").is_err());
        assert_eq!(serde_json::to_string(&Move::DIVIDE_BY_THREE).unwrap(), "3");
    }

    #[test]
    fn test_side_opposite_and_chars() {
        assert_eq!(Side::Player.opposite(), Side::Computer);
        assert_eq!(Side::Computer.opposite(), Side::Player);
        assert_eq!(Side::from_char('C'), Some(Side::Computer));
        assert_eq!(Side::from_char('x'), None);
        assert_eq!(Side::Player.to_char(), 'p');
    }

    #[test]
    fn test_result_codes() {
        assert_eq!(GameResult::PlayerWin.code(), 1);
        assert_eq!(GameResult::ComputerWin.code(), -1);
        assert_eq!(GameResult::Draw.code(), 0);
        assert_eq!(GameResult::Draw.winner(), None);
    }
}
