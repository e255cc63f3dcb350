//! 局面记谱解析和生成
//!
//! 格式: `<当前数字> <玩家得分> <电脑得分> <走子方>`
//!
//! 走子方：`p`（玩家）或 `c`（电脑），例如 `12 0 0 p`

use crate::error::GameError;
use crate::state::GameState;
use crate::types::Side;

/// 解析局面记谱
pub fn parse_state(notation: &str) -> Result<GameState, GameError> {
    let parts: Vec<&str> = notation.split_whitespace().collect();
    if parts.len() != 4 {
        return Err(GameError::InvalidNotation(format!(
            "expected '<number> <player_score> <computer_score> <turn>', got: {}",
            notation
        )));
    }

    let number: u64 = parts[0]
        .parse()
        .map_err(|_| GameError::InvalidNotation(format!("bad number: {}", parts[0])))?;
    let player_score: u32 = parts[1]
        .parse()
        .map_err(|_| GameError::InvalidNotation(format!("bad player score: {}", parts[1])))?;
    let computer_score: u32 = parts[2]
        .parse()
        .map_err(|_| GameError::InvalidNotation(format!("bad computer score: {}", parts[2])))?;

    let mut turn_chars = parts[3].chars();
    let turn = match (turn_chars.next(), turn_chars.next()) {
        (Some(c), None) => Side::from_char(c),
        _ => None,
    }
    .ok_or_else(|| GameError::InvalidNotation(format!("bad turn: {}", parts[3])))?;

    GameState::from_parts(number, player_score, computer_score, turn)
}

impl GameState {
    /// 生成局面记谱
    pub fn to_notation(&self) -> String {
        format!(
            "{} {} {} {}",
            self.current_number(),
            self.player_score(),
            self.computer_score(),
            self.turn().to_char()
        )
    }
}

impl std::str::FromStr for GameState {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_state(s)
    }
}
