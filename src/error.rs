//! 错误类型

use thiserror::Error;

/// 库内统一错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid divisor {0}: divisor must be 2 or 3")]
    InvalidDivisor(u32),

    #[error("invalid start number {0}: must be positive")]
    InvalidStartNumber(u64),

    #[error("invalid score {0}: must not exceed {max}", max = crate::types::MAX_SCORE)]
    InvalidScore(u32),

    #[error("invalid state notation: {0}")]
    InvalidNotation(String),

    #[error("unknown algorithm: {0}. Available: minimax, alphabeta")]
    UnknownAlgorithm(String),
}
