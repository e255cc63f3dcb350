//! 起始数字生成
//!
//! 生成 [10000, 20000] 区间内互不相同的 6 的倍数，随机数生成器可指定种子。

use rand::prelude::*;

/// 起始数字下限
pub const MIN_START_NUMBER: u64 = 10_000;

/// 起始数字上限
pub const MAX_START_NUMBER: u64 = 20_000;

/// 默认生成数量
pub const DEFAULT_START_COUNT: usize = 5;

/// 拒绝采样最大尝试次数
const MAX_ATTEMPTS: usize = 10_000;

/// 起始数字生成器
pub struct StartNumberGenerator {
    rng: StdRng,
}

impl StartNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        StartNumberGenerator { rng }
    }

    /// 生成 `count` 个互不相同的起始数字
    ///
    /// 区间内共有 1667 个 6 的倍数，`count` 超过该值时截断。
    pub fn generate(&mut self, count: usize) -> Vec<u64> {
        let first = MIN_START_NUMBER.div_ceil(6);
        let last = MAX_START_NUMBER / 6;
        let count = count.min((last - first + 1) as usize);

        let mut numbers = Vec::with_capacity(count);
        let mut attempts = 0;
        while numbers.len() < count && attempts < MAX_ATTEMPTS {
            let candidate = self.rng.gen_range(MIN_START_NUMBER..=MAX_START_NUMBER);
            if candidate % 6 == 0 && !numbers.contains(&candidate) {
                numbers.push(candidate);
            }
            attempts += 1;
        }

        if numbers.len() < count {
            log::warn!(
                "rejection sampling produced {} of {} start numbers, using fallback",
                numbers.len(),
                count
            );
        }
        while numbers.len() < count {
            let candidate = self.rng.gen_range(first..=last) * 6;
            if !numbers.contains(&candidate) {
                numbers.push(candidate);
            }
        }

        numbers
    }

    /// 生成单个起始数字
    pub fn next_number(&mut self) -> u64 {
        let first = MIN_START_NUMBER.div_ceil(6);
        let last = MAX_START_NUMBER / 6;
        self.rng.gen_range(first..=last) * 6
    }
}
