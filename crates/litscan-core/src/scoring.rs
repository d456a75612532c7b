//! 可优化性打分
//!
//! 判断重复字面量是否值得提取为变量：重复出现的字面量总字节数
//! 超过“声明变量 + 引用变量”的字节数即为可优化。两档阈值均为严格大于，
//! 自上而下判定（先判强条件）。
use serde::{Deserialize, Serialize};
use std::fmt;

/// 单个字面量的优化结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// 需要新建变量也划算
    Optimisable,
    /// 仅在复用已有变量时划算
    OptimisableWithExistingVar,
    NonOptimisable,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Optimisable => "Optimisable",
            Verdict::OptimisableWithExistingVar => "Optimisable with existing var",
            Verdict::NonOptimisable => "Non optimisable",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 字符串得分：`(len+1)×occ − len`
pub fn string_score(len: usize, occurrences: usize) -> i64 {
    let (len, occ) = (len as i64, occurrences as i64);
    (len + 1) * occ - len
}

/// 数值得分：`len×occ − len − occ`
pub fn numeric_score(len: usize, occurrences: usize) -> i64 {
    let (len, occ) = (len as i64, occurrences as i64);
    len * occ - len - occ
}

/// 两档阈值（严格大于）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub optimisable: i64,
    pub existing_var: i64,
}

impl Thresholds {
    pub const STRING: Thresholds = Thresholds { optimisable: 9, existing_var: 5 };
    pub const NUMERIC: Thresholds = Thresholds { optimisable: 7, existing_var: 3 };

    /// 自上而下判定：先判 `optimisable`，再判 `existing_var`
    pub fn verdict(&self, score: i64) -> Verdict {
        if score > self.optimisable {
            Verdict::Optimisable
        } else if score > self.existing_var {
            Verdict::OptimisableWithExistingVar
        } else {
            Verdict::NonOptimisable
        }
    }
}

/// 各类别的阈值配置（可由 TOML 覆盖，见 config 模块）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringConfig {
    pub string: Thresholds,
    pub numeric: Thresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { string: Thresholds::STRING, numeric: Thresholds::NUMERIC }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_scores() {
        assert_eq!(string_score(3, 4), 13);
        assert_eq!(Thresholds::STRING.verdict(13), Verdict::Optimisable);
        assert_eq!(string_score(3, 2), 5);
        assert_eq!(Thresholds::STRING.verdict(5), Verdict::NonOptimisable);
        assert_eq!(string_score(2, 3), 7);
        assert_eq!(Thresholds::STRING.verdict(7), Verdict::OptimisableWithExistingVar);
    }

    #[test]
    fn numeric_scores() {
        assert_eq!(numeric_score(2, 6), 4);
        assert_eq!(Thresholds::NUMERIC.verdict(4), Verdict::OptimisableWithExistingVar);
        assert_eq!(numeric_score(1, 1), -1);
        assert_eq!(Thresholds::NUMERIC.verdict(-1), Verdict::NonOptimisable);
        assert_eq!(numeric_score(4, 4), 8);
        assert_eq!(Thresholds::NUMERIC.verdict(8), Verdict::Optimisable);
    }

    #[test]
    fn thresholds_are_strict() {
        let t = Thresholds::NUMERIC;
        assert_eq!(t.verdict(7), Verdict::OptimisableWithExistingVar);
        assert_eq!(t.verdict(3), Verdict::NonOptimisable);
        let t = Thresholds::STRING;
        assert_eq!(t.verdict(9), Verdict::OptimisableWithExistingVar);
        assert_eq!(t.verdict(10), Verdict::Optimisable);
        assert_eq!(t.verdict(6), Verdict::OptimisableWithExistingVar);
    }

    #[test]
    fn verdict_text() {
        assert_eq!(Verdict::OptimisableWithExistingVar.to_string(), "Optimisable with existing var");
        assert_eq!(Verdict::NonOptimisable.to_string(), "Non optimisable");
    }
}
