//! 报告选项与扫描统计信息（模块）
use crate::scoring::ScoringConfig;

/// 报告选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// 是否输出 "Non optimisable" 结论（默认开启）
    pub verbose: bool,
    /// 字符串/数值的打分阈值
    pub scoring: ScoringConfig,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { verbose: true, scoring: ScoringConfig::default() }
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: usize,
    pub chars_scanned: usize,
}
