//! 字面量扫描与可优化性分析核心库
//!
//! 设计要点：
//! - 单遍逐字符扫描，状态为一组独立布尔标志（注释 / 正则 / 字符串 / 数值 / 记号）。
//! - 扫描器只负责分类并把完成的字面量交给对应类别的聚合器；聚合器只负责计数与打分。
//! - 一次会话独占一个扫描器实例，多个输入并发扫描时各自构造，互不共享状态。
//! - 输出报告按类别固定顺序（正则、字符串、数值、记号），类别内按值字典序。

mod aggregator;
mod classify;
mod config;
mod error;
mod options;
mod render;
mod scan;
mod scanner;
mod scoring;
mod state;

pub use aggregator::{Aggregator, Category, Report, ReportEntry};
pub use config::{load_scoring_config, parse_scoring_config};
pub use error::{LitscanError, Result};
pub use options::{ReportOptions, ScanStats};
pub use render::{write_json_report, write_text_report};
pub use scan::scan_reader;
pub use scanner::Scanner;
pub use scoring::{numeric_score, string_score, ScoringConfig, Thresholds, Verdict};
pub use state::{PendingLiteral, ScanState};
