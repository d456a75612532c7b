//! 频次聚合器：每个类别一个实例，记录字面量出现次数并生成排序报告
use serde::Serialize;
use std::collections::HashMap;

use crate::options::ReportOptions;
use crate::scoring::{numeric_score, string_score, Verdict};

/// 字面量类别（报告顺序：正则 → 字符串 → 数值 → 记号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Regex,
    String,
    Numeric,
    Token,
}

impl Category {
    /// 固定的报告顺序
    pub const ALL: [Category; 4] = [Category::Regex, Category::String, Category::Numeric, Category::Token];

    /// 报告标题
    pub fn title(&self) -> &'static str {
        match self {
            Category::Regex => "Regular expressions:",
            Category::String => "Strings:",
            Category::Numeric => "Numerical values:",
            Category::Token => "Tokens:",
        }
    }

    /// 按类别打分；记号与正则不打分
    fn verdict(&self, value: &str, occurrences: usize, opts: &ReportOptions) -> Option<Verdict> {
        let len = value.chars().count();
        let verdict = match self {
            Category::String => opts.scoring.string.verdict(string_score(len, occurrences)),
            Category::Numeric => opts.scoring.numeric.verdict(numeric_score(len, occurrences)),
            Category::Regex | Category::Token => return None,
        };
        match verdict {
            Verdict::NonOptimisable if !opts.verbose => None,
            v => Some(v),
        }
    }
}

/// 报告中的单行：值、出现次数、结论
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub value: String,
    pub occurrences: usize,
    pub verdict: Option<Verdict>,
}

/// 单个类别的报告，条目按值的字典序升序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub category: Category,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 出现次数表（值 → 次数）
#[derive(Debug, Clone)]
pub struct Aggregator {
    category: Category,
    table: HashMap<String, usize>,
}

impl Aggregator {
    pub fn new(category: Category) -> Self {
        Self { category, table: HashMap::new() }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// 次数加一（首次出现 0 → 1）
    pub fn record_occurrence(&mut self, value: &str) {
        match self.table.get_mut(value) {
            Some(n) => *n += 1,
            None => {
                self.table.insert(value.to_string(), 1);
            }
        }
    }

    /// 某个值的出现次数，未出现过返回 0
    pub fn occurrences(&self, value: &str) -> usize {
        self.table.get(value).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// 生成报告（不修改表内容）；空表得到空报告
    pub fn generate_report(&self, opts: &ReportOptions) -> Report {
        let mut values: Vec<(&String, &usize)> = self.table.iter().collect();
        values.sort_by(|a, b| a.0.cmp(b.0));
        let entries = values
            .into_iter()
            .map(|(value, &occurrences)| ReportEntry {
                value: value.clone(),
                occurrences,
                verdict: self.category.verdict(value, occurrences, opts),
            })
            .collect();
        Report { category: self.category, entries }
    }
}
