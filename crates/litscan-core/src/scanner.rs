//! 词法扫描器：逐字符分类（注释 / 正则 / 字符串 / 数值 / 记号 / 普通代码）
//!
//! 设计要点：
//! - 只依赖当前组合状态与当前字符，不回溯、不预读。
//! - 输入可以任意切块，块边界没有语义（状态跨 `submit_chunk` 调用保留）。
//! - 每个字符按固定优先级处理：注释 → 正则 → 字符串 → 数值 → 记号 → 结构计数。
//!   `/` 与引号在多个上下文中含义重叠，优先级决定谁生效。
//! - 不校验语法；未闭合的字面量在会话结束时直接丢弃，不会冲刷到聚合器。
use tracing::trace;

use crate::aggregator::{Aggregator, Category, Report};
use crate::classify::{is_digit, is_line_terminator, is_numeric_part, is_quote, is_regex_flag, is_token_char};
use crate::options::ReportOptions;
use crate::state::{PendingLiteral, ScanState};

/// 单次扫描会话：扫描状态 + 四个聚合器
#[derive(Debug, Clone)]
pub struct Scanner {
    state: ScanState,
    /// `{` / `}` 嵌套深度（格式错误的输入可能为负）
    scope_depth: i64,
    /// 已消费的字符数
    offset: usize,

    string: PendingLiteral,
    regex: PendingLiteral,
    numeric: PendingLiteral,
    token: PendingLiteral,

    regexes: Aggregator,
    strings: Aggregator,
    numerics: Aggregator,
    tokens: Aggregator,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::default(),
            scope_depth: 0,
            offset: 0,
            string: PendingLiteral::default(),
            regex: PendingLiteral::default(),
            numeric: PendingLiteral::default(),
            token: PendingLiteral::default(),
            regexes: Aggregator::new(Category::Regex),
            strings: Aggregator::new(Category::String),
            numerics: Aggregator::new(Category::Numeric),
            tokens: Aggregator::new(Category::Token),
        }
    }

    /// 清空全部状态与聚合表，回到初始状态
    pub fn reset(&mut self) {
        self.state = ScanState::default();
        self.scope_depth = 0;
        self.offset = 0;
        for pending in [&mut self.string, &mut self.regex, &mut self.numeric, &mut self.token] {
            pending.clear();
        }
        for agg in [&mut self.regexes, &mut self.strings, &mut self.numerics, &mut self.tokens] {
            agg.clear();
        }
    }

    /// 按顺序处理 `chunk` 中的每个字符
    pub fn submit_chunk(&mut self, chunk: &str) {
        for c in chunk.chars() {
            self.scan_char(c);
            self.offset += 1;
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn scope_depth(&self) -> i64 {
        self.scope_depth
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn aggregator(&self, category: Category) -> &Aggregator {
        match category {
            Category::Regex => &self.regexes,
            Category::String => &self.strings,
            Category::Numeric => &self.numerics,
            Category::Token => &self.tokens,
        }
    }

    /// 四类报告，顺序固定为：正则、字符串、数值、记号
    pub fn reports(&self, opts: &ReportOptions) -> Vec<Report> {
        Category::ALL
            .iter()
            .map(|&category| self.aggregator(category).generate_report(opts))
            .collect()
    }

    fn scan_char(&mut self, c: char) {
        // 注释、正则、字符串三者互斥，各自在进入前检查另外两者
        self.track_comment(c);
        self.track_regex(c);
        self.track_string(c);
        debug_assert!(self.state.contexts_exclusive(), "overlapping lexical contexts: {:?}", self.state);

        if self.state.in_comment() || self.state.in_regex() || self.state.in_string() {
            return;
        }

        self.track_numeric(c);
        // 数值累积期间不做记号分类
        if !self.state.in_numeric {
            self.track_token(c);
        }
        self.track_structure(c);
    }

    fn track_comment(&mut self, c: char) {
        if self.state.in_regex() || self.state.in_string() {
            return;
        }
        let s = &mut self.state;

        // 紧跟 `*/` 的 `/` 仍算注释上下文（不会开始正则），只可能接着开启行注释
        if c == '/' {
            if s.maybe_block_comment_end {
                s.maybe_block_comment_end = false;
                s.in_block_comment = false;
                s.just_ended_block_comment = true;
            } else if s.maybe_comment_start {
                // 连续两个 `/`：行注释，候选正则作废
                s.maybe_comment_start = false;
                s.maybe_regex_start = false;
                s.just_ended_block_comment = false;
                s.in_line_comment = true;
            } else if !s.in_line_comment && !s.in_block_comment {
                s.maybe_comment_start = true;
            }
            return;
        }

        s.just_ended_block_comment = false;
        s.maybe_block_comment_end = false;
        if c == '*' {
            if s.maybe_comment_start {
                s.maybe_comment_start = false;
                s.maybe_regex_start = false;
                s.in_block_comment = true;
            } else if s.in_block_comment {
                s.maybe_block_comment_end = true;
            }
            return;
        }

        s.maybe_comment_start = false;
        if is_line_terminator(c) && s.in_line_comment {
            s.in_line_comment = false;
        }
    }

    fn track_regex(&mut self, c: char) {
        if self.state.in_string() || self.state.in_comment() {
            return;
        }

        // 结尾 `/` 之后：字母为标志，第一个非字母冲刷整个正则
        if self.state.just_ended_regex {
            if is_regex_flag(c) {
                self.regex.push(c);
            } else {
                self.state.just_ended_regex = false;
                let start = self.regex.start;
                let value = self.regex.take();
                self.flush(Category::Regex, value, start);
            }
            return;
        }

        if self.state.in_regex {
            self.regex.push(c);
            if self.state.escaped_next {
                self.state.escaped_next = false;
            } else if c == '\\' {
                self.state.escaped_next = true;
            } else if c == '/' {
                self.state.in_regex = false;
                self.state.just_ended_regex = true;
            }
            return;
        }

        if self.state.maybe_regex_start {
            self.state.maybe_regex_start = false;
            // 后跟 `*` 或 `/` 时是注释，已由注释跟踪接管
            if c != '*' && c != '/' {
                self.state.in_regex = true;
                self.state.maybe_comment_start = false;
                self.regex.push(c);
                self.state.escaped_next = c == '\\';
            }
            return;
        }

        // 数值、记号或 `)` 之后的 `/` 是除号
        if c == '/' && !self.state.in_numeric && !self.state.in_token && !self.state.just_closed_paren {
            self.state.maybe_regex_start = true;
            self.regex.begin(self.offset);
            self.regex.push('/');
        }
    }

    fn track_string(&mut self, c: char) {
        if self.state.in_regex() || self.state.in_comment() {
            return;
        }
        self.state.string_just_started = false;
        self.state.string_just_ended = false;

        if self.state.in_string {
            let closes = Some(c) == self.string.delimiter && !self.state.escaped_next;
            if closes {
                // 闭合引号不计入内容
                self.state.in_string = false;
                self.state.string_just_ended = true;
                let start = self.string.start;
                let value = self.string.take();
                self.flush(Category::String, value, start);
                return;
            }
            self.string.push(c);
            if self.state.escaped_next {
                self.state.escaped_next = false;
            } else if c == '\\' {
                self.state.escaped_next = true;
            }
            return;
        }

        if is_quote(c) {
            // 开引号不计入内容
            self.state.in_string = true;
            self.state.string_just_started = true;
            self.state.escaped_next = false;
            self.string.begin(self.offset);
            self.string.delimiter = Some(c);
        }
    }

    fn track_numeric(&mut self, c: char) {
        if !self.state.in_numeric {
            if is_digit(c) {
                self.state.in_numeric = true;
                self.numeric.begin(self.offset);
                self.numeric.push(c);
            }
        } else if is_numeric_part(c) {
            self.numeric.push(c);
        } else {
            self.state.in_numeric = false;
            let start = self.numeric.start;
            let value = self.numeric.take();
            self.flush(Category::Numeric, value, start);
        }
    }

    fn track_token(&mut self, c: char) {
        if is_token_char(c) {
            if !self.state.in_token {
                self.state.in_token = true;
                self.token.begin(self.offset);
            }
            self.token.push(c);
        } else if self.state.in_token {
            self.state.in_token = false;
            let start = self.token.start;
            let value = self.token.take();
            self.flush(Category::Token, value, start);
        }
    }

    fn track_structure(&mut self, c: char) {
        match c {
            '{' => self.scope_depth += 1,
            '}' => self.scope_depth -= 1,
            _ => {}
        }
        // `)` 只影响下一个字符的正则判定
        self.state.just_closed_paren = c == ')';
    }

    fn flush(&mut self, category: Category, value: String, start: usize) {
        trace!(?category, %value, start, "literal completed");
        match category {
            Category::Regex => self.regexes.record_occurrence(&value),
            Category::String => self.strings.record_occurrence(&value),
            Category::Numeric => self.numerics.record_occurrence(&value),
            Category::Token => self.tokens.record_occurrence(&value),
        }
    }
}
