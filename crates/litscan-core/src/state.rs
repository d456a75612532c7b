//! 扫描状态与待冲刷字面量（模块）
//!
//! 状态由一组相互独立的布尔标志组成，而不是单一枚举：
//! 同一上下文内的标志可以同时成立（如 `in_string` + `escaped_next`），
//! 但注释 / 正则 / 字符串三类上下文之间互斥。

/// 扫描器的组合状态（全部为 false 即初始状态）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// 当前处于字符串内部（开引号之后、闭引号之前）
    pub in_string: bool,
    /// 当前字符刚打开字符串
    pub string_just_started: bool,
    /// 当前字符刚关闭字符串
    pub string_just_ended: bool,
    /// 下一个字符被反斜杠转义（字符串或正则体内）
    pub escaped_next: bool,
    /// 遇到 `/`，可能是注释开头
    pub maybe_comment_start: bool,
    /// 行注释（`//`），遇到换行结束
    pub in_line_comment: bool,
    /// 块注释（`/*`）
    pub in_block_comment: bool,
    /// 块注释内遇到 `*`，下一个字符若为 `/` 则关闭
    pub maybe_block_comment_end: bool,
    /// 当前 `/` 刚关闭了块注释，下一个字符清除
    pub just_ended_block_comment: bool,
    /// 正在累积数值字面量
    pub in_numeric: bool,
    /// 正在累积标识符/记号
    pub in_token: bool,
    /// 遇到候选正则起始 `/`，由下一个字符确认或放弃
    pub maybe_regex_start: bool,
    /// 正则体内
    pub in_regex: bool,
    /// 正则已遇到结尾 `/`，正在读取标志字母
    pub just_ended_regex: bool,
    /// 上一个字符是 `)`，只影响下一个字符的正则判定
    pub just_closed_paren: bool,
}

impl ScanState {
    /// 是否处于注释上下文（含刚关闭块注释的那个 `/`）
    pub fn in_comment(&self) -> bool {
        self.in_line_comment || self.in_block_comment || self.just_ended_block_comment
    }

    /// 是否处于正则上下文（正则体或结尾标志）
    pub fn in_regex(&self) -> bool {
        self.in_regex || self.just_ended_regex
    }

    pub fn in_string(&self) -> bool {
        self.in_string
    }

    /// 注释 / 正则 / 字符串三类上下文至多一个成立
    pub fn contexts_exclusive(&self) -> bool {
        let active = [self.in_comment(), self.in_regex(), self.in_string()]
            .iter()
            .filter(|&&on| on)
            .count();
        active <= 1
    }
}

/// 正在累积的字面量（缓冲 + 字符串定界符 + 起始偏移）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingLiteral {
    pub text: String,
    /// 仅字符串使用：`"` 或 `'`
    pub delimiter: Option<char>,
    /// 起始字符偏移（相对会话开头）
    pub start: usize,
}

impl PendingLiteral {
    /// 从 `offset` 处开始新的字面量，丢弃旧内容
    pub fn begin(&mut self, offset: usize) {
        self.text.clear();
        self.delimiter = None;
        self.start = offset;
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// 取出累积文本并清空缓冲
    pub fn take(&mut self) -> String {
        self.delimiter = None;
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.delimiter = None;
        self.start = 0;
    }
}
