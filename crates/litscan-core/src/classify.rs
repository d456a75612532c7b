//! 字符分类谓词（ASCII，逐字符调用，避免每个字符跑一次正则）

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// 数值字面量的延续字符：数字或 `.`（不校验数值语法）
#[inline]
pub fn is_numeric_part(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// 正则结尾标志（`/ab+/gi` 中的 `gi`）
#[inline]
pub fn is_regex_flag(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// 标识符字符：字母、数字、`_`、`$`
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

#[inline]
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_chars() {
        for c in ['a', 'Z', '0', '9', '_', '$'] {
            assert!(is_token_char(c), "{c:?}");
        }
        for c in ['-', '.', ' ', '/', 'é'] {
            assert!(!is_token_char(c), "{c:?}");
        }
    }

    #[test]
    fn numeric_parts_accept_dot_but_digits_do_not() {
        assert!(is_numeric_part('.'));
        assert!(!is_digit('.'));
        assert!(is_digit('5'));
        assert!(!is_numeric_part('e'));
    }

    #[test]
    fn regex_flags_are_letters_only() {
        assert!(is_regex_flag('g'));
        assert!(is_regex_flag('I'));
        assert!(!is_regex_flag(';'));
        assert!(!is_regex_flag('1'));
    }

    #[test]
    fn quotes_and_terminators() {
        assert!(is_quote('"') && is_quote('\'') && !is_quote('`'));
        assert!(is_line_terminator('\n') && is_line_terminator('\r') && !is_line_terminator(' '));
    }
}
