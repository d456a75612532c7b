//! 按行读取输入并驱动扫描器
use std::io::BufRead;
use tracing::debug;

use crate::error::Result;
use crate::options::ScanStats;
use crate::scanner::Scanner;

/// 逐行读取 `reader` 直到流结束，每行补回换行符后提交给扫描器
/// - 非 UTF-8 字节按有损方式解码（替换为 U+FFFD），不中断扫描
/// - 读取失败直接返回错误（由调用方决定是否终止进程）
pub fn scan_reader<R: BufRead>(mut reader: R, scanner: &mut Scanner) -> Result<ScanStats> {
    let mut stats = ScanStats::default();
    let mut buf: Vec<u8> = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 { break; }
        // 去掉行尾 `\n` / `\r\n`，与按行读取的语义一致
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') { buf.pop(); }
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        line.push('\n');
        scanner.submit_chunk(&line);
        stats.lines_read += 1;
        stats.chars_scanned += line.chars().count();
    }
    debug!(lines = stats.lines_read, chars = stats.chars_scanned, "input exhausted");
    Ok(stats)
}
