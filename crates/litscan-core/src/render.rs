//! 报告输出（纯文本 / JSON）
use serde::Serialize;
use std::io::Write;

use crate::aggregator::{Category, Report};
use crate::error::Result;
use crate::scoring::Verdict;

/// 以纯文本写出全部报告
/// - 首行固定为 `Report`
/// - 空报告不输出任何内容（连标题也不输出）
/// - 每个条目一行 `<值>: <N> occurence(s)`，有结论时下一行缩进输出结论
pub fn write_text_report(out: &mut dyn Write, reports: &[Report]) -> Result<()> {
    writeln!(out, "Report")?;
    for report in reports.iter().filter(|r| !r.is_empty()) {
        writeln!(out)?;
        writeln!(out, "{}", report.category.title())?;
        for e in &report.entries {
            let shown = match (report.category, e.value.as_str()) {
                (Category::String, "") => "(empty string)",
                (_, v) => v,
            };
            writeln!(out, "{}: {} occurence(s)", shown, e.occurrences)?;
            if let Some(verdict) = e.verdict {
                writeln!(out, "\t{}", verdict)?;
            }
        }
    }
    Ok(())
}

/// JSON 输出项（对应输出数组的单个元素）
#[derive(Debug, Serialize)]
struct JsonItem<'a> {
    category: Category,
    value: &'a str,
    occurrences: usize,
    verdict: Option<&'static str>,
}

/// 以 JSON 数组写出全部报告条目（按报告顺序展开）
pub fn write_json_report(out: &mut dyn Write, reports: &[Report]) -> Result<()> {
    let items: Vec<JsonItem<'_>> = reports
        .iter()
        .flat_map(|r| {
            r.entries.iter().map(move |e| JsonItem {
                category: r.category,
                value: &e.value,
                occurrences: e.occurrences,
                verdict: e.verdict.as_ref().map(Verdict::as_str),
            })
        })
        .collect();
    serde_json::to_writer(&mut *out, &items)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ReportOptions;
    use crate::scanner::Scanner;
    use pretty_assertions::assert_eq;

    fn render_text(src: &str, opts: &ReportOptions) -> String {
        let mut scanner = Scanner::new();
        scanner.submit_chunk(src);
        let mut buf = Vec::new();
        write_text_report(&mut buf, &scanner.reports(opts)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_report_layout() {
        let text = render_text("x = \"ab\" + \"ab\" + \"ab\" + 5;\n", &ReportOptions::default());
        let expected = "Report\n\
            \n\
            Strings:\n\
            ab: 3 occurence(s)\n\
            \tOptimisable with existing var\n\
            \n\
            Numerical values:\n\
            5: 1 occurence(s)\n\
            \tNon optimisable\n\
            \n\
            Tokens:\n\
            x: 1 occurence(s)\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn terse_report_hides_non_optimisable() {
        let opts = ReportOptions { verbose: false, ..Default::default() };
        let text = render_text("n = 5;\n", &opts);
        assert_eq!(text, "Report\n\nNumerical values:\n5: 1 occurence(s)\n\nTokens:\nn: 1 occurence(s)\n");
    }

    #[test]
    fn empty_input_prints_only_header() {
        assert_eq!(render_text("", &ReportOptions::default()), "Report\n");
    }

    #[test]
    fn empty_string_has_a_label() {
        let text = render_text("s = '';\n", &ReportOptions::default());
        assert!(text.contains("Strings:\n(empty string): 1 occurence(s)\n\tNon optimisable\n"), "{text}");
    }

    #[test]
    fn regex_section_comes_first() {
        let text = render_text("r = /a/g;\n", &ReportOptions::default());
        assert_eq!(text, "Report\n\nRegular expressions:\n/a/g: 1 occurence(s)\n\nTokens:\nr: 1 occurence(s)\n");
    }

    #[test]
    fn json_report() {
        let mut scanner = Scanner::new();
        scanner.submit_chunk("k = 'v';\n");
        let mut buf = Vec::new();
        write_json_report(&mut buf, &scanner.reports(&ReportOptions::default())).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                { "category": "string", "value": "v", "occurrences": 1, "verdict": "Non optimisable" },
                { "category": "token", "value": "k", "occurrences": 1, "verdict": null },
            ])
        );
    }
}
