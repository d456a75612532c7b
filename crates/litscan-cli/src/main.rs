use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use litscan_core::{load_scoring_config, scan_reader, write_json_report, write_text_report, ReportOptions, Scanner};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info};

/// 命令行入口（基于 clap）；不带参数时从标准输入读取并输出全部文本报告
#[derive(Parser, Debug)]
#[command(name = "litscan", version, about = "统计源码中重复的字面量并判断是否值得提取为变量")]
struct Cli {
    /// 输入文件（缺省读取标准输入）
    #[arg(long)]
    input: Option<PathBuf>,

    /// 输出格式
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// 省略 "Non optimisable" 结论
    #[arg(long)]
    terse: bool,

    /// 阈值配置文件（TOML）
    #[arg(long)]
    thresholds: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug、trace）
    init_tracing();
    let cli = Cli::parse();

    let mut opts = ReportOptions { verbose: !cli.terse, ..Default::default() };
    if let Some(path) = &cli.thresholds {
        opts.scoring = load_scoring_config(path).context("load thresholds")?;
    }

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| format!("open input {}", path.display()))?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut scanner = Scanner::new();
    // 读取失败视为致命错误：记录日志后以非零状态退出
    let stats = match scan_reader(reader, &mut scanner) {
        Ok(stats) => stats,
        Err(e) => {
            error!(error = %e, "failed to read input");
            std::process::exit(1);
        }
    };
    info!(lines = stats.lines_read, chars = stats.chars_scanned, scope_depth = scanner.scope_depth(), "scan finished");

    let reports = scanner.reports(&opts);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format {
        Format::Text => write_text_report(&mut out, &reports).context("write text report")?,
        Format::Json => write_json_report(&mut out, &reports).context("write json report")?,
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只输出报告
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).with_writer(io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
