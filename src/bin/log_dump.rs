//! 日志时间线导出
//!
//! 载入录制快照，构建 console/stdio 时间线，按窗口过滤后打印。

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracelog_rs::format::format_args;
use tracelog_rs::model::{StdioOrigin, TimeWindow, TraceSnapshot, TraceTime};
use tracelog_rs::timeline::{self, LogBody, LogEntry};

#[derive(Debug, Parser)]
#[command(name = "log-dump", about = "录制快照的日志时间线导出")]
struct Args {
    /// 快照 JSON 文件路径
    #[arg(long)]
    trace: PathBuf,
    /// 窗口下界（毫秒，含）
    #[arg(long)]
    min_ms: Option<f64>,
    /// 窗口上界（毫秒，含）
    #[arg(long)]
    max_ms: Option<f64>,
    /// 按 JSON 输出过滤后的条目
    #[arg(long)]
    json: bool,
}

fn severity(entry: &LogEntry) -> &'static str {
    if entry.is_error {
        "error"
    } else if entry.is_warning {
        "warning"
    } else {
        "log"
    }
}

fn entry_line(entry: &LogEntry) -> String {
    let origin = match &entry.body {
        LogBody::BrowserMessage { .. } => "browser",
        LogBody::BrowserError { .. } => "page-error",
        LogBody::NodeMessage {
            origin: StdioOrigin::Stdout,
            ..
        } => "stdout",
        LogBody::NodeMessage {
            origin: StdioOrigin::Stderr,
            ..
        } => "stderr",
    };
    // 浏览器消息走格式化器，其余来源用回退文本
    let text = match &entry.body {
        LogBody::BrowserMessage {
            message: Some(message),
        } if !message.args.is_empty() => format_args(&message.args)
            .iter()
            .map(|run| run.text())
            .collect::<String>(),
        _ => entry.fallback_text().to_string(),
    };
    format!(
        "[{:>10.3}] {:<7} {:<10} {}",
        entry.timestamp.0,
        severity(entry),
        origin,
        text
    )
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let snapshot = match TraceSnapshot::load(&args.trace) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("log-dump: {err}");
            return ExitCode::FAILURE;
        }
    };

    let entries = timeline::build(&snapshot.events, &snapshot.stdio, &snapshot.initializers);
    let window = match (args.min_ms, args.max_ms) {
        (None, None) => None,
        (min, max) => Some(TimeWindow::new(
            TraceTime(min.unwrap_or(f64::NEG_INFINITY)),
            TraceTime(max.unwrap_or(f64::INFINITY)),
        )),
    };
    let visible = timeline::filter(&entries, window);

    if args.json {
        match serde_json::to_string_pretty(visible) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("log-dump: serialize entries: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for entry in visible {
            println!("{}", entry_line(entry));
        }
        println!(
            "total={} visible={}",
            entries.len(),
            visible.len()
        );
    }
    ExitCode::SUCCESS
}
