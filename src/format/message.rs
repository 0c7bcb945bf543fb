//! 格式指令解释器
//!
//! 识别 `%s %d %i %f %o %O %c %%` 八种指令；其余 `%x` 组合原样
//! 保留为普通文本。参数按指令出现顺序从 tail 中逐个消费。

use super::token::{FormatToken, StyleMap, StyledRun};
use crate::model::ConsoleArg;
use crate::style::parse_style;
use serde_json::Value;
use tracing::trace;

/// run 累积器：已关闭的 run 移入 `runs`，不再被引用或修改。
#[derive(Default)]
struct RunBuilder {
    runs: Vec<StyledRun>,
    current: StyledRun,
}

impl RunBuilder {
    fn push(&mut self, token: FormatToken) {
        self.current.tokens.push(token);
    }

    /// 把非空的字面量缓冲刷成一个无样式 token。
    fn flush_literal(&mut self, literal: &mut String) {
        if !literal.is_empty() {
            let text = std::mem::take(literal);
            self.push(FormatToken::plain(text));
        }
    }

    /// `%c`：关闭当前 run（即使为空），以新样式开启下一个。
    fn switch_run(&mut self, style: StyleMap) {
        let closed = std::mem::take(&mut self.current);
        self.runs.push(closed);
        self.current.style = style;
    }

    /// 追加 token，若当前 run 已有内容则先插入一个空格分隔 token。
    fn push_spaced(&mut self, token: FormatToken) {
        if !self.current.tokens.is_empty() {
            self.push(FormatToken::plain(" "));
        }
        self.push(token);
    }

    fn finish(mut self) -> Vec<StyledRun> {
        self.runs.push(self.current);
        self.runs
    }
}

/// 按值类型决定 token 样式：非字符串操作数高亮。
fn token_for(arg: &ConsoleArg) -> FormatToken {
    if arg.value.is_string() {
        FormatToken::plain(arg.preview.as_str())
    } else {
        FormatToken::numeric(arg.preview.as_str())
    }
}

/// 把一次 console 调用的参数序列格式化为带样式的 run 序列。
///
/// 单参数调用不做指令扫描，预览文本原样输出。
pub fn format_args(args: &[ConsoleArg]) -> Vec<StyledRun> {
    if args.is_empty() {
        return Vec::new();
    }
    if let [only] = args {
        return vec![StyledRun {
            style: StyleMap::new(),
            tokens: vec![FormatToken::plain(only.preview.as_str())],
        }];
    }

    // 第一个参数是含 % 的字符串才被当作格式串，否则全部参数都是 tail
    let (fmt, tail) = match &args[0].value {
        Value::String(s) if s.contains('%') => (Some(s.as_str()), &args[1..]),
        _ => (None, args),
    };

    let mut builder = RunBuilder::default();
    let mut tail = tail.iter();

    if let Some(fmt) = fmt {
        trace!(fmt, "按格式串替换参数");
        let mut literal = String::new();
        let mut chars = fmt.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            match chars.peek().copied() {
                Some('%') => {
                    chars.next();
                    builder.flush_literal(&mut literal);
                    builder.push(FormatToken::plain("%"));
                }
                Some('s' | 'd' | 'i' | 'f' | 'o' | 'O') => {
                    chars.next();
                    builder.flush_literal(&mut literal);
                    // tail 耗尽时替换值为空显示
                    match tail.next() {
                        Some(arg) => builder.push(token_for(arg)),
                        None => builder.push(FormatToken::plain("")),
                    }
                }
                Some('c') => {
                    chars.next();
                    builder.flush_literal(&mut literal);
                    let style = tail
                        .next()
                        .map(|arg| parse_style(&arg.preview))
                        .unwrap_or_default();
                    builder.switch_run(style);
                }
                // 未识别的指令字符：% 与后续字符都保留为字面量
                _ => literal.push('%'),
            }
        }
        builder.flush_literal(&mut literal);
    }

    // 剩余未消费的 tail 参数逐个追加到最后一个 run
    for arg in tail {
        builder.push_spaced(token_for(arg));
    }

    builder.finish()
}
