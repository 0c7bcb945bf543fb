//! 日志条目
//!
//! 时间线的最小单元。构建完成后不可变；窗口过滤只产生子序列，
//! 不修改条目本身。

use crate::model::{ConsoleMessage, SerializedError, StdioOrigin, TraceTime};
use serde::{Deserialize, Serialize};

/// 条目内容（三选一）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogBody {
    /// 页面内 console 调用；initializer 解析失败时为 None
    BrowserMessage { message: Option<ConsoleMessage> },
    /// 页面错误
    BrowserError { error: SerializedError },
    /// 进程外输出；坏记录（text/base64 都缺）时 text 为 None
    NodeMessage {
        origin: StdioOrigin,
        text: Option<String>,
    },
}

/// 一条日志条目。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: TraceTime,
    pub is_error: bool,
    pub is_warning: bool,
    #[serde(flatten)]
    pub body: LogBody,
}

impl LogEntry {
    /// 可直接显示的回退文本（渲染层可能改用格式化结果）。
    pub fn fallback_text(&self) -> &str {
        match &self.body {
            LogBody::BrowserMessage { message } => {
                message.as_ref().map(|m| m.text.as_str()).unwrap_or("")
            }
            LogBody::BrowserError { error } => match (&error.error, &error.value) {
                (Some(details), _) => details.message.as_str(),
                (None, Some(value)) => value.as_str().unwrap_or(""),
                (None, None) => "",
            },
            LogBody::NodeMessage { text, .. } => text.as_deref().unwrap_or(""),
        }
    }
}
