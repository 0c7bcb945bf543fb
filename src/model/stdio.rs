//! 进程标准流记录
//!
//! 来自浏览器进程外部的 stdout/stderr 捕获。注意时间字段叫
//! `timestamp` 而不是事件记录的 `time`——两条采集链路各有各的命名。

use super::time::TraceTime;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// 输出来源。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StdioOrigin {
    Stdout,
    Stderr,
}

/// 一条 stdio 记录：`text` 与 `base64` 互斥。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StdioRecord {
    pub timestamp: TraceTime,
    #[serde(rename = "type")]
    pub origin: StdioOrigin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
}

impl StdioRecord {
    /// 解出可显示文本：优先 `text`，否则解码 `base64`。
    ///
    /// 解码失败或两个字段都缺失时返回 `None`（坏记录不中断整个构建）。
    pub fn payload_text(&self) -> Option<String> {
        if let Some(text) = &self.text {
            return Some(text.clone());
        }
        let encoded = self.base64.as_deref()?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .ok()?;
        Some(String::from_utf8_lossy(&bytes).into_owned())
    }
}
