//! 录制事件
//!
//! 页面内捕获的事件记录，按 `method` 字段区分类型。
//! 日志时间线只关心 `console` 与 `pageError`，其余类型由别的子系统处理。

use super::time::TraceTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 录制事件（按 method 标签区分的联合类型）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum RecordedEvent {
    /// 页面内 console 调用：事件本体只带 guid，完整参数在 initializer 表里
    Console { time: TraceTime, message: MessageRef },
    /// 页面错误
    PageError {
        time: TraceTime,
        error: SerializedError,
    },
    /// 其余事件类型与日志时间线无关
    #[serde(other)]
    Ignored,
}

/// 对 console 消息 initializer 的轻量引用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    pub guid: String,
}

/// 序列化后的页面错误：结构化的 message/stack，或任意序列化值。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SerializedError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub message: String,
    #[serde(default)]
    pub stack: Option<String>,
}
