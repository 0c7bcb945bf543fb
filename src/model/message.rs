//! console 消息 initializer
//!
//! 事件记录里只有 guid；完整的参数列表、类型与来源位置保存在
//! 按上下文划分的 initializer 表中，由 trace 模型持有。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// console 调用的声明类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleKind {
    #[default]
    Log,
    Warning,
    Error,
}

/// 一个 console 参数：预览文本 + 序列化值。
///
/// `value` 用 `serde_json::Value` 表示——它已经是带标签的和类型，
/// 格式化时"是否字符串"的分支是对 `Value::String` 的模式匹配。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleArg {
    pub preview: String,
    #[serde(default)]
    pub value: Value,
}

/// console 调用来源位置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub url: String,
    pub line_number: u32,
}

/// 已解析的 console 消息（initializer）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleMessage {
    #[serde(rename = "type", default)]
    pub kind: ConsoleKind,
    #[serde(default)]
    pub args: Vec<ConsoleArg>,
    /// 无参数可用时的纯文本回退
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

/// guid -> initializer 的只读查询能力。
///
/// 表本身由 trace 模型持有；这里只注入一个查询接口，
/// 构建器因此可以用假表做测试。
pub trait InitializerTable {
    fn resolve(&self, guid: &str) -> Option<&ConsoleMessage>;
}

impl InitializerTable for HashMap<String, ConsoleMessage> {
    fn resolve(&self, guid: &str) -> Option<&ConsoleMessage> {
        self.get(guid)
    }
}
