//! 录制快照
//!
//! 一次完整录制的 JSON 文档形式：事件流、stdio 流与 initializer 表。
//! 录制是整体载入的，不做增量流式摄取。

use super::event::RecordedEvent;
use super::message::ConsoleMessage;
use super::stdio::StdioRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 完整录制快照。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceSnapshot {
    #[serde(default)]
    pub events: Vec<RecordedEvent>,
    #[serde(default)]
    pub stdio: Vec<StdioRecord>,
    #[serde(default)]
    pub initializers: HashMap<String, ConsoleMessage>,
}

/// 快照载入失败。
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl TraceSnapshot {
    /// 从 JSON 文件载入快照。
    pub fn load(path: &Path) -> Result<TraceSnapshot, SnapshotError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
