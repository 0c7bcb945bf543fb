//! 时间线构建与窗口过滤
//!
//! 先按存储顺序展开两个来源，再做稳定排序：时间相同的条目保持
//! 拼接顺序（浏览器事件在前，stdio 在后），这是规定的并列次序。

use super::entry::{LogBody, LogEntry};
use crate::model::{
    ConsoleKind, InitializerTable, RecordedEvent, StdioOrigin, StdioRecord, TimeWindow,
};
use tracing::{debug, trace};

/// 从录制事件与 stdio 记录构建完整的日志时间线。
#[tracing::instrument(skip_all, fields(events = events.len(), stdio = stdio.len()))]
pub fn build(
    events: &[RecordedEvent],
    stdio: &[StdioRecord],
    table: &dyn InitializerTable,
) -> Vec<LogEntry> {
    let mut entries = Vec::new();

    for event in events {
        match event {
            RecordedEvent::Console { time, message } => {
                let resolved = table.resolve(&message.guid).cloned();
                if resolved.is_none() {
                    trace!(guid = %message.guid, "initializer 缺失，条目降级为空体");
                }
                let kind = resolved.as_ref().map(|m| m.kind).unwrap_or_default();
                entries.push(LogEntry {
                    timestamp: *time,
                    is_error: kind == ConsoleKind::Error,
                    is_warning: kind == ConsoleKind::Warning,
                    body: LogBody::BrowserMessage { message: resolved },
                });
            }
            RecordedEvent::PageError { time, error } => {
                entries.push(LogEntry {
                    timestamp: *time,
                    is_error: true,
                    is_warning: false,
                    body: LogBody::BrowserError {
                        error: error.clone(),
                    },
                });
            }
            // 其余事件类型由别的子系统处理
            RecordedEvent::Ignored => {}
        }
    }

    for record in stdio {
        let text = record.payload_text();
        if text.is_none() {
            trace!("stdio 记录缺少 text/base64，条目降级为空体");
        }
        entries.push(LogEntry {
            timestamp: record.timestamp,
            is_error: record.origin == StdioOrigin::Stderr,
            is_warning: false,
            body: LogBody::NodeMessage {
                origin: record.origin,
                text,
            },
        });
    }

    // Vec::sort_by 是稳定排序，时间相同的条目保持上面的拼接顺序
    entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    debug!(entries = entries.len(), "时间线构建完成");
    entries
}

/// 按时间窗口取连续子序列；无窗口时原样返回同一个切片。
pub fn filter(entries: &[LogEntry], window: Option<TimeWindow>) -> &[LogEntry] {
    let Some(window) = window else {
        return entries;
    };
    // 条目已按时间排序，窗口内的条目必然连续，二分定位两端
    let start = entries.partition_point(|e| e.timestamp < window.minimum);
    let end = entries.partition_point(|e| e.timestamp <= window.maximum);
    // 倒置窗口（minimum > maximum）选不出任何条目
    if start >= end { &[] } else { &entries[start..end] }
}
