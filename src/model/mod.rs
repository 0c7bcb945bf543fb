//! 录制数据模型
//!
//! 此模块包含回放的不可变数据模型：录制事件、stdio 记录、
//! console 消息的 initializer 表与时间类型。

// 子模块声明
mod event;
mod message;
mod snapshot;
mod stdio;
mod time;

// 重新导出公共接口
pub use event::{ErrorDetails, MessageRef, RecordedEvent, SerializedError};
pub use message::{ConsoleArg, ConsoleKind, ConsoleMessage, InitializerTable, SourceLocation};
pub use snapshot::{SnapshotError, TraceSnapshot};
pub use stdio::{StdioOrigin, StdioRecord};
pub use time::{TimeWindow, TraceTime};
