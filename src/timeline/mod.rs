//! 日志时间线构建
//!
//! 把两类来源（页面内 console/pageError 事件、进程外 stdio 记录）
//! 归并为一条按时间排序的 `LogEntry` 序列，并提供时间窗口过滤。
//!
//! 设计目标：
//! - **纯函数**：同一份录制与窗口，输出完全可重算，可在每次重绘时调用
//! - **逐条降级**：单条坏记录产生空体条目，绝不让整个构建失败

mod build;
mod entry;

pub use build::{build, filter};
pub use entry::{LogBody, LogEntry};
