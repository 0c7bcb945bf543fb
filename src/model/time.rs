//! 录制时间类型
//!
//! 定义录制相对时间及时间窗口。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 录制相对时间（毫秒，单调递增的浮点数）。
///
/// `f64` 本身没有全序；这里用 `total_cmp` 补上 `Eq`/`Ord`，
/// 以便条目可以稳定排序、窗口可以二分定位。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceTime(pub f64);

impl TraceTime {
    pub const ZERO: TraceTime = TraceTime(0.0);

    pub fn from_millis(ms: f64) -> TraceTime {
        TraceTime(ms)
    }
}

impl Eq for TraceTime {}

impl Ord for TraceTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for TraceTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 当前激活的时间窗口（两端闭区间）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub minimum: TraceTime,
    pub maximum: TraceTime,
}

impl TimeWindow {
    pub fn new(minimum: TraceTime, maximum: TraceTime) -> TimeWindow {
        TimeWindow { minimum, maximum }
    }

    /// 判断时间点是否落在窗口内（含端点）。
    pub fn contains(&self, t: TraceTime) -> bool {
        self.minimum <= t && t <= self.maximum
    }
}
