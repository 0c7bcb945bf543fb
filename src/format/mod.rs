//! console 消息格式化
//!
//! 复刻浏览器 console 的格式指令语义（`%s %d %i %f %o %O %c %%`）：
//! 按位置消费参数、按值类型着色、`%c` 切换样式段。
//! 输出是带样式的 run 序列，交给外部渲染层绘制。

mod message;
mod token;

pub use message::format_args;
pub use token::{FormatToken, StyleMap, StyledRun, NUMERIC_TOKEN_COLOR};
