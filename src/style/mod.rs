//! `%c` 指令的 CSS 子集解析
//!
//! 页面 console 输出属于不可信输入，只放行固定前缀的属性。

mod parse;

pub use parse::parse_style;
