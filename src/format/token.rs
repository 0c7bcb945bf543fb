//! 格式化输出单元
//!
//! token 是带样式的文本片段；run 是共享一个 `%c` 样式的 token 段。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CSS 属性名（camelCase）到值的映射。
///
/// 用 BTreeMap 保证序列化与测试的迭代顺序确定。
pub type StyleMap = BTreeMap<String, String>;

/// 非字符串操作数的高亮色（devtools 数字字面量的惯用色）。
pub const NUMERIC_TOKEN_COLOR: &str = "rgb(28, 0, 207)";

/// 一个带样式的文本片段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatToken {
    pub text: String,
    /// token 自身的样式（如数字高亮）；run 的 `%c` 样式另算
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl FormatToken {
    /// 无样式文本片段。
    pub fn plain(text: impl Into<String>) -> FormatToken {
        FormatToken {
            text: text.into(),
            style: StyleMap::new(),
        }
    }

    /// 非字符串操作数的高亮片段。
    pub fn numeric(text: impl Into<String>) -> FormatToken {
        let mut style = StyleMap::new();
        style.insert("color".to_string(), NUMERIC_TOKEN_COLOR.to_string());
        FormatToken {
            text: text.into(),
            style,
        }
    }
}

/// 一段共享样式的 token 序列，以 `%c` 为界。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyledRun {
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
    pub tokens: Vec<FormatToken>,
}

impl StyledRun {
    /// run 内全部文本拼接（渲染回退与测试用）。
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}
