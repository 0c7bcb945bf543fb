//! CSS 声明列表解析
//!
//! 整个操作是全函数：任何畸形输入都得到空映射，绝不向外抛错。

use crate::format::StyleMap;

/// 允许通过的属性名前缀（安全白名单）。
const ALLOWED_PREFIXES: &[&str] = &[
    "background",
    "border",
    "color",
    "font",
    "line",
    "margin",
    "padding",
    "text",
];

/// 把 `%c` 的声明文本解析为属性映射。
///
/// 按 `;` 切分声明，按第一个 `:` 切分键值并去除两侧空白；
/// 键不在白名单前缀内、或没有 `:` 的片段直接丢弃。
pub fn parse_style(declaration_text: &str) -> StyleMap {
    let mut style = StyleMap::new();
    for segment in declaration_text.split(';') {
        let Some((key, value)) = segment.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if !ALLOWED_PREFIXES.iter().any(|p| key.starts_with(p)) {
            continue;
        }
        style.insert(camel_case(key), value.to_string());
    }
    style
}

/// 连字符命名转渲染端的 camelCase：`background-color` -> `backgroundColor`。
fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
