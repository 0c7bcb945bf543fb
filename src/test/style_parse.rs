use crate::style::parse_style;

#[test]
fn parse_style_keeps_allow_listed_properties() {
    let style = parse_style("color:blue; background-color: #fff");
    assert_eq!(style.get("color").map(String::as_str), Some("blue"));
    assert_eq!(
        style.get("backgroundColor").map(String::as_str),
        Some("#fff")
    );
    assert_eq!(style.len(), 2);
}

#[test]
fn parse_style_drops_properties_outside_the_allow_list() {
    assert!(parse_style("not-a-property:1").is_empty());
    assert!(parse_style("position:absolute; z-index: 9").is_empty());
}

#[test]
fn parse_style_trims_whitespace_around_keys_and_values() {
    let style = parse_style("  font-weight :  bold ; text-decoration:underline");
    assert_eq!(style.get("fontWeight").map(String::as_str), Some("bold"));
    assert_eq!(
        style.get("textDecoration").map(String::as_str),
        Some("underline")
    );
}

#[test]
fn parse_style_never_panics_on_garbage() {
    assert!(parse_style("garbage").is_empty());
    assert!(parse_style(";;;").is_empty());
    assert!(parse_style(":::").is_empty());
    assert!(parse_style("").is_empty());
    // 有值没键的片段也只是被丢弃
    assert!(parse_style(":red").is_empty());
}

#[test]
fn parse_style_converts_hyphen_case_to_camel_case() {
    let style = parse_style("border-bottom-color: teal");
    assert_eq!(
        style.get("borderBottomColor").map(String::as_str),
        Some("teal")
    );
}
