mod style_parse;
