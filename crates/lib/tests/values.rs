
use stylecall::{ApiVariant, Options};

test!(ident_is_a_reference, "color: red;", "[color(red)]");
test!(
    kebab_case_ident_is_camel_cased,
    "color: rebecca-purple;",
    "[color(rebeccaPurple)]"
);
test!(
    keyword_is_a_tag_in_plain,
    "display: inline-block;",
    "[display('inlineBlock)]"
);
test!(
    keyword_is_a_reference_in_typed,
    "display: inline-block;",
    "[display(inlineBlock)]",
    Options::default().variant(ApiVariant::Typed)
);
test!(cursor_keyword, "cursor: pointer;", "[cursor('pointer)]");
test!(string, "content: \"hi\";", "[content(\"hi\")]");
test!(
    string_with_quote_is_escaped,
    "content: 'say \"hi\"';",
    r#"[content("say \"hi\"")]"#
);
test!(url, "background: url(img.png);", "[background(url(\"img.png\"))]");
test!(
    quoted_url,
    "background: url(\"img.png\");",
    "[background(url(\"img.png\"))]"
);
test!(hash, "color: #fff;", "[color(hex(\"fff\"))]");
test!(percentage, "width: 50%;", "[width(pct(50.0))]");
test!(fractional_percentage, "width: 33.3%;", "[width(pct(33.3))]");
test!(zero, "opacity: 0;", "[opacity(zero)]");
test!(integer, "order: 3;", "[order(3)]");
test!(float, "line-height: 1.5;", "[lineHeight(1.5)]");
test!(px_is_integer, "width: 12px;", "[width(px(12))]");
test!(em_is_float, "width: 2em;", "[width(em(2.0))]");
test!(em_keeps_digits, "width: 1.25em;", "[width(em(1.25))]");
test!(
    seconds_are_float,
    "transition-duration: 2s;",
    "[transitionDuration(s(2.0))]"
);
test!(
    milliseconds_are_integer,
    "transition-duration: 150ms;",
    "[transitionDuration(ms(150))]"
);
test!(
    milliseconds_are_integer_typed,
    "transition-duration: 150ms;",
    "[transitionDuration(ms(150))]",
    Options::default().variant(ApiVariant::Typed)
);
test!(pt_is_integer_in_plain, "font-size: 12pt;", "[fontSize(pt(12))]");
test!(
    pt_is_float_in_typed,
    "font-size: 12pt;",
    "[fontSize(pt(12.0))]",
    Options::default().variant(ApiVariant::Typed)
);
test!(angle_is_float, "rotate: 90deg;", "[rotate(deg(90.0))]");
test!(
    untagged_dimension_without_point_is_integer,
    "grid-template-columns: 1fr 2.5fr;",
    "[gridTemplateColumns(fr(1), fr(2.5))]"
);
test!(
    plain_never_overloads,
    "border: 1px solid red;",
    "[border(px(1), 'solid, red)]"
);
test!(
    typed_overloads_by_arity,
    "border: 1px solid red;",
    "[border3(px(1), solid, red)]",
    Options::default().variant(ApiVariant::Typed)
);
test!(
    typed_single_value_is_not_suffixed,
    "border: none;",
    "[border(none)]",
    Options::default().variant(ApiVariant::Typed)
);
test!(
    unsafe_is_never_overloaded,
    "unsafe: a b;",
    "[unsafe(a, b)]",
    Options::default().variant(ApiVariant::Typed)
);
test!(
    generic_function_zero_is_integer,
    "transform: translate(0, 10px);",
    "[transform(translate(0, px(10)))]"
);
test!(
    generic_function_drops_commas,
    "color: rgba(0, 0, 0, 0.5);",
    "[color(rgba(0, 0, 0, 0.5))]"
);
test!(
    generic_function_name_is_camel_cased,
    "transition-timing-function: cubic-bezier(0.1, 0.7, 1.0, 0.1);",
    "[transitionTimingFunction(cubicBezier(0.1, 0.7, 1.0, 0.1))]"
);
test!(
    nested_functions,
    "width: a(b(c(1)));",
    "[width(a(b(c(1))))]"
);
test!(
    property_name_is_lower_camel_cased,
    "Background-Color: red;",
    "[backgroundColor(red)]"
);
error!(
    operator,
    "width: calc(100% + 10px);", "Error: Unsupported operator `+`."
);
error!(
    delimiter,
    "width: calc(100% - 10px);", "Error: Unsupported delimiter `-`."
);
error!(paren_block, "width: (10px);", "Error: Unsupported block.");
error!(bracket_block, "grid-area: [a];", "Error: Unsupported block.");

#[test]
fn delimiter_error_points_at_the_delimiter() {
    assert_eq!(
        macros::error_source("width: calc(100% - 10px);", &Options::default()),
        "-"
    );
}
