
use stylecall::{ApiVariant, Options};

test!(
    single_element,
    "a { color: red; }",
    "[selector(\"a\", [color(red)])]"
);
test!(
    descendant,
    "div span { color: red; }",
    "[selector(\"div span\", [color(red)])]"
);
test!(
    pseudo_class_binds_to_both_sides,
    "a:hover { color: red; }",
    "[selector(\"a:hover\", [color(red)])]"
);
test!(
    pseudo_class_after_descendant,
    "ul li:first-child { margin: 0; }",
    "[selector(\"ul li:first-child\", [margin(zero)])]"
);
test!(
    spaced_colon_still_binds,
    "a : hover { color: red; }",
    "[selector(\"a:hover\", [color(red)])]"
);
test!(
    colon_binds_to_the_preceding_token,
    "a :hover { color: red; }",
    "[selector(\"a:hover\", [color(red)])]"
);
test!(
    colon_binds_to_the_following_token,
    "a: hover { color: red; }",
    "[selector(\"a:hover\", [color(red)])]"
);
test!(
    colon_binds_across_descendants,
    "nav a :hover span { color: red; }",
    "[selector(\"nav a:hover span\", [color(red)])]"
);
test!(
    double_colon_pseudo_element,
    "p::first-line { color: red; }",
    "[selector(\"p::first-line\", [color(red)])]"
);
test!(
    id_selector,
    "#main { color: red; }",
    "[selector(\"#main\", [color(red)])]"
);
test!(
    functional_pseudo_class,
    "li:nth-child(2) { color: red; }",
    "[selector(\"li:nth-child(2)\", [color(red)])]"
);
test!(
    empty_block,
    "a {}",
    "[selector(\"a\", [])]"
);
test!(
    several_declarations,
    "a { color: red; padding: 1px 2px; }",
    "[selector(\"a\", [color(red), padding2(v = px(1), h = px(2))])]"
);
test!(
    rules_in_order,
    "a { color: red; } b { color: blue; }",
    "[selector(\"a\", [color(red)]), selector(\"b\", [color(blue)])]"
);
test!(
    bare_declarations_are_spliced,
    "color: red; a { color: blue; } width: 1px;",
    "[color(red), selector(\"a\", [color(blue)]), width(px(1))]"
);
test!(empty_stylesheet, "", "[]");
test!(
    select_in_typed,
    "a:hover { color: red; }",
    "[select(\"a:hover\", [color(red)])]",
    Options::default().variant(ApiVariant::Typed)
);
error!(
    unsupported_at_rule,
    "@media print { color: red; }", "Error: At-rule `@media` is not supported."
);
error!(
    unsupported_at_rule_in_block,
    "a { @font-face { src: url(a.woff); } }",
    "Error: At-rule `@font-face` is not supported."
);
error!(
    error_in_nested_declaration_aborts,
    "a { color: red; } b { width: calc(1px + 2px); }",
    "Error: Unsupported operator `+`."
);

#[test]
fn unsupported_at_rule_is_spanned_by_its_name() {
    assert_eq!(
        macros::error_source("@media print { color: red; }", &Options::default()),
        "media"
    );
}
