
use stylecall::{
    ast::{DeclarationItem, Rule},
    ApiVariant, Expr, Options,
};

test!(
    deep_nesting_within_limit,
    "width: a(b(c(1)));",
    "[width(a(b(c(1))))]",
    Options::default().max_nesting_depth(3)
);
error!(
    deep_nesting_over_limit,
    "width: a(b(c(1)));",
    "Error: Value is nested too deeply.",
    Options::default().max_nesting_depth(2)
);

#[test]
fn pathological_nesting_is_an_error() {
    let depth = 300;
    let input = format!("width: {}1{};", "f(".repeat(depth), ")".repeat(depth));
    let err = macros::compile(&input, &Options::default()).expect_err("did not fail");
    assert_eq!(err.message(), "Value is nested too deeply.");
}

test!(
    keyframes_nested_within_limit,
    "@keyframes a { from { @keyframes b { from { color: red; } } } }",
    "[keyframes([(0, [keyframes([(0, [color(red)])])])])]"
);
error!(
    keyframes_nested_over_limit,
    "@keyframes a { from { @keyframes b { from { @keyframes c { from { color: red; } } } } } }",
    "Error: Value is nested too deeply.",
    Options::default().max_nesting_depth(2)
);

#[test]
fn pathological_keyframes_nesting_is_an_error() {
    let depth = 300;
    let input = format!(
        "{}color: red;{}",
        "@keyframes k { from { ".repeat(depth),
        " } }".repeat(depth)
    );
    let err = macros::compile(&input, &Options::default()).expect_err("did not fail");
    assert_eq!(err.message(), "Value is nested too deeply.");
}

#[test]
fn compile_single_rule() {
    let (map, stylesheet) = macros::read_stylesheet("a:hover { color: red; }");
    let expr = stylecall::compile_rule(&stylesheet.rules[0], &map, &Options::default())
        .expect("failed to compile");
    assert_eq!(expr.node.to_string(), "selector(\"a:hover\", [color(red)])");
    assert_eq!(expr.node.callee(), Some("selector"));
}

#[test]
fn compile_single_declaration() {
    let (map, stylesheet) = macros::read_stylesheet("margin: 1px 2px;");
    let Rule::Style(rule) = &stylesheet.rules[0] else {
        panic!("expected a style rule");
    };
    let DeclarationItem::Declaration(declaration) = &rule.block[0] else {
        panic!("expected a declaration");
    };

    let expr = stylecall::compile_declaration(
        declaration,
        &map,
        &Options::default().variant(ApiVariant::Typed),
    )
    .expect("failed to compile");

    assert_eq!(expr.node.to_string(), "margin2(v = px(1), h = px(2))");
    let labels: Vec<_> = expr.node.args().iter().map(|arg| arg.label).collect();
    assert_eq!(labels, vec![Some("v"), Some("h")]);
}

#[test]
fn spans_are_carried_through() {
    let (map, stylesheet) = macros::read_stylesheet("width: 12.5em;");
    let expr = stylecall::compile_stylesheet(&stylesheet, &map, &Options::default())
        .expect("failed to compile");

    let Expr::List(decls) = &expr.node else {
        panic!("expected a list");
    };
    let file = map.find_file(decls[0].span.low());
    assert_eq!(file.source_slice(decls[0].span), "width: 12.5em");

    let Expr::Call { callee, args } = &decls[0].node else {
        panic!("expected a call");
    };
    assert_eq!(file.source_slice(callee.span), "width");

    let dimension = &args[0].value;
    assert_eq!(file.source_slice(dimension.span), "12.5em");
    let Expr::Call { callee, args } = &dimension.node else {
        panic!("expected a call");
    };
    assert_eq!(file.source_slice(callee.span), "em");
    assert_eq!(file.source_slice(args[0].value.span), "12.5");
}

#[test]
fn translating_twice_is_identical() {
    let input = "a { transition: color 0.2s ease-in, opacity 1s; } @keyframes k { from { opacity: 0; } } box-shadow: inset 0 1px red;";
    let (map, stylesheet) = macros::read_stylesheet(input);
    let options = Options::default();

    let first = stylecall::compile_stylesheet(&stylesheet, &map, &options).expect(input);
    let second = stylecall::compile_stylesheet(&stylesheet, &map, &options).expect(input);

    assert_eq!(first, second);
}

#[test]
fn variants_differ_only_where_defined() {
    let input = "color: red; width: 10px;";
    let plain = macros::compile(input, &Options::default()).expect(input);
    let typed = macros::compile(input, &Options::default().variant(ApiVariant::Typed))
        .expect(input);
    assert_eq!(plain, typed);
}
