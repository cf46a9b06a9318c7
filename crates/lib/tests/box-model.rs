
use stylecall::{ApiVariant, Options};

test!(padding_single_value, "padding: 10px;", "[padding(px(10))]");
test!(padding_zero, "padding: 0;", "[padding(zero)]");
test!(
    padding_two_values,
    "padding: 10px 20px;",
    "[padding2(v = px(10), h = px(20))]"
);
test!(
    padding_two_values_typed,
    "padding: 10px 20px;",
    "[padding2(v = px(10), h = px(20))]",
    Options::default().variant(ApiVariant::Typed)
);
test!(
    margin_three_values,
    "margin: 1px 2px 3px;",
    "[margin3(top = px(1), h = px(2), bottom = px(3))]"
);
test!(
    margin_four_values,
    "margin: 1px 2px 3px 4px;",
    "[margin4(top = px(1), right = px(2), bottom = px(3), left = px(4))]"
);
test!(
    margin_four_values_typed,
    "margin: 1px 2px 3px 4px;",
    "[margin4(top = px(1), right = px(2), bottom = px(3), left = px(4))]",
    Options::default().variant(ApiVariant::Typed)
);
test!(
    margin_mixed_units_and_keywords,
    "margin: 0 auto;",
    "[margin2(v = zero, h = auto)]"
);
test!(
    margin_negative,
    "margin: -4px 1.5em;",
    "[margin2(v = px(-4), h = em(1.5))]"
);
test!(
    padding_inside_rule,
    "a { padding: 1px 2px; }",
    "[selector(\"a\", [padding2(v = px(1), h = px(2))])]"
);
error!(
    margin_five_values,
    "margin: 1px 2px 3px 4px 5px;", "Error: Property `margin` cannot have more than 4 values."
);
error!(
    padding_five_values_typed,
    "padding: 1px 2px 3px 4px 5px;",
    "Error: Property `padding` cannot have more than 4 values.",
    Options::default().variant(ApiVariant::Typed)
);

#[test]
fn fifth_edge_is_the_error_span() {
    assert_eq!(
        macros::error_source("margin: 1px 2px 3px 4px 5px;", &Options::default()),
        "5px"
    );
}
