
use stylecall::{ApiVariant, Options};

test!(
    family_single,
    "font-family: Georgia;",
    "[fontFamily(\"Georgia\")]"
);
test!(
    family_combined_string,
    "font-family: \"Helvetica Neue\", Arial, sans-serif;",
    r#"[fontFamily("\"Helvetica Neue\", Arial, sans-serif")]"#
);
test!(
    family_unquoted_words,
    "font-family: Times New Roman, serif;",
    "[fontFamily(\"Times New Roman, serif\")]"
);
test!(
    family_typed_groups,
    "font-family: \"Helvetica Neue\", Arial, sans-serif;",
    "[[fontFamily(\"Helvetica Neue\"), fontFamily(\"Arial\"), fontFamily(\"sans-serif\")]]",
    Options::default().variant(ApiVariant::Typed)
);
test!(
    family_typed_unquoted_words,
    "font-family: Times New Roman, serif;",
    "[[fontFamily(\"Times New Roman\"), fontFamily(\"serif\")]]",
    Options::default().variant(ApiVariant::Typed)
);
error!(
    family_dimension,
    "font-family: 12px;", "Error: Unexpected value for property `font-family`."
);
error!(
    family_typed_empty_group,
    "font-family: a,, b;",
    "Error: Unexpected value for property `font-family`.",
    Options::default().variant(ApiVariant::Typed)
);

test!(weight_number, "font-weight: 700;", "[fontWeight('num(700))]");
test!(weight_keyword_constant, "font-weight: bold;", "[fontWeight('bold)]");
test!(weight_keyword_reference, "font-weight: normal;", "[fontWeight(normal)]");
test!(
    weight_typed_is_standard,
    "font-weight: 700;",
    "[fontWeight(700)]",
    Options::default().variant(ApiVariant::Typed)
);
error!(
    weight_two_values,
    "font-weight: bold 700;", "Error: Property `font-weight` expects a single value."
);
error!(
    weight_dimension,
    "font-weight: 10px;", "Error: Unexpected value for property `font-weight`."
);

test!(flex_grow_is_float, "flex-grow: 2;", "[flexGrow(2.0)]");
test!(flex_grow_fraction, "flex-grow: 0.5;", "[flexGrow(0.5)]");
test!(flex_shrink_zero, "flex-shrink: 0;", "[flexShrink(0.0)]");
test!(
    flex_grow_typed_is_standard,
    "flex-grow: 2;",
    "[flexGrow(2)]",
    Options::default().variant(ApiVariant::Typed)
);
error!(
    flex_shrink_keyword,
    "flex-shrink: auto;", "Error: Property `flex-shrink` expects a single number."
);
error!(
    flex_grow_two_values,
    "flex-grow: 1 2;", "Error: Property `flex-grow` expects a single number."
);

#[test]
fn empty_family_group_is_spanned_by_its_comma() {
    assert_eq!(
        macros::error_source(
            "font-family: a,, b;",
            &Options::default().variant(ApiVariant::Typed)
        ),
        ","
    );
}
