//! How CSS names become call names
//!
//! Everything that differs between the two API variants only in naming is
//! kept here as data.

use phf::{phf_map, phf_set, Map, Set};

use crate::ApiVariant;

/// Keywords the plain API exposes as symbolic tags rather than named values
static PLAIN_VARIANT_CONSTANTS: Set<&'static str> = phf_set! {
    // selectors
    "hover", "active", "focus", "visited", "link", "checked", "disabled",
    "first-child", "last-child", "only-child",
    // cursor
    "pointer", "crosshair", "help", "wait", "progress", "text", "vertical-text",
    "alias", "copy", "move", "no-drop", "not-allowed", "grab", "grabbing", "all-scroll",
    "col-resize", "row-resize", "n-resize", "e-resize", "s-resize", "w-resize",
    "ne-resize", "nw-resize", "se-resize", "sw-resize", "ew-resize", "ns-resize",
    "nesw-resize", "nwse-resize", "zoom-in", "zoom-out", "context-menu", "cell",
    // list-style
    "disc", "circle", "square", "decimal", "decimal-leading-zero", "lower-roman",
    "upper-roman", "lower-greek", "lower-alpha", "upper-alpha", "lower-latin",
    "upper-latin", "inside", "outside",
    // outline-style
    "dotted", "dashed", "solid", "double", "groove", "ridge", "outset",
    // transform-style
    "flat", "preserve-3d",
    // font-variant
    "small-caps", "all-small-caps", "petite-caps", "unicase", "titling-caps",
    // step timing
    "step-start", "step-end", "jump-start", "jump-end", "jump-none", "jump-both",
    // display
    "block", "inline", "inline-block", "flex", "inline-flex", "grid", "inline-grid",
    "table", "table-row", "table-cell", "list-item", "contents", "flow-root",
    // font-weight
    "bold", "bolder", "lighter",
};

/// Shorthand expansions that replace the standard call path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expansion {
    Animation,
    BoxShadow,
    TextShadow,
    Transition,
    FontFamily,
    /// `padding` and `margin`, labeled by how many values were given
    BoxEdges,
    ZIndex,
    /// `flex-grow` and `flex-shrink`
    FlexFactor,
    FontWeight,
    /// Multiple transforms collapse into one list argument
    TransformList,
    /// Exactly two values, labeled with the given pair
    LabeledPair(&'static [&'static str; 2]),
    /// `flex` with exactly three values
    FlexTriple,
    /// `border`/`outline` with exactly two values
    LineShorthand,
}

const VERTICAL_HORIZONTAL: &[&str; 2] = &["v", "h"];
const HORIZONTAL_VERTICAL: &[&str; 2] = &["h", "v"];

static SHARED_EXPANSIONS: Map<&'static str, Expansion> = phf_map! {
    "animation" => Expansion::Animation,
    "box-shadow" => Expansion::BoxShadow,
    "text-shadow" => Expansion::TextShadow,
    "transition" => Expansion::Transition,
    "font-family" => Expansion::FontFamily,
    "padding" => Expansion::BoxEdges,
    "margin" => Expansion::BoxEdges,
};

static PLAIN_EXPANSIONS: Map<&'static str, Expansion> = phf_map! {
    "flex-grow" => Expansion::FlexFactor,
    "flex-shrink" => Expansion::FlexFactor,
    "font-weight" => Expansion::FontWeight,
    "transform" => Expansion::TransformList,
};

static TYPED_EXPANSIONS: Map<&'static str, Expansion> = phf_map! {
    "z-index" => Expansion::ZIndex,
    "border-top-left-radius" => Expansion::LabeledPair(VERTICAL_HORIZONTAL),
    "border-top-right-radius" => Expansion::LabeledPair(VERTICAL_HORIZONTAL),
    "border-bottom-left-radius" => Expansion::LabeledPair(VERTICAL_HORIZONTAL),
    "border-bottom-right-radius" => Expansion::LabeledPair(VERTICAL_HORIZONTAL),
    "background-position" => Expansion::LabeledPair(HORIZONTAL_VERTICAL),
    "transform-origin" => Expansion::LabeledPair(HORIZONTAL_VERTICAL),
    "flex" => Expansion::FlexTriple,
    "border" => Expansion::LineShorthand,
    "outline" => Expansion::LineShorthand,
};

/// The special expansion for a property, if it has one under `variant`
pub(crate) fn expansion_for(property: &str, variant: ApiVariant) -> Option<Expansion> {
    let property = property.to_ascii_lowercase();
    let per_variant = match variant {
        ApiVariant::Plain => &PLAIN_EXPANSIONS,
        ApiVariant::Typed => &TYPED_EXPANSIONS,
    };

    SHARED_EXPANSIONS
        .get(property.as_str())
        .or_else(|| per_variant.get(property.as_str()))
        .copied()
}

/// `border-top-left-radius` -> `borderTopLeftRadius`
pub(crate) fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (idx, segment) in name.split('-').enumerate() {
        if idx == 0 {
            out.push_str(&segment.to_lowercase());
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Whether calls for `property` select their overload by arity
pub(crate) fn is_overloaded(property: &str, variant: ApiVariant) -> bool {
    match variant {
        ApiVariant::Plain => false,
        ApiVariant::Typed => !property.eq_ignore_ascii_case("unsafe"),
    }
}

/// Append the arity to `base` when more than one value selects an overload
pub(crate) fn with_arity(base: String, arity: usize) -> String {
    if arity > 1 {
        format!("{}{}", base, arity)
    } else {
        base
    }
}

/// The call name for a property invoked with `arity` top level values
pub(crate) fn call_name(property: &str, variant: ApiVariant, arity: usize) -> String {
    let base = camel_case(property);
    if is_overloaded(property, variant) {
        with_arity(base, arity)
    } else {
        base
    }
}

pub(crate) fn is_variant_constant(ident: &str, variant: ApiVariant) -> bool {
    match variant {
        ApiVariant::Plain => PLAIN_VARIANT_CONSTANTS.contains(ident.to_ascii_lowercase().as_str()),
        ApiVariant::Typed => false,
    }
}

impl ApiVariant {
    /// The call that pairs a selector with its declarations
    pub(crate) fn selector_fn(self) -> &'static str {
        match self {
            Self::Plain => "selector",
            Self::Typed => "select",
        }
    }
}
