//! Shape predicates over single component values
//!
//! Every predicate is total over all [`ComponentValue`] shapes and looks only
//! at the value itself, never at where it appears.

use phf::{phf_set, Set};

use crate::ast::{ComponentValue, DimensionKind};

static LENGTH_UNITS: Set<&'static str> = phf_set! {
    "px", "em", "rem", "ex", "ch", "vw", "vh", "vmin", "vmax",
    "cm", "mm", "q", "in", "pt", "pc",
};

static TIME_UNITS: Set<&'static str> = phf_set! { "s", "ms" };

static ANGLE_UNITS: Set<&'static str> = phf_set! { "deg", "rad", "grad", "turn" };

static TIMING_FUNCTION_KEYWORDS: Set<&'static str> = phf_set! {
    "ease", "ease-in", "ease-out", "ease-in-out", "linear", "step-start", "step-end",
};

static TIMING_FUNCTION_NAMES: Set<&'static str> = phf_set! { "cubic-bezier", "steps", "frames" };

static ANIMATION_DIRECTIONS: Set<&'static str> = phf_set! {
    "normal", "reverse", "alternate", "alternate-reverse",
};

static ANIMATION_FILL_MODES: Set<&'static str> = phf_set! { "none", "forwards", "backwards", "both" };

static ANIMATION_PLAY_STATES: Set<&'static str> = phf_set! { "running", "paused" };

static LINE_WIDTHS: Set<&'static str> = phf_set! { "thin", "medium", "thick" };

static LINE_STYLES: Set<&'static str> = phf_set! {
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
};

static COLOR_FUNCTIONS: Set<&'static str> = phf_set! { "rgb", "rgba", "hsl", "hsla" };

fn ident_in(value: &ComponentValue, set: &Set<&'static str>) -> bool {
    match value {
        ComponentValue::Ident(name) => set.contains(name.to_ascii_lowercase().as_str()),
        _ => false,
    }
}

fn function_in(value: &ComponentValue, set: &Set<&'static str>) -> bool {
    match value {
        ComponentValue::Function { name, .. } => set.contains(name.to_ascii_lowercase().as_str()),
        _ => false,
    }
}

fn has_unit(value: &ComponentValue, kind: DimensionKind, units: &Set<&'static str>) -> bool {
    match value {
        ComponentValue::FloatDimension { kind: k, .. } => *k == kind,
        ComponentValue::Dimension { unit, .. } => {
            units.contains(unit.to_ascii_lowercase().as_str())
        }
        _ => false,
    }
}

pub(crate) fn is_time(value: &ComponentValue) -> bool {
    has_unit(value, DimensionKind::Time, &TIME_UNITS)
}

pub(crate) fn is_angle(value: &ComponentValue) -> bool {
    has_unit(value, DimensionKind::Angle, &ANGLE_UNITS)
}

pub(crate) fn is_timing_function(value: &ComponentValue) -> bool {
    ident_in(value, &TIMING_FUNCTION_KEYWORDS) || function_in(value, &TIMING_FUNCTION_NAMES)
}

pub(crate) fn is_animation_iteration_count(value: &ComponentValue) -> bool {
    match value {
        ComponentValue::Number(..) => true,
        ComponentValue::Ident(name) => name.eq_ignore_ascii_case("infinite"),
        ComponentValue::Function { name, .. } => name.eq_ignore_ascii_case("count"),
        _ => false,
    }
}

pub(crate) fn is_animation_direction(value: &ComponentValue) -> bool {
    ident_in(value, &ANIMATION_DIRECTIONS)
}

pub(crate) fn is_animation_fill_mode(value: &ComponentValue) -> bool {
    ident_in(value, &ANIMATION_FILL_MODES)
}

pub(crate) fn is_animation_play_state(value: &ComponentValue) -> bool {
    ident_in(value, &ANIMATION_PLAY_STATES)
}

pub(crate) fn is_keyframes_name(value: &ComponentValue) -> bool {
    matches!(value, ComponentValue::Ident(..) | ComponentValue::String(..))
}

pub(crate) fn is_length(value: &ComponentValue) -> bool {
    value.is_zero() || has_unit(value, DimensionKind::Length, &LENGTH_UNITS)
}

/// Bare identifiers count as colors, so this must be tried after any keyword
/// predicate that could claim the same identifier
pub(crate) fn is_color(value: &ComponentValue) -> bool {
    matches!(value, ComponentValue::Hash(..) | ComponentValue::Ident(..))
        || function_in(value, &COLOR_FUNCTIONS)
}

pub(crate) fn is_line_width(value: &ComponentValue) -> bool {
    ident_in(value, &LINE_WIDTHS) || is_length(value)
}

pub(crate) fn is_line_style(value: &ComponentValue) -> bool {
    ident_in(value, &LINE_STYLES)
}

pub(crate) fn is_inset(value: &ComponentValue) -> bool {
    value.is_ident("inset")
}

pub(crate) fn is_ident(value: &ComponentValue) -> bool {
    matches!(value, ComponentValue::Ident(..))
}

/// A color stop position: a percentage, or a bare `0` standing in for `0%`
pub(crate) fn is_stop_position(value: &ComponentValue) -> bool {
    matches!(value, ComponentValue::Percentage(..)) || value.is_zero()
}
