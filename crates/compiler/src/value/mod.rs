pub(crate) use classify::*;
pub(crate) use group::{group_parameters, ParamGroup};

mod classify;
mod group;

/// Whether number text written in the source is fractional or has an exponent
pub(crate) fn is_float_text(digits: &str) -> bool {
    digits.contains(&['.', 'e', 'E'][..])
}
