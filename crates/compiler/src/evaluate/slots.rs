//! Ordered slot assignment for shorthands whose values can come in any order
//!
//! A shorthand is described by an ordered list of slots. Each raw value goes to
//! the first slot that accepts its shape and still has room.

use codemap::Spanned;

use crate::{
    ast::{Argument, ComponentValue, Declaration, Expr},
    error::CompileResult,
    naming::camel_case,
    value::{
        group_parameters, is_animation_direction, is_animation_fill_mode,
        is_animation_iteration_count, is_animation_play_state, is_color, is_ident, is_inset,
        is_keyframes_name, is_length, is_time, is_timing_function, ParamGroup,
    },
};

use super::Visitor;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Role {
    /// Filled left to right, one label per accepted value
    Labeled(&'static [&'static str]),
    /// A keyword that switches a boolean argument on
    Flag(&'static str),
    /// An unlabeled argument, placed after all labeled ones
    Positional,
    /// An identifier naming another property, passed as a string
    PropertyName,
}

#[derive(Clone, Copy)]
pub(crate) struct Slot {
    accepts: fn(&ComponentValue) -> bool,
    role: Role,
    /// Plural noun for the values this slot holds, used in errors
    what: &'static str,
}

impl Slot {
    const fn new(accepts: fn(&ComponentValue) -> bool, role: Role, what: &'static str) -> Self {
        Self {
            accepts,
            role,
            what,
        }
    }

    fn capacity(&self) -> usize {
        match self.role {
            Role::Labeled(labels) => labels.len(),
            Role::Flag(..) | Role::Positional | Role::PropertyName => 1,
        }
    }
}

const TIMES: Slot = Slot::new(is_time, Role::Labeled(&["duration", "delay"]), "time values");
const TIMING_FUNCTION: Slot = Slot::new(
    is_timing_function,
    Role::Labeled(&["timingFunction"]),
    "timing functions",
);
const COLOR: Slot = Slot::new(is_color, Role::Positional, "colors");
const INSET: Slot = Slot::new(is_inset, Role::Flag("inset"), "`inset` keywords");

pub(crate) static ANIMATION: &[Slot] = &[
    TIMES,
    TIMING_FUNCTION,
    Slot::new(
        is_animation_iteration_count,
        Role::Labeled(&["iterationCount"]),
        "iteration counts",
    ),
    Slot::new(
        is_animation_direction,
        Role::Labeled(&["direction"]),
        "directions",
    ),
    Slot::new(
        is_animation_fill_mode,
        Role::Labeled(&["fillMode"]),
        "fill modes",
    ),
    Slot::new(
        is_animation_play_state,
        Role::Labeled(&["playState"]),
        "play states",
    ),
    Slot::new(is_keyframes_name, Role::Positional, "keyframes names"),
];

pub(crate) static BOX_SHADOW: &[Slot] = &[
    Slot::new(
        is_length,
        Role::Labeled(&["x", "y", "blur", "spread"]),
        "lengths",
    ),
    INSET,
    COLOR,
];

pub(crate) static TEXT_SHADOW: &[Slot] = &[
    Slot::new(is_length, Role::Labeled(&["x", "y", "blur"]), "lengths"),
    COLOR,
];

pub(crate) static TRANSITION: &[Slot] = &[
    TIMES,
    TIMING_FUNCTION,
    Slot::new(is_ident, Role::PropertyName, "property names"),
];

impl Visitor<'_> {
    /// One call per comma separated group, collected into a list
    pub(crate) fn slot_shorthand(
        &mut self,
        decl: &Declaration,
        slots: &[Slot],
    ) -> CompileResult<Spanned<Expr>> {
        let name = camel_case(&decl.name.node);
        let mut calls = Vec::new();

        for group in group_parameters(&decl.value) {
            let args = self.assign_slots(&decl.name.node, slots, &group)?;
            calls.push(
                Expr::Call {
                    callee: Spanned {
                        node: name.clone(),
                        span: decl.name.span,
                    },
                    args,
                }
                .span(group.span),
            );
        }

        Ok(Expr::List(calls).span(decl.span))
    }

    fn assign_slots(
        &mut self,
        property: &str,
        slots: &[Slot],
        group: &ParamGroup<'_>,
    ) -> CompileResult<Vec<Argument>> {
        let mut filled: Vec<Vec<Spanned<Expr>>> = slots.iter().map(|_| Vec::new()).collect();

        for value in &group.values {
            let mut target = None;
            let mut full = None;

            for (idx, slot) in slots.iter().enumerate() {
                if !(slot.accepts)(&value.node) {
                    continue;
                }

                if filled[idx].len() < slot.capacity() {
                    target = Some(idx);
                    break;
                }

                full.get_or_insert(idx);
            }

            let idx = match (target, full) {
                (Some(idx), _) => idx,
                (None, Some(full)) => {
                    return Err((
                        format!(
                            "Property `{}` cannot have more than {} {}.",
                            property,
                            slots[full].capacity(),
                            slots[full].what
                        ),
                        value.span,
                    )
                        .into())
                }
                (None, None) => {
                    return Err((
                        format!("Unexpected value for property `{}`.", property),
                        value.span,
                    )
                        .into())
                }
            };

            let expr = match (slots[idx].role, &value.node) {
                (Role::Flag(..), _) => Expr::Identifier("true".to_owned()).span(value.span),
                (Role::PropertyName, ComponentValue::Ident(name)) => {
                    Expr::Str(name.clone()).span(value.span)
                }
                _ => self.translate_value(value)?,
            };

            filled[idx].push(expr);
        }

        let mut positional = Vec::new();
        let mut labeled = Vec::new();

        for (slot, exprs) in slots.iter().zip(filled) {
            match slot.role {
                Role::Labeled(labels) => labeled.extend(
                    labels
                        .iter()
                        .zip(exprs)
                        .map(|(label, expr)| Argument::labeled(*label, expr)),
                ),
                Role::Flag(label) => labeled.extend(
                    exprs
                        .into_iter()
                        .map(|expr| Argument::labeled(label, expr)),
                ),
                Role::Positional | Role::PropertyName => {
                    positional.extend(exprs.into_iter().map(Argument::positional));
                }
            }
        }

        labeled.append(&mut positional);

        Ok(labeled)
    }
}
