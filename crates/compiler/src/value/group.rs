use codemap::{Span, Spanned};

use crate::ast::ComponentValue;

/// A run of space separated values between two commas
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParamGroup<'a> {
    pub values: Vec<&'a Spanned<ComponentValue>>,
    pub span: Span,
}

impl<'a> ParamGroup<'a> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split `values` on comma delimiters
///
/// Commas are consumed; every other value, delimiters included, extends the
/// current group. Values are never reordered. Empty input is the only input
/// that produces no groups at all; an empty group (`a,,b`) is spanned by the
/// comma that closed it.
pub(crate) fn group_parameters(values: &[Spanned<ComponentValue>]) -> Vec<ParamGroup<'_>> {
    let mut groups = Vec::new();

    if values.is_empty() {
        return groups;
    }

    let mut current: Vec<&Spanned<ComponentValue>> = Vec::new();
    let mut span: Option<Span> = None;

    for value in values {
        if value.node.is_comma() {
            groups.push(ParamGroup {
                values: std::mem::take(&mut current),
                span: span.take().unwrap_or(value.span),
            });
            continue;
        }

        span = Some(match span {
            Some(span) => span.merge(value.span),
            None => value.span,
        });
        current.push(value);
    }

    let trailing_span = span.unwrap_or_else(|| {
        let last = values[values.len() - 1].span;
        last.subspan(last.len(), last.len())
    });

    groups.push(ParamGroup {
        values: current,
        span: trailing_span,
    });

    groups
}
