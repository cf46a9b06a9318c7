use codemap::{Span, Spanned};

use crate::{
    ast::{Argument, ComponentValue, DimensionKind, Expr},
    error::CompileResult,
    naming::{camel_case, is_variant_constant},
    value::is_float_text,
    ApiVariant,
};

use super::Visitor;

/// Split a `<number><suffix>` span at the end of the number
///
/// The split point depends only on the length of the number text. Spans that
/// are shorter than the text (synthesized by a host) are clamped.
pub(crate) fn split_span(span: Span, prefix: &str) -> (Span, Span) {
    let at = (prefix.len() as u64).min(span.len());
    (span.subspan(0, at), span.subspan(at, span.len()))
}

/// An integer literal unless the text has a decimal point or an exponent
pub(crate) fn number_literal(digits: &str) -> Expr {
    if is_float_text(digits) {
        Expr::Float(digits.to_owned())
    } else {
        Expr::Int(digits.to_owned())
    }
}

/// Whether a float-tagged dimension renders its number as an integer literal
///
/// This depends on the unit and the API variant, never on the number itself.
pub(crate) fn is_integer_unit(unit: &str, kind: DimensionKind, variant: ApiVariant) -> bool {
    match (kind, unit.to_ascii_lowercase().as_str()) {
        (DimensionKind::Time, "ms") | (_, "px") => true,
        (_, "pt") => variant == ApiVariant::Plain,
        _ => false,
    }
}

/// `unit(literal)`, with the callee spanning the unit and the literal spanning
/// the number
pub(crate) fn dimension(value: &str, unit: &str, integer: bool, span: Span) -> Spanned<Expr> {
    let (number_span, unit_span) = split_span(span, value);
    let literal = if integer {
        Expr::Int(value.to_owned())
    } else {
        Expr::Float(value.to_owned())
    };

    Expr::Call {
        callee: Spanned {
            node: unit.to_ascii_lowercase(),
            span: unit_span,
        },
        args: vec![Argument::positional(literal.span(number_span))],
    }
    .span(span)
}

/// `pct(float)`
pub(crate) fn percentage(digits: &str, span: Span) -> Spanned<Expr> {
    let (number_span, sign_span) = split_span(span, digits);

    Expr::Call {
        callee: Spanned {
            node: "pct".to_owned(),
            span: sign_span,
        },
        args: vec![Argument::positional(
            Expr::Float(digits.to_owned()).span(number_span),
        )],
    }
    .span(span)
}

/// `deg(int)` for angles the compiler fills in itself
pub(crate) fn degrees(angle: &str, span: Span) -> Spanned<Expr> {
    Expr::call(
        "deg",
        span,
        vec![Argument::positional(Expr::Int(angle.to_owned()).span(span))],
    )
}

impl Visitor<'_> {
    pub(crate) fn translate_value(
        &mut self,
        value: &Spanned<ComponentValue>,
    ) -> CompileResult<Spanned<Expr>> {
        let span = value.span;

        Ok(match &value.node {
            ComponentValue::Percentage(p) => percentage(p, span),
            ComponentValue::Ident(name) => self.ident(name, span),
            ComponentValue::String(s) => Expr::Str(s.clone()).span(span),
            ComponentValue::Uri(s) => Expr::call(
                "url",
                span,
                vec![Argument::positional(Expr::Str(s.clone()).span(span))],
            ),
            ComponentValue::Hash(h) => Expr::call(
                "hex",
                span,
                vec![Argument::positional(Expr::Str(h.clone()).span(span))],
            ),
            ComponentValue::Number(n) if n == "0" => Expr::Identifier("zero".to_owned()).span(span),
            ComponentValue::Number(n) => number_literal(n).span(span),
            ComponentValue::FloatDimension { value, unit, kind } => dimension(
                value,
                unit,
                is_integer_unit(unit, *kind, self.options.variant),
                span,
            ),
            ComponentValue::Dimension { value, unit } => {
                dimension(value, unit, !is_float_text(value), span)
            }
            ComponentValue::Function { name, params } => {
                return self.translate_function(name, params, span)
            }
            ComponentValue::Operator(op) => {
                return Err((format!("Unsupported operator `{}`.", op), span).into())
            }
            ComponentValue::Delim(c) => {
                return Err((format!("Unsupported delimiter `{}`.", c), span).into())
            }
            ComponentValue::UnicodeRange(..) => {
                return Err(("Unsupported unicode range.", span).into())
            }
            ComponentValue::ParenBlock(..) | ComponentValue::BracketBlock(..) => {
                return Err(("Unsupported block.", span).into())
            }
        })
    }

    /// A named reference, or a symbolic tag for keywords the plain API knows
    pub(crate) fn ident(&self, name: &str, span: Span) -> Spanned<Expr> {
        let mapped = camel_case(name);

        if is_variant_constant(name, self.options.variant) {
            Expr::variant(mapped, None).span(span)
        } else {
            Expr::Identifier(mapped).span(span)
        }
    }
}
