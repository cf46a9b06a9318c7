use codemap::Spanned;

use crate::{
    ast::{Argument, AtRule, AtRuleBlock, ComponentValue, Expr, Prelude, Rule},
    error::CompileResult,
};

use super::{value::number_literal, Visitor};

impl Visitor<'_> {
    /// `@keyframes` is the only supported at-rule, and only for the plain API
    pub(crate) fn visit_at_rule(&mut self, rule: &AtRule) -> CompileResult<Spanned<Expr>> {
        if !rule.name.node.eq_ignore_ascii_case("keyframes") || self.options.is_typed() {
            return Err((
                format!("At-rule `@{}` is not supported.", rule.name.node),
                rule.name.span,
            )
                .into());
        }

        let stylesheet = match &rule.block {
            Some(AtRuleBlock::Stylesheet(stylesheet)) => stylesheet,
            Some(AtRuleBlock::Declarations(..)) | None => {
                return Err(("Expected a block of keyframe rules.", rule.span).into())
            }
        };

        let frames = self.nested(rule.span, |visitor| visitor.keyframes(&stylesheet.rules))?;

        Ok(Expr::Call {
            callee: Spanned {
                node: "keyframes".to_owned(),
                span: rule.name.span,
            },
            args: vec![Argument::positional(
                Expr::List(frames).span(stylesheet.span),
            )],
        }
        .span(rule.span))
    }

    /// One `(progress, declarations)` tuple per child rule, in source order
    fn keyframes(&mut self, rules: &[Rule]) -> CompileResult<Vec<Spanned<Expr>>> {
        let mut frames = Vec::with_capacity(rules.len());

        for child in rules {
            let style = match child {
                Rule::Style(style) => style,
                Rule::AtRule(nested) => {
                    return Err((
                        "At-rules are not allowed inside `@keyframes`.",
                        nested.prelude.span,
                    )
                        .into())
                }
            };

            let progress = Self::keyframe_progress(&style.prelude)?;
            let block = self.visit_declaration_list(&style.block)?;

            frames.push(
                Expr::Tuple(vec![progress, Expr::List(block).span(style.span)]).span(style.span),
            );
        }

        Ok(frames)
    }

    /// `from` and `0` are 0, `to` is 100, and a percentage is its own number
    fn keyframe_progress(prelude: &Prelude) -> CompileResult<Spanned<Expr>> {
        let progress = match prelude.values.as_slice() {
            [value] => match &value.node {
                ComponentValue::Percentage(p) => Some(number_literal(p)),
                ComponentValue::Ident(..) if value.node.is_ident("from") => {
                    Some(Expr::Int("0".to_owned()))
                }
                ComponentValue::Number(..) if value.node.is_zero() => {
                    Some(Expr::Int("0".to_owned()))
                }
                ComponentValue::Ident(..) if value.node.is_ident("to") => {
                    Some(Expr::Int("100".to_owned()))
                }
                _ => None,
            },
            _ => None,
        };

        match progress {
            Some(progress) => Ok(progress.span(prelude.span)),
            None => Err(("Expected a percentage, `from` or `to`.", prelude.span).into()),
        }
    }
}
