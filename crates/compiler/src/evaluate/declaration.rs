use codemap::{Span, Spanned};

use crate::{
    ast::{Argument, ComponentValue, Declaration, Expr},
    error::{CompileError, CompileResult},
    naming::{call_name, camel_case, expansion_for, with_arity, Expansion},
    value::{group_parameters, is_color, is_line_style, is_line_width},
};

use super::{slots, value::number_literal, Visitor};

const TWO_EDGES: &[Option<&str>] = &[Some("v"), Some("h")];
const THREE_EDGES: &[Option<&str>] = &[Some("top"), Some("h"), Some("bottom")];
const FOUR_EDGES: &[Option<&str>] = &[Some("top"), Some("right"), Some("bottom"), Some("left")];
const FLEX_LABELS: &[Option<&str>] = &[Some("grow"), Some("shrink"), None];

/// The span covering every value of a declaration
fn value_span(decl: &Declaration) -> Span {
    decl.value
        .iter()
        .map(|value| value.span)
        .reduce(|a, b| a.merge(b))
        .unwrap_or(decl.span)
}

fn unexpected_value(property: &str, span: Span) -> Box<CompileError> {
    (format!("Unexpected value for property `{}`.", property), span).into()
}

impl Visitor<'_> {
    pub(crate) fn visit_declaration(&mut self, decl: &Declaration) -> CompileResult<Spanned<Expr>> {
        let arity = decl.arity();

        match expansion_for(&decl.name.node, self.options.variant) {
            Some(Expansion::Animation) => self.slot_shorthand(decl, slots::ANIMATION),
            Some(Expansion::BoxShadow) => self.slot_shorthand(decl, slots::BOX_SHADOW),
            Some(Expansion::TextShadow) => self.slot_shorthand(decl, slots::TEXT_SHADOW),
            Some(Expansion::Transition) => self.slot_shorthand(decl, slots::TRANSITION),
            Some(Expansion::FontFamily) => self.font_family(decl),
            Some(Expansion::BoxEdges) => self.box_edges(decl),
            Some(Expansion::ZIndex) => self.z_index(decl),
            Some(Expansion::FlexFactor) => self.flex_factor(decl),
            Some(Expansion::FontWeight) => self.font_weight(decl),
            Some(Expansion::TransformList) if arity > 1 => self.transform_list(decl),
            Some(Expansion::LabeledPair([first, second])) if arity == 2 => {
                self.labeled_call(decl, &[Some(*first), Some(*second)])
            }
            Some(Expansion::FlexTriple) if arity == 3 => self.labeled_call(decl, FLEX_LABELS),
            Some(Expansion::LineShorthand) if arity == 2 => self.line_shorthand(decl),
            _ => self.standard_declaration(decl),
        }
    }

    fn translate_all(&mut self, decl: &Declaration) -> CompileResult<Vec<Spanned<Expr>>> {
        let mut exprs = Vec::with_capacity(decl.value.len());
        for value in &decl.value {
            exprs.push(self.translate_value(value)?);
        }
        Ok(exprs)
    }

    fn property_call(decl: &Declaration, name: String, args: Vec<Argument>) -> Spanned<Expr> {
        Expr::Call {
            callee: Spanned {
                node: name,
                span: decl.name.span,
            },
            args,
        }
        .span(decl.span)
    }

    /// Map the name, resolve the overload and pass every value positionally
    fn standard_declaration(&mut self, decl: &Declaration) -> CompileResult<Spanned<Expr>> {
        let name = call_name(&decl.name.node, self.options.variant, decl.arity());
        let args = self
            .translate_all(decl)?
            .into_iter()
            .map(Argument::positional)
            .collect();

        Ok(Self::property_call(decl, name, args))
    }

    /// An arity-suffixed call whose arguments carry the given labels in order
    fn labeled_call(
        &mut self,
        decl: &Declaration,
        labels: &[Option<&'static str>],
    ) -> CompileResult<Spanned<Expr>> {
        let name = with_arity(camel_case(&decl.name.node), decl.arity());
        let args = self
            .translate_all(decl)?
            .into_iter()
            .zip(labels)
            .map(|(value, label)| Argument {
                label: *label,
                value,
            })
            .collect();

        Ok(Self::property_call(decl, name, args))
    }

    fn box_edges(&mut self, decl: &Declaration) -> CompileResult<Spanned<Expr>> {
        match decl.arity() {
            2 => self.labeled_call(decl, TWO_EDGES),
            3 => self.labeled_call(decl, THREE_EDGES),
            4 => self.labeled_call(decl, FOUR_EDGES),
            0 | 1 => self.standard_declaration(decl),
            _ => Err((
                format!(
                    "Property `{}` cannot have more than 4 values.",
                    decl.name.node
                ),
                decl.value[4].span,
            )
                .into()),
        }
    }

    fn font_family(&mut self, decl: &Declaration) -> CompileResult<Spanned<Expr>> {
        let name = camel_case(&decl.name.node);

        if !self.options.is_typed() {
            let mut families = String::new();

            for value in &decl.value {
                let word = match &value.node {
                    ComponentValue::Delim(',') => {
                        families.push(',');
                        continue;
                    }
                    ComponentValue::Ident(ident) => ident.clone(),
                    ComponentValue::String(s) => format!("\"{}\"", s),
                    _ => return Err(unexpected_value(&decl.name.node, value.span)),
                };

                if !families.is_empty() {
                    families.push(' ');
                }
                families.push_str(&word);
            }

            let arg = Argument::positional(Expr::Str(families).span(value_span(decl)));
            return Ok(Self::property_call(decl, name, vec![arg]));
        }

        let mut calls = Vec::new();

        for group in group_parameters(&decl.value) {
            let mut words = Vec::with_capacity(group.len());

            for value in &group.values {
                match &value.node {
                    ComponentValue::Ident(word) | ComponentValue::String(word) => {
                        words.push(word.as_str());
                    }
                    _ => return Err(unexpected_value(&decl.name.node, value.span)),
                }
            }

            if words.is_empty() {
                return Err(unexpected_value(&decl.name.node, group.span));
            }

            calls.push(
                Expr::Call {
                    callee: Spanned {
                        node: name.clone(),
                        span: decl.name.span,
                    },
                    args: vec![Argument::positional(
                        Expr::Str(words.join(" ")).span(group.span),
                    )],
                }
                .span(group.span),
            );
        }

        Ok(Expr::List(calls).span(decl.span))
    }

    fn z_index(&mut self, decl: &Declaration) -> CompileResult<Spanned<Expr>> {
        let expects = || {
            (
                "Property `z-index` expects a single integer or keyword.",
                value_span(decl),
            )
        };

        let arg = match decl.value.as_slice() {
            [value] => match &value.node {
                ComponentValue::Ident(..) => self.translate_value(value)?,
                ComponentValue::Number(n) => Expr::call(
                    "int",
                    value.span,
                    vec![Argument::positional(Expr::Int(n.clone()).span(value.span))],
                ),
                _ => return Err(expects().into()),
            },
            _ => return Err(expects().into()),
        };

        let name = camel_case(&decl.name.node);
        Ok(Self::property_call(decl, name, vec![Argument::positional(arg)]))
    }

    /// `flex-grow` and `flex-shrink` take their factor as a float
    fn flex_factor(&mut self, decl: &Declaration) -> CompileResult<Spanned<Expr>> {
        match decl.value.as_slice() {
            [Spanned {
                node: ComponentValue::Number(n),
                span,
            }] => {
                let name = camel_case(&decl.name.node);
                let arg = Argument::positional(Expr::Float(n.clone()).span(*span));
                Ok(Self::property_call(decl, name, vec![arg]))
            }
            _ => Err((
                format!("Property `{}` expects a single number.", decl.name.node),
                value_span(decl),
            )
                .into()),
        }
    }

    fn font_weight(&mut self, decl: &Declaration) -> CompileResult<Spanned<Expr>> {
        let value = match decl.value.as_slice() {
            [value] => value,
            _ => {
                return Err((
                    format!("Property `{}` expects a single value.", decl.name.node),
                    value_span(decl),
                )
                    .into())
            }
        };

        let arg = match &value.node {
            ComponentValue::Ident(..) => self.translate_value(value)?,
            ComponentValue::Number(n) => {
                Expr::variant("num", Some(number_literal(n).span(value.span))).span(value.span)
            }
            _ => return Err(unexpected_value(&decl.name.node, value.span)),
        };

        let name = camel_case(&decl.name.node);
        Ok(Self::property_call(decl, name, vec![Argument::positional(arg)]))
    }

    /// Several transforms become a single list argument
    fn transform_list(&mut self, decl: &Declaration) -> CompileResult<Spanned<Expr>> {
        let transforms = self.translate_all(decl)?;
        let name = camel_case(&decl.name.node);
        let arg = Argument::positional(Expr::List(transforms).span(value_span(decl)));

        Ok(Self::property_call(decl, name, vec![arg]))
    }

    /// `border`/`outline` with two values, each labeled by what it is
    fn line_shorthand(&mut self, decl: &Declaration) -> CompileResult<Spanned<Expr>> {
        let mut seen = [false; 3];
        let mut args = Vec::with_capacity(2);

        for value in &decl.value {
            let (idx, label) = if is_line_width(&value.node) {
                (0, "width")
            } else if is_line_style(&value.node) {
                (1, "style")
            } else if is_color(&value.node) {
                (2, "color")
            } else {
                return Err(unexpected_value(&decl.name.node, value.span));
            };

            if seen[idx] {
                return Err(unexpected_value(&decl.name.node, value.span));
            }
            seen[idx] = true;

            args.push(Argument::labeled(label, self.translate_value(value)?));
        }

        let name = with_arity(camel_case(&decl.name.node), decl.arity());
        Ok(Self::property_call(decl, name, args))
    }
}
