use codemap::{Span, Spanned};

use crate::{
    ast::{Argument, ComponentValue, Expr},
    error::CompileResult,
    naming::camel_case,
    value::{group_parameters, is_angle, is_color, is_ident, is_stop_position, ParamGroup},
};

use super::{
    value::{degrees, number_literal, percentage, split_span},
    Visitor,
};

fn side_angle(side: &ComponentValue) -> Option<&'static str> {
    match side {
        ComponentValue::Ident(side) => match side.to_ascii_lowercase().as_str() {
            "top" => Some("0"),
            "right" => Some("90"),
            "bottom" => Some("180"),
            "left" => Some("270"),
            _ => None,
        },
        _ => None,
    }
}

/// Each group holding exactly one value, or `None`
fn single_values<'a>(groups: &[ParamGroup<'a>]) -> Option<Vec<&'a Spanned<ComponentValue>>> {
    groups
        .iter()
        .map(|group| match group.values.as_slice() {
            [value] => Some(*value),
            _ => None,
        })
        .collect()
}

fn is_hue(value: &ComponentValue) -> bool {
    matches!(value, ComponentValue::Number(..)) || is_angle(value)
}

/// Saturation and lightness are plain floats, not `pct` calls
fn bare_percentage(value: &Spanned<ComponentValue>) -> Option<Spanned<Expr>> {
    match &value.node {
        ComponentValue::Percentage(p) => {
            let (number_span, _) = split_span(value.span, p);
            Some(Expr::Float(p.clone()).span(number_span))
        }
        _ => None,
    }
}

fn alpha_value(value: &Spanned<ComponentValue>) -> Option<Spanned<Expr>> {
    let tagged = match &value.node {
        ComponentValue::Number(n) => Expr::variant("num", Some(number_literal(n).span(value.span))),
        ComponentValue::Percentage(..) => Expr::variant("perc", Some(bare_percentage(value)?)),
        _ => return None,
    };

    Some(tagged.span(value.span))
}

impl Visitor<'_> {
    pub(crate) fn translate_function(
        &mut self,
        name: &str,
        params: &[Spanned<ComponentValue>],
        span: Span,
    ) -> CompileResult<Spanned<Expr>> {
        self.nested(span, |visitor| {
            match name.to_ascii_lowercase().as_str() {
                "linear-gradient" | "repeating-linear-gradient" => {
                    visitor.linear_gradient(name, params, span)
                }
                "radial-gradient" | "repeating-radial-gradient" => {
                    visitor.radial_gradient(name, params, span)
                }
                "hsl" => visitor.hsl(name, params, span),
                "hsla" => visitor.hsla(name, params, span),
                _ => visitor.generic_function(name, params, span),
            }
        })
    }

    fn function_call(name: &str, span: Span, args: Vec<Argument>) -> Spanned<Expr> {
        let (name_span, _) = split_span(span, name);

        Expr::Call {
            callee: Spanned {
                node: camel_case(name),
                span: name_span,
            },
            args,
        }
        .span(span)
    }

    /// Any function without dedicated handling: commas are dropped and every
    /// other parameter becomes one positional argument
    ///
    /// A bare `0` parameter is the integer `0` here rather than the `zero`
    /// reference it would be anywhere else.
    fn generic_function(
        &mut self,
        name: &str,
        params: &[Spanned<ComponentValue>],
        span: Span,
    ) -> CompileResult<Spanned<Expr>> {
        let mut args = Vec::with_capacity(params.len());

        for param in params.iter().filter(|param| !param.node.is_comma()) {
            let expr = if param.node.is_zero() {
                Expr::Int("0".to_owned()).span(param.span)
            } else {
                self.translate_value(param)?
            };
            args.push(Argument::positional(expr));
        }

        Ok(Self::function_call(name, span, args))
    }

    fn linear_gradient(
        &mut self,
        name: &str,
        params: &[Spanned<ComponentValue>],
        span: Span,
    ) -> CompileResult<Spanned<Expr>> {
        let groups = group_parameters(params);

        let first = match groups.first() {
            Some(first) if !first.is_empty() => first,
            Some(first) => {
                return Err((
                    format!("Unexpected first parameter for `{}`.", name),
                    first.span,
                )
                    .into())
            }
            None => return Err((format!("Missing parameters for `{}`.", name), span).into()),
        };

        let unexpected_first =
            || (format!("Unexpected first parameter for `{}`.", name), first.span);

        let (direction, stops) = match first.values.as_slice() {
            [angle] if is_angle(&angle.node) => (self.translate_value(angle)?, &groups[1..]),
            [to, side] if to.node.is_ident("to") => match side_angle(&side.node) {
                Some(angle) => (degrees(angle, first.span), &groups[1..]),
                None => return Err(unexpected_first().into()),
            },
            [to, ..] if to.node.is_ident("to") => return Err(unexpected_first().into()),
            [ident, ..] if is_ident(&ident.node) => {
                self.warn(
                    &format!(
                        "`{}` has no direction and starts with a color; assuming 180deg.",
                        name
                    ),
                    first.span,
                );
                (degrees("180", span), &groups[..])
            }
            _ => return Err(unexpected_first().into()),
        };

        if stops.is_empty() {
            return Err((format!("Missing parameters for `{}`.", name), span).into());
        }

        let stops = self.color_stops(name, stops, span)?;

        Ok(Self::function_call(
            name,
            span,
            vec![
                Argument::positional(direction),
                Argument::positional(stops),
            ],
        ))
    }

    fn radial_gradient(
        &mut self,
        name: &str,
        params: &[Spanned<ComponentValue>],
        span: Span,
    ) -> CompileResult<Spanned<Expr>> {
        let groups = group_parameters(params);

        if groups.is_empty() {
            return Err((format!("Missing parameters for `{}`.", name), span).into());
        }

        let stops = self.color_stops(name, &groups, span)?;

        Ok(Self::function_call(
            name,
            span,
            vec![Argument::positional(stops)],
        ))
    }

    /// A bare color stays as is; `color position` becomes `(position, color)`
    fn color_stops(
        &mut self,
        name: &str,
        groups: &[ParamGroup<'_>],
        span: Span,
    ) -> CompileResult<Spanned<Expr>> {
        let mut stops = Vec::with_capacity(groups.len());

        for group in groups {
            let stop = match group.values.as_slice() {
                [color] if is_color(&color.node) => self.translate_value(color)?,
                [color, position] if is_color(&color.node) && is_stop_position(&position.node) => {
                    let position = match &position.node {
                        ComponentValue::Percentage(p) => percentage(p, position.span),
                        _ => percentage("0", position.span),
                    };
                    let color = self.translate_value(color)?;
                    Expr::Tuple(vec![position, color]).span(group.span)
                }
                _ => {
                    return Err((format!("Malformed color stop in `{}`.", name), group.span).into())
                }
            };
            stops.push(stop);
        }

        let span = groups
            .iter()
            .map(|group| group.span)
            .reduce(|a, b| a.merge(b))
            .unwrap_or(span);

        Ok(Expr::List(stops).span(span))
    }

    fn hue(&mut self, hue: &Spanned<ComponentValue>) -> CompileResult<Spanned<Expr>> {
        match &hue.node {
            ComponentValue::Number(n) => Ok(number_literal(n).span(hue.span)),
            _ => self.translate_value(hue),
        }
    }

    fn hsl(
        &mut self,
        name: &str,
        params: &[Spanned<ComponentValue>],
        span: Span,
    ) -> CompileResult<Spanned<Expr>> {
        let groups = group_parameters(params);

        let parsed = single_values(&groups).and_then(|values| match values.as_slice() {
            [hue, saturation, lightness] if is_hue(&hue.node) => Some((
                *hue,
                bare_percentage(saturation)?,
                bare_percentage(lightness)?,
            )),
            _ => None,
        });

        let Some((hue, saturation, lightness)) = parsed else {
            return Err((
                format!("`{}` expects a hue followed by two percentages.", name),
                span,
            )
                .into());
        };

        let args = vec![
            Argument::positional(self.hue(hue)?),
            Argument::positional(saturation),
            Argument::positional(lightness),
        ];

        Ok(Self::function_call(name, span, args))
    }

    fn hsla(
        &mut self,
        name: &str,
        params: &[Spanned<ComponentValue>],
        span: Span,
    ) -> CompileResult<Spanned<Expr>> {
        let groups = group_parameters(params);

        let parsed = single_values(&groups).and_then(|values| match values.as_slice() {
            [hue, saturation, lightness, alpha] if is_hue(&hue.node) => Some((
                *hue,
                bare_percentage(saturation)?,
                bare_percentage(lightness)?,
                alpha_value(alpha)?,
            )),
            _ => None,
        });

        let Some((hue, saturation, lightness, alpha)) = parsed else {
            return Err((
                format!(
                    "`{}` expects a hue, two percentages and an alpha value.",
                    name
                ),
                span,
            )
                .into());
        };

        let args = vec![
            Argument::positional(self.hue(hue)?),
            Argument::positional(saturation),
            Argument::positional(lightness),
            Argument::positional(alpha),
        ];

        Ok(Self::function_call(name, span, args))
    }
}
