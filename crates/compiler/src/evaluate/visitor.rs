use codemap::{CodeMap, Span, Spanned};

use crate::{
    ast::{Argument, ComponentValue, DeclarationItem, Expr, Rule, StyleRule, Stylesheet},
    error::CompileResult,
    Options,
};

/// Walks the grammar tree, producing the call-expression tree
///
/// The visitor holds no state beyond the current nesting depth, so translating
/// the same node twice yields identical output.
pub(crate) struct Visitor<'a> {
    pub(crate) options: &'a Options<'a>,
    map: &'a CodeMap,
    depth: usize,
}

impl<'a> Visitor<'a> {
    pub fn new(options: &'a Options<'a>, map: &'a CodeMap) -> Self {
        Self {
            options,
            map,
            depth: 0,
        }
    }

    pub(crate) fn warn(&self, message: &str, span: Span) {
        if self.options.quiet {
            return;
        }

        self.options
            .logger
            .warning(self.map.look_up_span(span), message);
    }

    /// Run `f` one nesting level deeper, refusing to go past the configured limit
    pub(crate) fn nested<T>(
        &mut self,
        span: Span,
        f: impl FnOnce(&mut Self) -> CompileResult<T>,
    ) -> CompileResult<T> {
        if self.depth >= self.options.max_nesting_depth {
            return Err(("Value is nested too deeply.", span).into());
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Top level style rules without a selector contribute their declarations
    /// directly; every other rule becomes one element of the list.
    pub fn visit_stylesheet(&mut self, stylesheet: &Stylesheet) -> CompileResult<Spanned<Expr>> {
        let mut elems = Vec::new();

        for rule in &stylesheet.rules {
            match rule {
                Rule::Style(style) if style.prelude.is_empty() => {
                    elems.extend(self.visit_declaration_list(&style.block)?);
                }
                rule => elems.push(self.visit_rule(rule)?),
            }
        }

        Ok(Expr::List(elems).span(stylesheet.span))
    }

    pub fn visit_rule(&mut self, rule: &Rule) -> CompileResult<Spanned<Expr>> {
        match rule {
            Rule::Style(style) => self.visit_style_rule(style),
            Rule::AtRule(at_rule) => self.visit_at_rule(at_rule),
        }
    }

    fn visit_style_rule(&mut self, rule: &StyleRule) -> CompileResult<Spanned<Expr>> {
        let selector = self.selector_text(&rule.prelude.values)?;
        let block = self.visit_declaration_list(&rule.block)?;

        Ok(Expr::Call {
            callee: Spanned {
                node: self.options.variant.selector_fn().to_owned(),
                span: rule.prelude.span,
            },
            args: vec![
                Argument::positional(Expr::Str(selector).span(rule.prelude.span)),
                Argument::positional(Expr::List(block).span(rule.span)),
            ],
        }
        .span(rule.span))
    }

    pub(crate) fn visit_declaration_list(
        &mut self,
        items: &[DeclarationItem],
    ) -> CompileResult<Vec<Spanned<Expr>>> {
        let mut exprs = Vec::with_capacity(items.len());

        for item in items {
            exprs.push(match item {
                DeclarationItem::Declaration(decl) => self.visit_declaration(decl)?,
                DeclarationItem::AtRule(at_rule) => self.visit_at_rule(at_rule)?,
            });
        }

        Ok(exprs)
    }

    /// Join selector tokens with single spaces, folding from the right
    ///
    /// A `:` delimiter is glued to both of its neighbours, so `a`, `:`, `hover`
    /// becomes `a:hover`.
    pub(crate) fn selector_text(
        &mut self,
        values: &[Spanned<ComponentValue>],
    ) -> CompileResult<String> {
        let mut text = String::new();
        let mut next_is_colon = false;

        for value in values.iter().rev() {
            let is_colon = matches!(value.node, ComponentValue::Delim(':'));
            let mut piece = self.component_text(value)?;

            if !text.is_empty() {
                if !is_colon && !next_is_colon {
                    piece.push(' ');
                }
                piece.push_str(&text);
            }

            text = piece;
            next_is_colon = is_colon;
        }

        Ok(text)
    }

    fn component_text(&mut self, value: &Spanned<ComponentValue>) -> CompileResult<String> {
        Ok(match &value.node {
            ComponentValue::Ident(s)
            | ComponentValue::Number(s)
            | ComponentValue::Operator(s)
            | ComponentValue::UnicodeRange(s) => s.clone(),
            ComponentValue::String(s) => format!("\"{}\"", s),
            ComponentValue::Percentage(p) => format!("{}%", p),
            ComponentValue::Dimension { value, unit }
            | ComponentValue::FloatDimension { value, unit, .. } => format!("{}{}", value, unit),
            ComponentValue::Hash(h) => format!("#{}", h),
            ComponentValue::Uri(u) => format!("url({})", u),
            ComponentValue::Delim(c) => c.to_string(),
            ComponentValue::Function { name, params } => {
                let inner = self.nested(value.span, |visitor| visitor.selector_text(params))?;
                format!("{}({})", name, inner)
            }
            ComponentValue::ParenBlock(values) => {
                let inner = self.nested(value.span, |visitor| visitor.selector_text(values))?;
                format!("({})", inner)
            }
            ComponentValue::BracketBlock(values) => {
                let inner = self.nested(value.span, |visitor| visitor.selector_text(values))?;
                format!("[{}]", inner)
            }
        })
    }
}
