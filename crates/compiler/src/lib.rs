/*!
This crate translates tokenized CSS into trees of typed call expressions that
invoke an embedded styling API.

The input is the component-value grammar tree produced by a CSS parser: style
rules, at-rules, declarations and values, each carrying a [`codemap::Span`].
The output is an [`Expr`] tree of calls, literals and lists, ready to be
printed as source code by a back end. Spans are carried through unchanged so
that the back end can report diagnostics and build source maps.

Two target APIs are supported, selected with [`Options::variant`]:

 - [`ApiVariant::Plain`]: single-arity calls, keyword constants as symbolic tags.
 - [`ApiVariant::Typed`]: arity-overloaded calls (`padding2`, `border3`) and
   labeled expansion of more shorthands.

The interesting work is in the shorthands. `transition: color 0.2s ease-in`
does not say which value is the duration and which is the property; the
compiler classifies every value by shape and routes it to the matching labeled
argument of the target call.

## Use as library
```
# use stylecall_compiler as stylecall;
use stylecall::{
    ast::{ComponentValue, Declaration, DimensionKind},
    codemap::{CodeMap, Spanned},
};

fn main() -> Result<(), Box<stylecall::Error>> {
    let mut map = CodeMap::new();
    let file = map.add_file("input.css".to_owned(), "padding: 10px 20px".to_owned());
    let span = |begin, end| file.span.subspan(begin, end);
    let px = |value: &str| ComponentValue::FloatDimension {
        value: value.to_owned(),
        unit: "px".to_owned(),
        kind: DimensionKind::Length,
    };

    let declaration = Declaration {
        name: Spanned { node: "padding".to_owned(), span: span(0, 7) },
        value: vec![px("10").span(span(9, 13)), px("20").span(span(14, 18))],
        span: file.span,
    };

    let expr = stylecall::compile_declaration(&declaration, &map, &stylecall::Options::default())?;
    assert_eq!(expr.node.to_string(), "padding2(v = px(10), h = px(20))");
    Ok(())
}
```
*/

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match,
    clippy::new_without_default,
    clippy::single_match_else,
    clippy::multiple_crate_versions,
    clippy::wrong_self_convention,
    clippy::comparison_chain,
    clippy::uninlined_format_args,

    unknown_lints,
)]

use codemap::{CodeMap, Spanned};

use crate::evaluate::Visitor;

pub use crate::error::{
    CompileError as Error, CompileErrorKind as ErrorKind, CompileResult as Result,
};
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::{ApiVariant, Options};

pub mod ast;

pub use ast::Expr;
pub use codemap;

mod error;
mod evaluate;
mod logger;
mod naming;
mod options;
mod value;

fn located(map: &CodeMap, err: Box<Error>, options: &Options) -> Box<Error> {
    Box::new(err.located(map, options.unicode_error_messages))
}

/// Translate a whole stylesheet into one flat list expression
///
/// Top level style rules without a selector contribute their declarations to
/// the list directly; every other rule becomes one element.
///
/// `map` must be the [`CodeMap`] the stylesheet's spans were allocated from.
/// It is used to locate warnings and errors.
#[inline]
pub fn compile_stylesheet(
    stylesheet: &ast::Stylesheet,
    map: &CodeMap,
    options: &Options,
) -> Result<Spanned<Expr>> {
    Visitor::new(options, map)
        .visit_stylesheet(stylesheet)
        .map_err(|e| located(map, e, options))
}

/// Translate a single style rule or at-rule
#[inline]
pub fn compile_rule(rule: &ast::Rule, map: &CodeMap, options: &Options) -> Result<Spanned<Expr>> {
    Visitor::new(options, map)
        .visit_rule(rule)
        .map_err(|e| located(map, e, options))
}

/// Translate a single declaration
#[inline]
pub fn compile_declaration(
    declaration: &ast::Declaration,
    map: &CodeMap,
    options: &Options,
) -> Result<Spanned<Expr>> {
    Visitor::new(options, map)
        .visit_declaration(declaration)
        .map_err(|e| located(map, e, options))
}
