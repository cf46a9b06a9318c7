/*!
Compile tokenized CSS into trees of typed call expressions for an embedded
styling API.

This crate is a thin facade over [`stylecall_compiler`]; see its documentation
for an overview of the two target API variants and the shorthand expansions.

## Use as library
```
use stylecall::{
    ast::{ComponentValue, Declaration},
    codemap::{CodeMap, Spanned},
    ApiVariant, Options,
};

fn main() -> Result<(), Box<stylecall::Error>> {
    let mut map = CodeMap::new();
    let file = map.add_file("input.css".to_owned(), "z-index: 5".to_owned());
    let span = |begin, end| file.span.subspan(begin, end);

    let declaration = Declaration {
        name: Spanned { node: "z-index".to_owned(), span: span(0, 7) },
        value: vec![ComponentValue::Number("5".to_owned()).span(span(9, 10))],
        span: file.span,
    };

    let options = Options::default().variant(ApiVariant::Typed);
    let expr = stylecall::compile_declaration(&declaration, &map, &options)?;
    assert_eq!(expr.node.to_string(), "zIndex(int(5))");
    Ok(())
}
```
*/

#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::multiple_crate_versions,
    unknown_lints,
)]

pub use stylecall_compiler::*;
