use std::fmt::{self, Display, Write};

use codemap::{Span, Spanned};

use crate::value::is_float_text;

/// A node of the produced call-expression tree
///
/// Numeric literals keep the digits they were written with; only the kind of
/// literal (integer or float) is decided by the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A named reference, possibly a dotted path
    Identifier(String),
    Int(String),
    Float(String),
    Str(String),
    Call {
        callee: Spanned<String>,
        args: Vec<Argument>,
    },
    List(Vec<Spanned<Expr>>),
    Tuple(Vec<Spanned<Expr>>),
    /// A symbolic tagged value, optionally wrapping a payload
    Variant {
        tag: String,
        payload: Option<Box<Spanned<Expr>>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub label: Option<&'static str>,
    pub value: Spanned<Expr>,
}

impl Argument {
    pub fn positional(value: Spanned<Expr>) -> Self {
        Self { label: None, value }
    }

    pub fn labeled(label: &'static str, value: Spanned<Expr>) -> Self {
        Self {
            label: Some(label),
            value,
        }
    }
}

impl Expr {
    pub const fn span(self, span: Span) -> Spanned<Self> {
        Spanned { node: self, span }
    }

    /// A call whose name shares the span of the whole expression
    pub fn call(name: impl Into<String>, span: Span, args: Vec<Argument>) -> Spanned<Self> {
        Self::Call {
            callee: Spanned {
                node: name.into(),
                span,
            },
            args,
        }
        .span(span)
    }

    pub fn variant(tag: impl Into<String>, payload: Option<Spanned<Expr>>) -> Self {
        Self::Variant {
            tag: tag.into(),
            payload: payload.map(Box::new),
        }
    }

    pub fn callee(&self) -> Option<&str> {
        match self {
            Self::Call { callee, .. } => Some(&callee.node),
            _ => None,
        }
    }

    pub fn args(&self) -> &[Argument] {
        match self {
            Self::Call { args, .. } => args,
            _ => &[],
        }
    }
}

fn write_separated<'a, T: Display + 'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a T>,
) -> fmt::Result {
    for (idx, item) in items.into_iter().enumerate() {
        if idx != 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = self.label {
            write!(f, "{} = ", label)?;
        }
        write!(f, "{}", self.value.node)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(path) => f.write_str(path),
            Self::Int(digits) => f.write_str(digits),
            Self::Float(digits) => {
                f.write_str(digits)?;
                if !is_float_text(digits) {
                    f.write_str(".0")?;
                }
                Ok(())
            }
            Self::Str(s) => {
                f.write_char('"')?;
                for c in s.chars() {
                    if c == '"' || c == '\\' {
                        f.write_char('\\')?;
                    }
                    f.write_char(c)?;
                }
                f.write_char('"')
            }
            Self::Call { callee, args } => {
                write!(f, "{}(", callee.node)?;
                write_separated(f, args)?;
                f.write_char(')')
            }
            Self::List(elems) => {
                f.write_char('[')?;
                write_separated(f, elems.iter().map(|e| &e.node))?;
                f.write_char(']')
            }
            Self::Tuple(elems) => {
                f.write_char('(')?;
                write_separated(f, elems.iter().map(|e| &e.node))?;
                f.write_char(')')
            }
            Self::Variant { tag, payload } => {
                write!(f, "'{}", tag)?;
                if let Some(payload) = payload {
                    write!(f, "({})", payload.node)?;
                }
                Ok(())
            }
        }
    }
}
