//! The tokenized CSS grammar tree handed to the compiler
//!
//! These shapes are produced by an external parser; the compiler only pattern
//! matches on them and never re-tokenizes.

use codemap::{Span, Spanned};

/// The unit category attached to a float-tagged dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionKind {
    Time,
    Length,
    Angle,
}

/// One atomic parsed CSS value
///
/// Numbers keep the digits exactly as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentValue {
    Ident(String),
    String(String),
    Number(String),
    Percentage(String),
    Dimension {
        value: String,
        unit: String,
    },
    FloatDimension {
        value: String,
        unit: String,
        kind: DimensionKind,
    },
    /// The hex digits or name following a `#`, without the `#`
    Hash(String),
    Uri(String),
    Function {
        name: String,
        params: Vec<Spanned<ComponentValue>>,
    },
    Operator(String),
    /// Single character delimiters, most notably `,` and `:`
    Delim(char),
    UnicodeRange(String),
    ParenBlock(Vec<Spanned<ComponentValue>>),
    BracketBlock(Vec<Spanned<ComponentValue>>),
}

impl ComponentValue {
    pub const fn span(self, span: Span) -> Spanned<Self> {
        Spanned { node: self, span }
    }

    pub fn is_comma(&self) -> bool {
        matches!(self, Self::Delim(','))
    }

    pub fn is_ident(&self, name: &str) -> bool {
        matches!(self, Self::Ident(i) if i.eq_ignore_ascii_case(name))
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Number(n) if n == "0")
    }
}

#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: Spanned<String>,
    pub value: Vec<Spanned<ComponentValue>>,
    pub span: Span,
}

impl Declaration {
    /// The number of top level values, the arity used for overload resolution
    pub fn arity(&self) -> usize {
        self.value.len()
    }
}

#[derive(Debug, Clone)]
pub enum DeclarationItem {
    Declaration(Declaration),
    AtRule(AtRule),
}

pub type DeclarationList = Vec<DeclarationItem>;

/// The tokens before a block, e.g. a selector or an at-rule's arguments
#[derive(Debug, Clone)]
pub struct Prelude {
    pub values: Vec<Spanned<ComponentValue>>,
    pub span: Span,
}

impl Prelude {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum AtRuleBlock {
    Declarations(DeclarationList),
    /// A nested list of rules, as found in `@keyframes`
    Stylesheet(Stylesheet),
}

#[derive(Debug, Clone)]
pub struct AtRule {
    pub name: Spanned<String>,
    pub prelude: Prelude,
    pub block: Option<AtRuleBlock>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct StyleRule {
    pub prelude: Prelude,
    pub block: DeclarationList,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Rule {
    Style(StyleRule),
    AtRule(AtRule),
}

#[derive(Debug, Clone)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
    pub span: Span,
}
