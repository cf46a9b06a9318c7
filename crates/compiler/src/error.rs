use std::{
    error::Error,
    fmt::{self, Display},
};

use codemap::{CodeMap, Span, SpanLoc};

pub type CompileResult<T> = Result<T, Box<CompileError>>;

/// The single error raised while translating a stylesheet
///
/// Every error carries a human readable message and the span of the token or
/// value that caused it. Errors returned from the public entry points have
/// additionally been located in the host's [`CodeMap`], which is what allows
/// them to be rendered with a source excerpt.
#[derive(Debug)]
pub struct CompileError {
    kind: CompileErrorKind,
}

#[non_exhaustive]
#[derive(Debug)]
pub enum CompileErrorKind {
    /// A raw error with no additional metadata
    /// It contains only a `String` message and
    /// a span
    Raw(String, Span),
    ParseError {
        message: String,
        span: Span,
        loc: SpanLoc,
        unicode: bool,
    },
}

impl CompileError {
    pub(crate) fn raw(self) -> (String, Span) {
        match self.kind {
            CompileErrorKind::Raw(message, span)
            | CompileErrorKind::ParseError { message, span, .. } => (message, span),
        }
    }

    pub(crate) fn from_loc(message: String, span: Span, loc: SpanLoc, unicode: bool) -> Self {
        CompileError {
            kind: CompileErrorKind::ParseError {
                message,
                span,
                loc,
                unicode,
            },
        }
    }

    pub(crate) fn located(self, map: &CodeMap, unicode: bool) -> Self {
        let (message, span) = self.raw();
        let loc = map.look_up_span(span);
        Self::from_loc(message, span, loc, unicode)
    }

    #[must_use]
    pub fn kind(&self) -> &CompileErrorKind {
        &self.kind
    }

    /// The message, without location information
    #[must_use]
    pub fn message(&self) -> &str {
        match &self.kind {
            CompileErrorKind::Raw(message, ..) | CompileErrorKind::ParseError { message, .. } => {
                message
            }
        }
    }

    /// The span of the offending token or value
    #[must_use]
    pub fn span(&self) -> Span {
        match &self.kind {
            CompileErrorKind::Raw(_, span) | CompileErrorKind::ParseError { span, .. } => *span,
        }
    }
}

impl Display for CompileError {
    // todo: show more than one line for spans crossing a newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (message, loc, unicode) = match &self.kind {
            CompileErrorKind::ParseError {
                message,
                loc,
                unicode,
                ..
            } => (message, loc, *unicode),
            CompileErrorKind::Raw(message, ..) => return write!(f, "Error: {}", message),
        };

        let first_bar = if unicode { '╷' } else { ',' };
        let middle_bar = if unicode { '│' } else { '|' };
        let last_bar = if unicode { '╵' } else { '\'' };

        let line = loc.begin.line + 1;
        let col = loc.begin.column + 1;
        let source_line = loc.file.source_line(loc.begin.line);

        let end_column = if loc.end.line == loc.begin.line {
            loc.end.column
        } else {
            source_line.chars().count()
        };
        let underline_len = end_column.saturating_sub(loc.begin.column).max(1);

        let padding = " ".repeat(line.to_string().len() + 1);

        writeln!(f, "Error: {}", message)?;
        writeln!(f, "{}{}", padding, first_bar)?;
        writeln!(f, "{} {} {}", line, middle_bar, source_line)?;
        writeln!(
            f,
            "{}{} {}{}",
            padding,
            middle_bar,
            " ".repeat(loc.begin.column),
            "^".repeat(underline_len)
        )?;
        writeln!(f, "{}{}", padding, last_bar)?;
        write!(f, "./{}:{}:{}", loc.file.name(), line, col)
    }
}

impl From<(&str, Span)> for Box<CompileError> {
    #[inline]
    fn from(error: (&str, Span)) -> Box<CompileError> {
        Box::new(CompileError {
            kind: CompileErrorKind::Raw(error.0.to_owned(), error.1),
        })
    }
}

impl From<(String, Span)> for Box<CompileError> {
    #[inline]
    fn from(error: (String, Span)) -> Box<CompileError> {
        Box::new(CompileError {
            kind: CompileErrorKind::Raw(error.0, error.1),
        })
    }
}

impl Error for CompileError {
    #[inline]
    fn description(&self) -> &'static str {
        "CSS translation error"
    }
}
