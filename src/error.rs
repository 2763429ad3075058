use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::fmt;
use std::io;
use thiserror::Error;

/// Character range in the source line. Offsets count chars, not bytes,
/// which is also what ariadne expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
    Runtime,
}

/// A recoverable problem found while lexing, parsing or evaluating a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span, message: String) -> Self {
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn invalid_character(position: usize, c: char) -> Self {
        Self::new(
            DiagnosticKind::Lexical,
            Span::single(position),
            format!("Invalid character input '{}'", c),
        )
    }

    pub fn invalid_number(span: Span, text: &str) -> Self {
        Self::new(
            DiagnosticKind::Lexical,
            span,
            format!("Text {} is not a valid int32", text),
        )
    }

    pub fn unexpected_token(span: Span, expected: impl fmt::Display, found: impl fmt::Display) -> Self {
        Self::new(
            DiagnosticKind::Syntax,
            span,
            format!(
                "Error: Unexpected token, Expected: <{}> Found: <{}>",
                expected, found
            ),
        )
    }

    pub fn nesting_too_deep(span: Span, limit: usize) -> Self {
        Self::new(
            DiagnosticKind::Syntax,
            span,
            format!("Expression is nested more than {} parentheses deep", limit),
        )
    }

    pub fn runtime(span: Span, message: String) -> Self {
        Self::new(DiagnosticKind::Runtime, span, message)
    }

    /// Renders the diagnostic against `source` on stdout.
    pub fn report(&self, source: &str) -> io::Result<()> {
        let filename = "<repl>";

        let color = match self.kind {
            DiagnosticKind::Lexical => Color::Red,
            DiagnosticKind::Syntax => Color::Yellow,
            DiagnosticKind::Runtime => Color::Magenta,
        };

        let kind_str = match self.kind {
            DiagnosticKind::Lexical => "Lexical Error",
            DiagnosticKind::Syntax => "Syntax Error",
            DiagnosticKind::Runtime => "Runtime Error",
        };

        // Placeholder tokens are zero-length; give the label something to underline.
        let span = if self.span.is_empty() {
            Span::single(self.span.start)
        } else {
            self.span
        };

        Report::build(ReportKind::Error, filename, span.start)
            .with_message(format!("{}: {}", kind_str.fg(color), self.message))
            .with_label(
                Label::new((filename, span.start..span.end))
                    .with_message(&self.message)
                    .with_color(color),
            )
            .finish()
            .print((filename, Source::from(source)))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

/// Failure to produce a value from a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Cannot evaluate an expression with {count} diagnostic(s)")]
    HasDiagnostics { count: usize },

    #[error("Division by zero")]
    DivisionByZero { span: Span },
}

impl EvalError {
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::HasDiagnostics { .. } => None,
            EvalError::DivisionByZero { span } => Some(*span),
        }
    }
}

impl From<EvalError> for Diagnostic {
    fn from(error: EvalError) -> Self {
        let span = error.span().unwrap_or(Span::new(0, 0));
        Diagnostic::runtime(span, error.to_string())
    }
}
