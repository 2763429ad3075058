use crate::ast::{SyntaxKind, SyntaxToken};
use crate::error::{Diagnostic, Span};
use tracing::trace;

/// On-demand tokenizer for a single line.
///
/// Never fails: malformed input becomes an `InvalidToken` (or a number token
/// valued `0`) plus a diagnostic, and lexing carries on. Iterating yields
/// exactly one `EofToken` and then stops.
pub struct Lexer {
    source: Vec<char>,
    position: usize,
    diagnostics: Vec<Diagnostic>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            position: 0,
            diagnostics: Vec::new(),
            finished: false,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn next_token(&mut self) -> SyntaxToken {
        if self.is_at_end() {
            return SyntaxToken::new(SyntaxKind::EofToken, self.position, String::new());
        }

        let start = self.position;
        let c = self.current();

        if c.is_ascii_digit() {
            return self.number(start);
        }

        if c.is_whitespace() {
            while self.current().is_whitespace() {
                self.advance();
            }
            return SyntaxToken::new(SyntaxKind::WhitespaceToken, start, self.text_from(start));
        }

        let kind = match c {
            '+' => SyntaxKind::PlusToken,
            '-' => SyntaxKind::MinusToken,
            '*' => SyntaxKind::MultiplyToken,
            '/' => SyntaxKind::DivideToken,
            '(' => SyntaxKind::OpenParenthesisToken,
            ')' => SyntaxKind::CloseParenthesisToken,
            _ => {
                trace!(position = start, character = %c, "invalid character");
                self.diagnostics.push(Diagnostic::invalid_character(start, c));
                SyntaxKind::InvalidToken
            }
        };

        self.advance();
        SyntaxToken::new(kind, start, c.to_string())
    }

    fn number(&mut self, start: usize) -> SyntaxToken {
        while self.current().is_ascii_digit() {
            self.advance();
        }

        let text = self.text_from(start);
        let value = match text.parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                self.diagnostics
                    .push(Diagnostic::invalid_number(Span::new(start, self.position), &text));
                0
            }
        };

        SyntaxToken::number(start, text, value)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn current(&self) -> char {
        self.source.get(self.position).copied().unwrap_or('\0')
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn text_from(&self, start: usize) -> String {
        self.source[start..self.position].iter().collect()
    }
}

impl Iterator for Lexer {
    type Item = SyntaxToken;

    fn next(&mut self) -> Option<SyntaxToken> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == SyntaxKind::EofToken {
            self.finished = true;
        }
        Some(token)
    }
}
