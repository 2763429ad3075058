use crate::ast::{ExpressionSyntax, SyntaxKind, SyntaxToken};
use crate::error::{Diagnostic, Span};
use crate::lexer::Lexer;
use tracing::{debug, warn};

/// Deepest parenthesis nesting the parser will descend into.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Result of parsing one line: the expression, the token that ended it and
/// everything that went wrong along the way (lexer diagnostics first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub root: ExpressionSyntax,
    pub eof_token: SyntaxToken,
    pub diagnostics: Vec<Diagnostic>,
}

impl SyntaxTree {
    pub fn parse(text: &str) -> SyntaxTree {
        Parser::new(text).parse()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Recursive-descent parser over a pre-lexed token buffer.
///
/// Mismatches are recovered by substitution: the parser records a diagnostic,
/// hands back a zero-length token of the expected kind and leaves the offending
/// token in place. Parsing therefore always produces a tree.
pub struct Parser {
    tokens: Vec<SyntaxToken>,
    current: usize,
    diagnostics: Vec<Diagnostic>,
    invalid_positions: Vec<usize>,
    depth: usize,
}

impl Parser {
    pub fn new(text: &str) -> Self {
        let mut lexer = Lexer::new(text);
        let mut tokens = Vec::new();
        let mut invalid_positions = Vec::new();

        for token in lexer.by_ref() {
            match token.kind {
                SyntaxKind::InvalidToken => invalid_positions.push(token.position),
                SyntaxKind::WhitespaceToken => {}
                _ => tokens.push(token),
            }
        }

        Self {
            tokens,
            current: 0,
            diagnostics: lexer.into_diagnostics(),
            invalid_positions,
            depth: 0,
        }
    }

    pub fn tokens(&self) -> &[SyntaxToken] {
        &self.tokens
    }

    pub fn parse(mut self) -> SyntaxTree {
        let root = self.expression();
        let eof_token = self.match_token(SyntaxKind::EofToken);

        debug!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "parsed line"
        );

        SyntaxTree {
            root,
            eof_token,
            diagnostics: self.diagnostics,
        }
    }

    fn expression(&mut self) -> ExpressionSyntax {
        self.term()
    }

    fn term(&mut self) -> ExpressionSyntax {
        let mut left = self.factor();

        while matches!(self.peek().kind, SyntaxKind::PlusToken | SyntaxKind::MinusToken) {
            let operator_token = self.advance();
            let right = self.factor();
            left = ExpressionSyntax::Binary {
                left: Box::new(left),
                operator_token,
                right: Box::new(right),
            };
        }

        left
    }

    fn factor(&mut self) -> ExpressionSyntax {
        let mut left = self.primary();

        while matches!(
            self.peek().kind,
            SyntaxKind::MultiplyToken | SyntaxKind::DivideToken
        ) {
            let operator_token = self.advance();
            let right = self.primary();
            left = ExpressionSyntax::Binary {
                left: Box::new(left),
                operator_token,
                right: Box::new(right),
            };
        }

        left
    }

    fn primary(&mut self) -> ExpressionSyntax {
        if self.peek().kind == SyntaxKind::OpenParenthesisToken {
            if self.depth >= MAX_NESTING_DEPTH {
                return self.skip_nested_group();
            }

            let open_parenthesis_token = self.advance();
            self.depth += 1;
            let expression = self.expression();
            self.depth -= 1;
            let close_parenthesis_token = self.match_token(SyntaxKind::CloseParenthesisToken);
            return ExpressionSyntax::Parenthesized {
                open_parenthesis_token,
                expression: Box::new(expression),
                close_parenthesis_token,
            };
        }

        let number_token = self.match_token(SyntaxKind::NumberToken);
        ExpressionSyntax::Number { number_token }
    }

    /// Consumes a parenthesized group that is too deep to descend into, up to
    /// its matching `)` or end of input, and stands a missing number in for it.
    fn skip_nested_group(&mut self) -> ExpressionSyntax {
        let start = self.peek().position;
        let mut end = start;
        let mut balance = 0usize;

        loop {
            let token = self.peek();
            match token.kind {
                SyntaxKind::EofToken => break,
                SyntaxKind::OpenParenthesisToken => balance += 1,
                SyntaxKind::CloseParenthesisToken => balance -= 1,
                _ => {}
            }
            end = token.span().end;
            self.current += 1;
            if balance == 0 {
                break;
            }
        }

        warn!(limit = MAX_NESTING_DEPTH, "parenthesis nesting limit reached");
        self.diagnostics
            .push(Diagnostic::nesting_too_deep(Span::new(start, end), MAX_NESTING_DEPTH));

        ExpressionSyntax::Number {
            number_token: SyntaxToken::missing(SyntaxKind::NumberToken, start),
        }
    }

    /// Token `offset` places ahead; sticks at the final `EofToken`.
    pub fn peek_ahead(&self, offset: usize) -> &SyntaxToken {
        let index = (self.current + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    fn peek(&self) -> &SyntaxToken {
        self.peek_ahead(0)
    }

    fn advance(&mut self) -> SyntaxToken {
        let token = self.peek().clone();
        self.current += 1;
        token
    }

    fn match_token(&mut self, kind: SyntaxKind) -> SyntaxToken {
        if self.peek().kind == kind {
            return self.advance();
        }

        let found = self.peek();
        let (found_kind, found_span) = (found.kind, found.span());

        let unclosed = kind == SyntaxKind::CloseParenthesisToken && found_kind == SyntaxKind::EofToken;
        if !unclosed && self.follows_invalid_character() {
            debug!(expected = %kind, found = %found_kind, "mismatch already covered by a lexical error");
        } else {
            self.diagnostics
                .push(Diagnostic::unexpected_token(found_span, kind, found_kind));
        }

        SyntaxToken::missing(kind, found_span.start)
    }

    /// Whether an invalid character sits between the last consumed token and
    /// the current one. The lexer has already reported it, so the mismatch is
    /// not reported again, except for a `(` still open at end of input.
    fn follows_invalid_character(&self) -> bool {
        let gap_start = match self.current.checked_sub(1) {
            Some(previous) => self.tokens[previous.min(self.tokens.len() - 1)].span().end,
            None => 0,
        };
        let gap_end = self.peek().position;

        self.invalid_positions
            .iter()
            .any(|&pos| pos >= gap_start && pos < gap_end)
    }
}
