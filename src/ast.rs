use crate::error::Span;
use std::fmt;

/// Every kind of node the front end produces: the token kinds first, then
/// the expression shapes built from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    // Tokens
    EofToken,
    NumberToken,
    WhitespaceToken,
    PlusToken,
    MinusToken,
    MultiplyToken,
    DivideToken,
    OpenParenthesisToken,
    CloseParenthesisToken,
    InvalidToken,

    // Expressions
    NumberExpression,
    BinaryExpression,
    ParenthesizedExpression,
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A classified slice of the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken {
    pub kind: SyntaxKind,
    pub position: usize,
    pub text: String,
    /// Parsed payload; only number tokens carry one.
    pub value: Option<i32>,
}

impl SyntaxToken {
    pub fn new(kind: SyntaxKind, position: usize, text: String) -> Self {
        Self {
            kind,
            position,
            text,
            value: None,
        }
    }

    pub fn number(position: usize, text: String, value: i32) -> Self {
        Self {
            kind: SyntaxKind::NumberToken,
            position,
            text,
            value: Some(value),
        }
    }

    /// Zero-length stand-in used when the parser expected `kind` but found something else.
    pub fn missing(kind: SyntaxKind, position: usize) -> Self {
        Self::new(kind, position, String::new())
    }

    pub fn span(&self) -> Span {
        Span::new(self.position, self.position + self.text.chars().count())
    }

    /// True for placeholders synthesized during error recovery.
    pub fn is_missing(&self) -> bool {
        self.text.is_empty() && self.kind != SyntaxKind::EofToken
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionSyntax {
    Number {
        number_token: SyntaxToken,
    },
    Binary {
        left: Box<ExpressionSyntax>,
        operator_token: SyntaxToken,
        right: Box<ExpressionSyntax>,
    },
    Parenthesized {
        open_parenthesis_token: SyntaxToken,
        expression: Box<ExpressionSyntax>,
        close_parenthesis_token: SyntaxToken,
    },
}

impl ExpressionSyntax {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            ExpressionSyntax::Number { .. } => SyntaxKind::NumberExpression,
            ExpressionSyntax::Binary { .. } => SyntaxKind::BinaryExpression,
            ExpressionSyntax::Parenthesized { .. } => SyntaxKind::ParenthesizedExpression,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ExpressionSyntax::Number { number_token } => number_token.span(),
            ExpressionSyntax::Binary { left, right, .. } => left.span().to(&right.span()),
            ExpressionSyntax::Parenthesized {
                open_parenthesis_token,
                close_parenthesis_token,
                ..
            } => open_parenthesis_token
                .span()
                .to(&close_parenthesis_token.span()),
        }
    }

    pub fn children(&self) -> Vec<SyntaxNode<'_>> {
        match self {
            ExpressionSyntax::Number { number_token } => vec![SyntaxNode::Token(number_token)],
            ExpressionSyntax::Binary {
                left,
                operator_token,
                right,
            } => vec![
                SyntaxNode::Expression(left),
                SyntaxNode::Token(operator_token),
                SyntaxNode::Expression(right),
            ],
            ExpressionSyntax::Parenthesized {
                open_parenthesis_token,
                expression,
                close_parenthesis_token,
            } => vec![
                SyntaxNode::Token(open_parenthesis_token),
                SyntaxNode::Expression(expression),
                SyntaxNode::Token(close_parenthesis_token),
            ],
        }
    }

    /// Leaf tokens of this expression in source order.
    pub fn tokens(&self) -> Vec<&SyntaxToken> {
        let mut tokens = Vec::new();
        SyntaxNode::Expression(self).collect_tokens(&mut tokens);
        tokens
    }
}

/// Borrowed view over any node of the tree, used for structural walks.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxNode<'a> {
    Token(&'a SyntaxToken),
    Expression(&'a ExpressionSyntax),
}

impl<'a> SyntaxNode<'a> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxNode::Token(token) => token.kind,
            SyntaxNode::Expression(expr) => expr.kind(),
        }
    }

    pub fn children(&self) -> Vec<SyntaxNode<'a>> {
        match *self {
            SyntaxNode::Token(_) => Vec::new(),
            SyntaxNode::Expression(expr) => expr.children(),
        }
    }

    fn collect_tokens(&self, out: &mut Vec<&'a SyntaxToken>) {
        match *self {
            SyntaxNode::Token(token) => out.push(token),
            SyntaxNode::Expression(_) => {
                for child in self.children() {
                    child.collect_tokens(out);
                }
            }
        }
    }
}

impl<'a> From<&'a SyntaxToken> for SyntaxNode<'a> {
    fn from(token: &'a SyntaxToken) -> Self {
        SyntaxNode::Token(token)
    }
}

impl<'a> From<&'a ExpressionSyntax> for SyntaxNode<'a> {
    fn from(expr: &'a ExpressionSyntax) -> Self {
        SyntaxNode::Expression(expr)
    }
}
