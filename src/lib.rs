// dacalc Library
//
// Front end for single-line integer arithmetic: a lexer, a recursive-descent
// parser that collects diagnostics instead of stopping, and a tree-walking
// evaluator.

// Public modules
pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod repl;
pub mod runner;

// Re-export commonly used items
pub use ast::{ExpressionSyntax, SyntaxKind, SyntaxNode, SyntaxToken};
pub use error::{Diagnostic, DiagnosticKind, EvalError, Span};
pub use evaluator::Evaluator;
pub use lexer::Lexer;
pub use parser::{Parser, SyntaxTree};
pub use printer::format_tree;

// Re-export main functions
pub use repl::start as start_repl;
pub use runner::run;

/// Parses one line into a tree plus its diagnostics.
pub fn parse(text: &str) -> SyntaxTree {
    SyntaxTree::parse(text)
}

/// Evaluates a diagnostic-free tree.
pub fn evaluate(tree: &SyntaxTree) -> Result<i32, EvalError> {
    Evaluator::new().evaluate(tree)
}
