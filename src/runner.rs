use crate::ast::SyntaxNode;
use crate::error::Diagnostic;
use crate::evaluator::Evaluator;
use crate::parser::SyntaxTree;
use crate::printer::format_tree;
use ariadne::{Color, Fmt};

/// Parses and evaluates one line, printing either the result or every
/// diagnostic. Returns whether a value was produced.
pub fn run(source: &str, show_tree: bool) -> bool {
    let tree = SyntaxTree::parse(source);

    if show_tree {
        print!("{}", format_tree(SyntaxNode::Expression(&tree.root)).fg(Color::Fixed(244)));
    }

    if tree.has_errors() {
        for diagnostic in &tree.diagnostics {
            report(diagnostic, source);
        }
        return false;
    }

    match Evaluator::new().evaluate(&tree) {
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(error) => {
            report(&error.into(), source);
            false
        }
    }
}

fn report(diagnostic: &Diagnostic, source: &str) {
    if diagnostic.report(source).is_err() {
        eprintln!("{}", diagnostic);
    }
}
