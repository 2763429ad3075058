use crate::ast::SyntaxNode;
use std::fmt::{self, Write};

/// Renders `node` and its descendants as an indented tree:
///
/// ```text
/// └──BinaryExpression
///    ├──NumberExpression
///    │  └──NumberToken 1
///    ├──PlusToken
///    └──NumberExpression
///       └──NumberToken 2
/// ```
pub fn format_tree<'a>(node: impl Into<SyntaxNode<'a>>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_tree(&mut out, node.into(), "", true);
    out
}

pub fn write_tree<W: Write>(
    out: &mut W,
    node: SyntaxNode<'_>,
    indent: &str,
    is_last: bool,
) -> fmt::Result {
    let marker = if is_last { "└──" } else { "├──" };

    write!(out, "{}{}{}", indent, marker, node.kind())?;
    if let SyntaxNode::Token(token) = node {
        if let Some(value) = token.value {
            write!(out, " {}", value)?;
        }
    }
    writeln!(out)?;

    let child_indent = format!("{}{}", indent, if is_last { "   " } else { "│  " });
    let children = node.children();
    let count = children.len();

    for (i, child) in children.into_iter().enumerate() {
        write_tree(out, child, &child_indent, i + 1 == count)?;
    }

    Ok(())
}
