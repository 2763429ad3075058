use crate::ast::{ExpressionSyntax, SyntaxKind, SyntaxToken};
use crate::error::EvalError;
use crate::parser::SyntaxTree;
use tracing::debug;

/// Tree-walking evaluator. Holds no state; every call is independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a parsed line. Trees carrying diagnostics are refused outright.
    pub fn evaluate(&self, tree: &SyntaxTree) -> Result<i32, EvalError> {
        if tree.has_errors() {
            return Err(EvalError::HasDiagnostics {
                count: tree.diagnostics.len(),
            });
        }

        let value = self.evaluate_expression(&tree.root)?;
        debug!(value, "evaluated line");
        Ok(value)
    }

    pub fn evaluate_expression(&self, expr: &ExpressionSyntax) -> Result<i32, EvalError> {
        match expr {
            ExpressionSyntax::Number { number_token } => Ok(number_token.value.unwrap_or(0)),
            ExpressionSyntax::Binary {
                left,
                operator_token,
                right,
            } => {
                let left_val = self.evaluate_expression(left)?;
                let right_val = self.evaluate_expression(right)?;
                self.evaluate_binary_op(operator_token, left_val, right_val, expr)
            }
            ExpressionSyntax::Parenthesized { expression, .. } => {
                self.evaluate_expression(expression)
            }
        }
    }

    fn evaluate_binary_op(
        &self,
        operator: &SyntaxToken,
        left: i32,
        right: i32,
        expr: &ExpressionSyntax,
    ) -> Result<i32, EvalError> {
        match operator.kind {
            SyntaxKind::PlusToken => Ok(left.wrapping_add(right)),
            SyntaxKind::MinusToken => Ok(left.wrapping_sub(right)),
            SyntaxKind::MultiplyToken => Ok(left.wrapping_mul(right)),
            SyntaxKind::DivideToken => {
                if right == 0 {
                    Err(EvalError::DivisionByZero { span: expr.span() })
                } else {
                    Ok(left.wrapping_div(right))
                }
            }
            // The parser only builds binary nodes from the four operators above.
            other => unreachable!("binary expression with operator {}", other),
        }
    }
}
