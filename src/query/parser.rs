// third-party imports
use wildcard::Pattern;

// local imports
use super::{
    Precedence,
    ast::{Expr, Op, Postfix},
    error::{SyntaxError, SyntaxErrorKind},
    lexer::{Token, TokenKind},
};

// ---

/// Builds an expression tree from `tokens`.
///
/// Returns `None` for an empty token sequence. `end` is the character length
/// of the query and is reported for errors found at the end of input.
///
/// Operators are reordered with an explicit stack, so nesting depth is not
/// limited by the call stack.
pub fn parse(tokens: Vec<Token>, precedence: Precedence, end: usize) -> Result<Option<Expr>, SyntaxError> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser {
        output: Vec::with_capacity(tokens.len()),
        stack: Vec::new(),
        precedence,
    };
    let mut expect_operand = true;

    for Token { kind, pos } in tokens {
        let error = |error_kind| Err(SyntaxError::new(error_kind, pos));

        match (kind, expect_operand) {
            (TokenKind::Term(text), true) => {
                parser.output.push(Postfix::Literal(Pattern::literal(text)));
                expect_operand = false;
            }
            (TokenKind::Phrase { text, .. }, true) => {
                parser.output.push(Postfix::Literal(Pattern::new(text)));
                expect_operand = false;
            }
            (TokenKind::LParen, true) => parser.stack.push(Pending::Group(pos)),
            (TokenKind::RParen, true) => return error(SyntaxErrorKind::MissingOperand),
            (TokenKind::And | TokenKind::Or, true) => return error(SyntaxErrorKind::UnexpectedOperator),
            (TokenKind::And, false) => {
                parser.operator(Op::And);
                expect_operand = true;
            }
            (TokenKind::Or, false) => {
                parser.operator(Op::Or);
                expect_operand = true;
            }
            (TokenKind::RParen, false) => {
                if !parser.close_group() {
                    return error(SyntaxErrorKind::UnbalancedParens);
                }
            }
            (TokenKind::Term(_) | TokenKind::Phrase { .. } | TokenKind::LParen, false) => {
                return error(SyntaxErrorKind::MissingOperand);
            }
        }
    }

    if expect_operand {
        return Err(SyntaxError::new(SyntaxErrorKind::MissingOperand, end));
    }

    while let Some(pending) = parser.stack.pop() {
        match pending {
            Pending::Op(op) => parser.output.push(Postfix::Op(op)),
            Pending::Group(pos) => return Err(SyntaxError::new(SyntaxErrorKind::UnbalancedParens, pos)),
        }
    }

    Ok(Some(Expr::from_postfix(parser.output)))
}

struct Parser {
    output: Vec<Postfix>,
    stack: Vec<Pending>,
    precedence: Precedence,
}

enum Pending {
    Op(Op),
    /// An open parenthesis at the given position.
    Group(usize),
}

impl Parser {
    fn operator(&mut self, op: Op) {
        let power = self.precedence.binding_power(op);
        while let Some(&Pending::Op(top)) = self.stack.last() {
            if self.precedence.binding_power(top) < power {
                break;
            }
            self.output.push(Postfix::Op(top));
            self.stack.pop();
        }
        self.stack.push(Pending::Op(op));
    }

    /// Moves operators up to the innermost open parenthesis to the output.
    ///
    /// Returns `false` if there is no open parenthesis.
    fn close_group(&mut self) -> bool {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Op(op) => self.output.push(Postfix::Op(op)),
                Pending::Group(_) => return true,
            }
        }
        false
    }
}
