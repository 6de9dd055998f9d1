use crate::{
    error::ParseError,
    interpreter::lexer::ParseResult,
    token::{Assoc, BinaryOp, Token},
};

/// Reorders a token sequence from infix to postfix (Reverse Polish) order.
///
/// This is the operator-precedence (shunting-yard) reduction: operands
/// stream straight to the output while operators wait on a staging stack
/// until an incoming operator with looser binding, a closing parenthesis,
/// or the end of input flushes them. A staged function binds to the first
/// operand or closed group emitted after it.
///
/// The input sequence is consumed; every token moves either into the output
/// or onto the staging stack, and the stack drains into the output at the
/// end.
///
/// # Errors
/// - [`ParseError::UnbalancedParenthesis`] when a parenthesis has no match.
/// - [`ParseError::EmptyExpression`] when the output contains no operand.
///
/// # Example
/// ```
/// use shunt::interpreter::{lexer::tokenize, postfix::convert};
///
/// let postfix = convert(tokenize("3 + 4 * 2").unwrap()).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(|(t, _)| t.to_string()).collect();
/// assert_eq!(rendered, ["3", "4", "2", "*", "+"]);
/// ```
pub fn convert(tokens: Vec<(Token, usize)>) -> ParseResult<Vec<(Token, usize)>> {
    let mut output: Vec<(Token, usize)> = Vec::with_capacity(tokens.len());
    let mut operators: Vec<(Token, usize)> = Vec::new();

    for (token, position) in tokens {
        match token {
            Token::Integer(_) | Token::Float(_) => {
                output.push((token, position));
                pop_pending_function(&mut operators, &mut output);
            },

            Token::Binary(op) => {
                while let Some(&(staged, staged_position)) = operators.last() {
                    if !should_pop(staged, op) {
                        break;
                    }
                    operators.pop();
                    output.push((staged, staged_position));
                }
                operators.push((token, position));
            },

            // A prefix operator is right-associative, so it never has to
            // flush peers before it is staged.
            Token::Unary(_) | Token::Function(_) | Token::LParen => {
                operators.push((token, position));
            },

            Token::RParen => {
                loop {
                    match operators.pop() {
                        Some((Token::LParen, _)) => break,
                        Some(staged) => output.push(staged),
                        None => return Err(ParseError::UnbalancedParenthesis { position }),
                    }
                }
                pop_pending_function(&mut operators, &mut output);
            },
        }
    }

    while let Some((token, position)) = operators.pop() {
        if matches!(token, Token::LParen) {
            return Err(ParseError::UnbalancedParenthesis { position });
        }
        output.push((token, position));
    }

    let has_operand = output.iter()
                            .any(|(token, _)| matches!(token, Token::Integer(_) | Token::Float(_)));
    if !has_operand {
        return Err(ParseError::EmptyExpression);
    }

    Ok(output)
}

/// Renders a postfix sequence as text, one lexeme per line.
///
/// The output ends with a newline and is stable: rendering the same
/// sequence twice yields identical bytes.
#[must_use]
pub fn render(postfix: &[(Token, usize)]) -> String {
    let mut out = String::new();
    for (token, _) in postfix {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Decides whether a staged token must be flushed to the output before the
/// incoming binary operator is staged.
///
/// Left parentheses and pending functions always stay. A staged prefix
/// operator enters the rule with rank 1, so it outbinds every binary
/// operator and is always flushed first. For the rest, an incoming
/// right-associative operator only yields to strictly tighter bindings,
/// while a left-associative one also yields to staged left-associative
/// peers of equal rank.
fn should_pop(staged: Token, incoming: BinaryOp) -> bool {
    let (precedence, associativity) = match staged {
        Token::Unary(op) => (op.precedence(), op.associativity()),
        Token::Binary(op) => (op.precedence(), op.associativity()),
        _ => return false,
    };

    match incoming.associativity() {
        Assoc::Right => precedence < incoming.precedence(),
        Assoc::Left => {
            precedence < incoming.precedence()
            || (precedence == incoming.precedence() && associativity == Assoc::Left)
        },
    }
}

/// Pops a single pending function once its operand has landed in the
/// output.
///
/// Functions are strictly unary-prefix with no argument-count marker, so
/// the staged function resolves as soon as the operand following it has
/// been emitted.
fn pop_pending_function(operators: &mut Vec<(Token, usize)>, output: &mut Vec<(Token, usize)>) {
    if let Some(&(token @ Token::Function(_), position)) = operators.last() {
        operators.pop();
        output.push((token, position));
    }
}
