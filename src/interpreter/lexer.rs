use logos::Logos;

use crate::{
    error::ParseError,
    token::{BinaryOp, Function, Token, UnaryOp},
};

/// Result type used by the lexer and the postfix converter.
///
/// Both stages return either a value of type `T` or a `ParseError`
/// describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Lexer-internal failure raised while scanning a single token.
///
/// Carries no location; [`tokenize`] attaches the span offset when it
/// converts the failure into a [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    UnrecognizedCharacter,
    /// A numeral with more than one decimal point.
    MalformedNumber,
    /// An integer literal that does not fit the 32-bit operand type.
    LiteralTooLarge,
}

/// Raw lexical shapes recognized by the scanner.
///
/// Operator characters are not yet split into unary and binary forms at this
/// level; that classification needs one token of look-back and happens in
/// [`tokenize`].
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n\r\f]+")]
enum RawToken {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", lex_integer)]
    Integer(i32),
    /// Floating-point literal tokens, such as `2.5` or `7.`.
    /// A digit run with two or more decimal points is rejected outright.
    #[regex(r"[0-9]+\.[0-9]*", lex_float)]
    #[regex(r"[0-9]+(\.[0-9]*){2,}", malformed_number)]
    Float(f64),
    /// Identifier tokens, validated against the function allow-list later.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `^`
    #[token("^")]
    Caret,
    /// `|`
    #[token("|")]
    Pipe,
    /// `~`
    #[token("~")]
    Tilde,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses an integer literal from the current token slice.
fn lex_integer(lex: &logos::Lexer<RawToken>) -> Result<i32, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Parses a floating-point literal from the current token slice.
fn lex_float(lex: &logos::Lexer<RawToken>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::MalformedNumber)
}

/// Rejects a numeral that matched the multi-dot pattern.
fn malformed_number(_: &logos::Lexer<RawToken>) -> Result<f64, LexError> {
    Err(LexError::MalformedNumber)
}

/// Scans `source` into a classified token sequence.
///
/// Tokens are returned in source order, each paired with its byte offset.
/// Operator characters are split into unary and binary forms here: a `+`,
/// `-` or `~` is unary exactly when the previously emitted token is absent,
/// an operator of either kind, or a left parenthesis. `~` outside that
/// prefix position is rejected, since it has no binary meaning.
///
/// # Errors
/// Returns a [`ParseError`] for unrecognized characters, numerals with two
/// decimal points, integer literals that do not fit the 32-bit operand
/// type, identifiers outside the function allow-list, and `~` in binary
/// position. All tokens produced before the failure are discarded.
///
/// # Example
/// ```
/// use shunt::{interpreter::lexer::tokenize, token::Token};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0], (Token::Integer(1), 0));
/// assert_eq!(tokens[2], (Token::Integer(2), 4));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens: Vec<(Token, usize)> = Vec::new();

    while let Some(raw) = lexer.next() {
        let position = lexer.span().start;
        let raw = match raw {
            Ok(raw) => raw,
            Err(error) => return Err(at_position(error, lexer.slice(), position)),
        };

        let token = match raw {
            RawToken::Integer(value) => Token::Integer(value),
            RawToken::Float(value) => Token::Float(value),
            RawToken::Identifier(name) => match Function::from_name(&name) {
                Some(function) => Token::Function(function),
                None => return Err(ParseError::UnknownFunction { name, position }),
            },
            RawToken::DoubleStar => Token::Binary(BinaryOp::Pow),
            RawToken::ShiftLeft => Token::Binary(BinaryOp::Shl),
            RawToken::ShiftRight => Token::Binary(BinaryOp::Shr),
            RawToken::Plus => sign_like(BinaryOp::Add, UnaryOp::Plus, tokens.last()),
            RawToken::Minus => sign_like(BinaryOp::Sub, UnaryOp::Negate, tokens.last()),
            RawToken::Tilde => {
                if !prefix_position(tokens.last()) {
                    return Err(ParseError::UnaryOnlyOperator { operator: UnaryOp::Complement.symbol(),
                                                               position });
                }
                Token::Unary(UnaryOp::Complement)
            },
            RawToken::Star => Token::Binary(BinaryOp::Mul),
            RawToken::Slash => Token::Binary(BinaryOp::Div),
            RawToken::Percent => Token::Binary(BinaryOp::Rem),
            RawToken::Ampersand => Token::Binary(BinaryOp::BitAnd),
            RawToken::Caret => Token::Binary(BinaryOp::BitXor),
            RawToken::Pipe => Token::Binary(BinaryOp::BitOr),
            RawToken::LParen => Token::LParen,
            RawToken::RParen => Token::RParen,
        };

        tokens.push((token, position));
    }

    Ok(tokens)
}

/// Reports whether the next operator stands in prefix position.
///
/// Prefix position is the start of the expression, the slot after any
/// operator (unary or binary), and the slot after a left parenthesis.
fn prefix_position(previous: Option<&(Token, usize)>) -> bool {
    matches!(previous,
             None | Some((Token::Binary(_) | Token::Unary(_) | Token::LParen, _)))
}

/// Classifies a sign-like operator character as unary or binary by looking
/// back at the previously emitted token.
fn sign_like(binary: BinaryOp, unary: UnaryOp, previous: Option<&(Token, usize)>) -> Token {
    if prefix_position(previous) {
        Token::Unary(unary)
    } else {
        Token::Binary(binary)
    }
}

/// Attaches the failing span to a scanner error.
fn at_position(error: LexError, lexeme: &str, position: usize) -> ParseError {
    match error {
        LexError::UnrecognizedCharacter => ParseError::UnrecognizedCharacter { lexeme: lexeme.to_string(),
                                                                               position },
        LexError::MalformedNumber => ParseError::MalformedNumber { lexeme: lexeme.to_string(),
                                                                   position },
        LexError::LiteralTooLarge => ParseError::LiteralTooLarge { position },
    }
}
