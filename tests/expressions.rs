use shunt::{
    error::ErrorKind,
    get_result,
    interpreter::lexer::tokenize,
};

fn eval(src: &str) -> String {
    match get_result(src, false) {
        Ok(result) => result,
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn postfix(src: &str) -> String {
    match get_result(src, true) {
        Ok(result) => result,
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn eval_kind(src: &str) -> ErrorKind {
    match get_result(src, false) {
        Ok(result) => panic!("'{src}' evaluated to '{result}' but was expected to fail"),
        Err(e) => e.kind(),
    }
}

#[test]
fn integer_arithmetic_and_precedence() {
    assert_eq!(eval("2 + 3 * 4"), "14");
    assert_eq!(eval("(2 + 3) * 4"), "20");
    assert_eq!(eval("7 / 2"), "3");
    assert_eq!(eval("10 % 3"), "1");
    assert_eq!(eval("2 + 3 << 1"), "10");
}

#[test]
fn additive_operators_are_left_associative() {
    assert_eq!(eval("10 - 4 - 3"), "3");
    assert_eq!(eval("100 / 10 / 5"), "2");
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(eval("2 ** 3 ** 2"), "512");
    assert_eq!(eval("2 ** 10"), "1024");
    assert_eq!(eval("5 ** 0"), "1");
}

#[test]
fn unary_operators_disambiguate_by_position() {
    assert_eq!(eval("-5 + 3"), "-2");
    assert_eq!(eval("3 - -5"), "8");
    assert_eq!(eval("~5"), "-6");
    assert_eq!(eval("-(2 + 3)"), "-5");
    assert_eq!(eval("+7"), "7");
    assert_eq!(eval("--5"), "5");
    assert_eq!(eval("-~0"), "1");
}

#[test]
fn unary_operators_bind_tighter_than_exponentiation() {
    assert_eq!(eval("-2 ** 2"), "4");
    assert_eq!(eval("2 ** -(0 - 2)"), "4");
}

#[test]
fn bitwise_and_shift_operators() {
    assert_eq!(eval("1 << 4"), "16");
    assert_eq!(eval("256 >> 4"), "16");
    assert_eq!(eval("12 & 10"), "8");
    assert_eq!(eval("12 ^ 10"), "6");
    assert_eq!(eval("12 | 10"), "14");
    assert_eq!(eval("1 | 2 ^ 4 & 4"), "7");
}

#[test]
fn integer_arithmetic_wraps() {
    assert_eq!(eval("2147483647 + 1"), "-2147483648");
    assert_eq!(eval("0 - 2147483647 - 2"), "2147483647");
    assert_eq!(eval("2 ** 31"), "-2147483648");
    assert_eq!(eval("65536 * 65536"), "0");
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_eq!(eval("1 + 2.5"), "3.5e0");
    assert_eq!(eval("2.0 * 3"), "6e0");
    assert_eq!(eval("1.5 ** 2"), "2.25e0");
    assert_eq!(eval("7.5 / 2.5"), "3e0");
    assert_eq!(eval("-2.5 + 1"), "-1.5e0");
}

#[test]
fn functions_bind_the_following_operand() {
    assert_eq!(eval("sqrt(16)"), "4e0");
    assert_eq!(eval("sqrt 16"), "4e0");
    assert_eq!(eval("log2(8)"), "3e0");
    assert_eq!(eval("sin(0)"), "0e0");
    assert_eq!(eval("cos(0)"), "1e0");
    assert_eq!(eval("tan(0)"), "0e0");
    assert_eq!(eval("sqrt(2 + 2)"), "2e0");
    assert_eq!(eval("sqrt(sqrt(16))"), "2e0");
    assert_eq!(eval("sqrt(16) + 1"), "5e0");
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(eval("  1\t+\n2  "), "3");
    assert_eq!(eval("1+2*3"), "7");
}

#[test]
fn postfix_mode_renders_one_lexeme_per_line() {
    assert_eq!(postfix("3 + 4 * 2"), "3\n4\n2\n*\n+\n");
    assert_eq!(postfix("-5 + 3"), "5\n-\n3\n+\n");
    assert_eq!(postfix("sqrt(16)"), "16\nsqrt\n");
    assert_eq!(postfix("1.5 * 2"), "1.5\n2\n*\n");
    assert_eq!(postfix("(2 + 3) * 4"), "2\n3\n+\n4\n*\n");
}

#[test]
fn postfix_mode_is_idempotent() {
    let first = postfix("1 + 2 * 3 - sqrt(4)");
    let second = postfix("1 + 2 * 3 - sqrt(4)");
    assert_eq!(first, second);
}

#[test]
fn numeral_lexemes_round_trip_through_the_lexer() {
    for source in ["42", "0", "2147483647", "2.5", "7.", "1234567.875"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 1, "'{source}' lexed to more than one token");

        let rendered = tokens[0].0.to_string();
        let relexed = tokenize(&rendered).unwrap();
        assert_eq!(relexed[0].0, tokens[0].0,
                   "'{source}' did not survive re-lexing as '{rendered}'");
    }
}

#[test]
fn syntax_errors() {
    assert_eq!(eval_kind("1 @ 2"), ErrorKind::Syntax);
    assert_eq!(eval_kind("1.2.3"), ErrorKind::Syntax);
    assert_eq!(eval_kind(".5"), ErrorKind::Syntax);
    assert_eq!(eval_kind("foo(1)"), ErrorKind::Syntax);
    assert_eq!(eval_kind("9999999999"), ErrorKind::Syntax);
    assert_eq!(eval_kind("1 ~ 2"), ErrorKind::Syntax);
}

#[test]
fn structural_errors() {
    assert_eq!(eval_kind("(1 + 2"), ErrorKind::Structural);
    assert_eq!(eval_kind("1 + 2)"), ErrorKind::Structural);
    assert_eq!(eval_kind("1 +"), ErrorKind::Structural);
    assert_eq!(eval_kind(""), ErrorKind::Structural);
    assert_eq!(eval_kind("()"), ErrorKind::Structural);
    assert_eq!(eval_kind("1 2"), ErrorKind::Structural);
}

#[test]
fn domain_errors() {
    assert_eq!(eval_kind("5 / 0"), ErrorKind::Domain);
    assert_eq!(eval_kind("5 % 0"), ErrorKind::Domain);
    assert_eq!(eval_kind("2 ** -1"), ErrorKind::Domain);
    assert_eq!(eval_kind("sqrt(-1)"), ErrorKind::Domain);
    assert_eq!(eval_kind("log2(0)"), ErrorKind::Domain);
    assert_eq!(eval_kind("log2(-4)"), ErrorKind::Domain);
    assert_eq!(eval_kind("1 << 32"), ErrorKind::Domain);
    assert_eq!(eval_kind("1 << -1"), ErrorKind::Domain);
    assert_eq!(eval_kind("(0 - 2147483647 - 1) / -1"), ErrorKind::Domain);
    assert_eq!(eval_kind("1.5 / 0"), ErrorKind::Domain);
}

#[test]
fn float_operands_reject_integer_only_operators() {
    assert_eq!(eval_kind("1 << 2.5"), ErrorKind::Domain);
    assert_eq!(eval_kind("7.5 % 2"), ErrorKind::Domain);
    assert_eq!(eval_kind("1.5 & 1"), ErrorKind::Domain);
    assert_eq!(eval_kind("~1.5"), ErrorKind::Domain);
}
