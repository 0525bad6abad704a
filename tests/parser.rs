use tally::{
    ast::{BinaryOperator, Expr},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::{
            binary::{parse_expression_at, parse_term},
            core::{Cursor, ParserConfig, Step, parse_expression, parse_expression_with},
            simple::{parse_factor, parse_simple_expression},
        },
    },
    parse_source, parse_source_with,
};

fn num(value: i64, position: usize) -> Expr {
    Expr::Number { value, position }
}

fn neg(operand: Expr, position: usize) -> Expr {
    Expr::Negate { operand: Box::new(operand),
                   position }
}

fn bin(op: BinaryOperator, left: Expr, right: Expr, position: usize) -> Expr {
    Expr::BinaryOp { op,
                     left: Box::new(left),
                     right: Box::new(right),
                     position }
}

fn run(rule: fn(&[Token], Cursor) -> Step, src: &str) -> Step {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("failed to tokenize {src:?}: {e}"));
    rule(&tokens, Cursor::start(&ParserConfig::default()))
}

fn ast(rule: fn(&[Token], Cursor) -> Step, src: &str) -> Expr {
    run(rule, src).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}")).0
}

#[test]
fn simple_expression_number() {
    assert_eq!(ast(parse_simple_expression, "2"), num(2, 0));
    assert_eq!(ast(parse_simple_expression, "(2)"), num(2, 1));
}

#[test]
fn simple_expression_negation() {
    assert_eq!(ast(parse_simple_expression, "-2"), neg(num(2, 1), 0));
    assert_eq!(ast(parse_simple_expression, "-(2)"), neg(num(2, 2), 0));
    assert_eq!(ast(parse_simple_expression, "--2"), neg(neg(num(2, 2), 1), 0));
}

#[test]
fn simple_expression_nested_grouping() {
    let expected = neg(bin(BinaryOperator::Add, num(2, 2), neg(num(3, 6), 4), 3), 0);
    assert_eq!(ast(parse_simple_expression, "-(2+-(3))"), expected);
}

#[test]
fn simple_expression_stops_before_operators() {
    let (expr, next) = run(parse_simple_expression, "2*3").unwrap();
    assert_eq!(expr, num(2, 0));
    assert_eq!(next, 1);
}

#[test]
fn factor_matches_simple_expression() {
    for src in ["2", "(2)", "-2", "(3+(2-4))", "300", "-(3+(2-4))"] {
        assert_eq!(run(parse_factor, src), run(parse_simple_expression, src), "{src}");
    }
}

#[test]
fn term_matches_factor_without_operators() {
    for src in ["100", "(100+100)", "-(100+100)"] {
        assert_eq!(run(parse_term, src), run(parse_factor, src), "{src}");
    }
}

#[test]
fn term_multiplication_and_division() {
    assert_eq!(ast(parse_term, "100*3"),
               bin(BinaryOperator::Mul, num(100, 0), num(3, 4), 3));
    assert_eq!(ast(parse_term, "10/5"),
               bin(BinaryOperator::Div, num(10, 0), num(5, 3), 2));
}

#[test]
fn term_is_left_associative() {
    let expected = bin(BinaryOperator::Div,
                       bin(BinaryOperator::Mul, num(8, 0), num(4, 2), 1),
                       num(2, 4),
                       3);
    assert_eq!(ast(parse_term, "8*4/2"), expected);
}

#[test]
fn term_leaves_additive_operators() {
    let (expr, next) = run(parse_term, "2*3+4").unwrap();
    assert_eq!(expr.to_string(), "(* 2 3)");
    assert_eq!(next, 3);
}

#[test]
fn expression_matches_term_without_additive_operators() {
    for src in ["1", "(1+3)", "-(1+-4)", "3*5", "3/(2-1)"] {
        assert_eq!(run(parse_expression_at, src), run(parse_term, src), "{src}");
    }
}

#[test]
fn expression_addition_and_subtraction() {
    assert_eq!(ast(parse_expression_at, "3+4"),
               bin(BinaryOperator::Add, num(3, 0), num(4, 2), 1));
    assert_eq!(ast(parse_expression_at, "4-3"),
               bin(BinaryOperator::Sub, num(4, 0), num(3, 2), 1));
}

#[test]
fn expression_is_left_associative() {
    assert_eq!(ast(parse_expression_at, "1-2-3").to_string(), "(- (- 1 2) 3)");
    assert_eq!(ast(parse_expression_at, "1-2+3").to_string(), "(+ (- 1 2) 3)");
}

#[test]
fn multiplication_binds_tighter() {
    let expected = bin(BinaryOperator::Add,
                       num(2, 0),
                       bin(BinaryOperator::Mul, num(3, 2), num(4, 4), 3),
                       1);
    assert_eq!(ast(parse_expression_at, "2+3*4"), expected);
    assert_eq!(ast(parse_expression_at, "(2+3)*4").to_string(), "(* (+ 2 3) 4)");
}

#[test]
fn unary_minus_binds_tighter_than_binary_operators() {
    assert_eq!(ast(parse_expression_at, "-2*3").to_string(), "(* (neg 2) 3)");
    assert_eq!(ast(parse_expression_at, "2--3").to_string(), "(- 2 (neg 3))");
}

#[test]
fn parse_expression_returns_remaining_tokens() {
    let tokens = tokenize("1+2 )").unwrap();
    let (expr, rest) = parse_expression(&tokens).unwrap();

    assert_eq!(expr.to_string(), "(+ 1 2)");
    let kinds: Vec<_> = rest.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [TokenKind::RParen, TokenKind::End]);
}

#[test]
fn parse_expression_accepts_unterminated_slices() {
    let tokens = [Token::new(TokenKind::Number(2), 0),
                  Token::new(TokenKind::Star, 1),
                  Token::new(TokenKind::Number(5), 2)];
    let (expr, rest) = parse_expression(&tokens).unwrap();

    assert_eq!(expr.to_string(), "(* 2 5)");
    assert!(rest.is_empty());
}

#[test]
fn tokens_expose_tag_and_value() {
    let tokens = tokenize("7+").unwrap();

    let tags: Vec<_> = tokens.iter().map(Token::tag).collect();
    assert_eq!(tags, ["number", "+", "end"]);
    let values: Vec<_> = tokens.iter().map(Token::value).collect();
    assert_eq!(values, [Some(7), None, None]);
}

#[test]
fn unterminated_slice_errors_point_past_last_token_start() {
    let tokens = [Token::new(TokenKind::LParen, 0), Token::new(TokenKind::Number(123), 1)];
    assert_eq!(parse_expression(&tokens).unwrap_err(),
               SyntaxError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                   position: 2, });

    let tokens = tokenize("(123").unwrap();
    assert_eq!(parse_expression(&tokens).unwrap_err(),
               SyntaxError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                   position: 4, });
}

#[test]
fn reparsing_yields_equal_trees() {
    let tokens = tokenize("-(1+2)*3-4/-5").unwrap();
    let (first, _) = parse_expression(&tokens).unwrap();
    let (second, _) = parse_expression(&tokens).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_closing_paren_is_error() {
    let err = parse_source("(2+3").unwrap_err();
    assert_eq!(err,
               SyntaxError::ExpectedClosingParen { found:    "end of input".to_string(),
                                                   position: 4, });

    let err = parse_source("(2 3)").unwrap_err();
    assert_eq!(err,
               SyntaxError::ExpectedClosingParen { found:    "number 3".to_string(),
                                                   position: 3, });
}

#[test]
fn empty_input_is_error() {
    assert_eq!(parse_source("").unwrap_err(),
               SyntaxError::UnexpectedEndOfInput { position: 0 });
    assert_eq!(parse_source("   ").unwrap_err(),
               SyntaxError::UnexpectedEndOfInput { position: 3 });
    assert_eq!(parse_expression(&[]).unwrap_err(),
               SyntaxError::UnexpectedEndOfInput { position: 0 });
}

#[test]
fn dangling_operator_is_error() {
    assert_eq!(parse_source("2+").unwrap_err(),
               SyntaxError::UnexpectedEndOfInput { position: 2 });
    assert_eq!(parse_source("2*-").unwrap_err(),
               SyntaxError::UnexpectedEndOfInput { position: 3 });
}

#[test]
fn unexpected_leading_token_is_error() {
    assert_eq!(parse_source(")").unwrap_err(),
               SyntaxError::UnexpectedToken { token:    "')'".to_string(),
                                              position: 0, });
    assert_eq!(parse_source("1 + * 2").unwrap_err(),
               SyntaxError::UnexpectedToken { token:    "'*'".to_string(),
                                              position: 4, });
    assert_eq!(parse_source("()").unwrap_err(),
               SyntaxError::UnexpectedToken { token:    "')'".to_string(),
                                              position: 1, });
}

#[test]
fn trailing_tokens_are_rejected_by_parse_source() {
    assert_eq!(parse_source("(1)(2)").unwrap_err(),
               SyntaxError::UnexpectedTrailingTokens { token:    "'('".to_string(),
                                                       position: 3, });
    assert_eq!(parse_source("1 2").unwrap_err(),
               SyntaxError::UnexpectedTrailingTokens { token:    "number 2".to_string(),
                                                       position: 2, });
}

#[test]
fn lexical_errors_are_reported() {
    assert_eq!(parse_source("2 $ 3").unwrap_err(),
               SyntaxError::UnrecognizedCharacter { text:     "$".to_string(),
                                                    position: 2, });
    assert_eq!(parse_source("1.5").unwrap_err(),
               SyntaxError::UnrecognizedCharacter { text:     ".".to_string(),
                                                    position: 1, });
    assert_eq!(parse_source("1+99999999999999999999").unwrap_err(),
               SyntaxError::LiteralTooLarge { text:     "99999999999999999999".to_string(),
                                              position: 2, });
}

#[test]
fn nesting_limit_is_enforced() {
    let config = ParserConfig { max_depth: 2 };
    assert_eq!(parse_source_with("(((1)))", &config).unwrap_err(),
               SyntaxError::NestingTooDeep { limit:    2,
                                             position: 2, });
    assert_eq!(parse_source_with("--(1)", &config).unwrap_err(),
               SyntaxError::NestingTooDeep { limit:    2,
                                             position: 2, });

    let config = ParserConfig { max_depth: 3 };
    assert_eq!(parse_source_with("(((1)))", &config).unwrap(), num(1, 3));
}

#[test]
fn sibling_groupings_do_not_accumulate_depth() {
    let config = ParserConfig { max_depth: 1 };
    let expr = parse_source_with("(1)+(2)*(3)-(4)", &config).unwrap();
    assert_eq!(expr.to_string(), "(- (+ 1 (* 2 3)) 4)");
}

#[test]
fn default_limit_stops_adversarial_input() {
    let src = format!("{}1", "-".repeat(10_000));
    assert_eq!(parse_source(&src).unwrap_err(),
               SyntaxError::NestingTooDeep { limit:    256,
                                             position: 256, });

    let src = format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000));
    assert!(matches!(parse_source(&src),
                     Err(SyntaxError::NestingTooDeep { limit: 256, .. })));
}

#[test]
fn unbounded_config_accepts_deep_input() {
    let src = format!("{}7{}", "(".repeat(300), ")".repeat(300));
    let tokens = tokenize(&src).unwrap();
    let (expr, _) = parse_expression_with(&tokens, &ParserConfig::unbounded()).unwrap();
    assert_eq!(expr, num(7, 300));
}
