use camlang::{
    ast::{BinaryOperator, DeclaredType, Expr, Statement},
    error::ParseError,
    interpreter::parser::{block::MAX_BLOCK_STATEMENTS, core::MAX_NESTING_DEPTH},
    parse, tokenize,
};

fn parse_src(src: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"));
    parse(&tokens)
}

fn tree(src: &str) -> Vec<String> {
    parse_src(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
                  .iter()
                  .map(ToString::to_string)
                  .collect()
}

fn repeat_statement(statement: &str, times: usize) -> String {
    std::iter::repeat_n(statement, times).collect::<Vec<_>>().join(" ")
}

#[test]
fn empty_program_has_no_statements() {
    assert!(parse_src("").unwrap().is_empty());
    assert!(parse_src("// only a comment\n").unwrap().is_empty());
}

#[test]
fn declaration_records_name_type_and_line() {
    assert_eq!(parse_src("\n\nlet flag be bool;").unwrap(),
               vec![Statement::VariableDeclaration { name:          "flag".to_string(),
                                                     declared_type: DeclaredType::Boolean,
                                                     line:          3, }]);
}

#[test]
fn tree_rendering_of_simple_statements() {
    assert_eq!(tree("let x be num; x = 5; show !x;"),
               vec!["(VARDEC {x NUM})",
                    "(VARASSIGN {x <= (LITERAL {5})})",
                    "(SHOW {(UNOP {! (VARIABLE {x})})})"]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(tree("show 1 + 2 * 3;"),
               vec!["(SHOW {(BINOP {(LITERAL {1}) + (BINOP {(LITERAL {2}) * (LITERAL {3})})})})"]);
}

#[test]
fn operators_of_equal_precedence_associate_left() {
    assert_eq!(tree("show 1 - 2 - 3;"),
               vec!["(SHOW {(BINOP {(BINOP {(LITERAL {1}) - (LITERAL {2})}) - (LITERAL {3})})})"]);
}

#[test]
fn parentheses_are_kept_as_grouping() {
    assert_eq!(tree("show (1 + 2) * 3;"),
               vec!["(SHOW {(BINOP {(BRACKETS {(BINOP {(LITERAL {1}) + (LITERAL {2})})}) * (LITERAL {3})})})"]);
}

#[test]
fn precedence_ladder_from_logical_to_unary() {
    let program = parse_src("show !a | b & c == d < e + f * g;").unwrap();
    let Statement::Show { expr, .. } = &program[0] else {
        panic!("expected a show statement");
    };

    // | at the root, then &, ==, <, +, *
    let mut ops = Vec::new();
    let mut node = expr;
    while let Expr::BinaryOp { op, right, left, .. } = node {
        ops.push(*op);
        if *op == BinaryOperator::Or {
            assert!(matches!(**left, Expr::UnaryOp { .. }));
        }
        node = right;
    }
    assert_eq!(ops,
               vec![BinaryOperator::Or,
                    BinaryOperator::And,
                    BinaryOperator::Equal,
                    BinaryOperator::Less,
                    BinaryOperator::Add,
                    BinaryOperator::Mul]);
}

#[test]
fn blocks_render_with_their_bodies() {
    assert_eq!(tree("if x > 1 then show x; endif"),
               vec!["(IF {(BINOP {(VARIABLE {x}) > (LITERAL {1})}) -> (SHOW {(VARIABLE {x})})})"]);
    assert_eq!(tree("while b do b = false; show b; endwhile"),
               vec!["(WHILE {(VARIABLE {b}) -> (VARASSIGN {b <= (LITERAL {false})})(SHOW {(VARIABLE {b})})})"]);
}

#[test]
fn nested_blocks() {
    let program = parse_src("while a do if b then show 1; endif endwhile").unwrap();
    let Statement::While { body, .. } = &program[0] else {
        panic!("expected a while statement");
    };
    assert_eq!(body.len(), 1);
    assert!(matches!(body[0], Statement::If { .. }));
}

#[test]
fn missing_semicolon_is_reported_at_next_token() {
    let err = parse_src("show 1\nshow 2;").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { ref found, line: 2, column: 1, .. }
                          if found == "show"));
}

#[test]
fn missing_semicolon_at_end_of_input() {
    let err = parse_src("show 1").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == "EOF"));
    assert_eq!((err.line(), err.column()), (1, 7));

    let err = parse_src("if true then show 1;\n").unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedBlock { line: 1, column: 1, .. }));
}

#[test]
fn statement_must_start_with_a_statement_keyword() {
    let err = parse_src("5;").unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 1, column 1: Expected a statement, found '5'.");
}

#[test]
fn declaration_requires_a_type_name() {
    assert!(parse_src("let x be y;").is_err());
    assert!(parse_src("let x num;").is_err());
    assert!(parse_src("let 3 be num;").is_err());
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert!(parse_src("show (1 + 2;").is_err());
    assert!(parse_src("show 1 + 2);").is_err());
    assert!(parse_src("show ();").is_err());
}

#[test]
fn missing_then_or_do() {
    assert!(parse_src("if true show 1; endif").is_err());
    assert!(parse_src("while true show 1; endwhile").is_err());
}

#[test]
fn empty_block_is_rejected() {
    let err = parse_src("if true then endif").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == "endif"));
}

#[test]
fn unclosed_block_is_reported_at_its_opener() {
    let err = parse_src("show 0;\n  while true do show 1;").unwrap_err();
    assert_eq!(err,
               ParseError::UnterminatedBlock { opener: "while",
                                               closer: "endwhile",
                                               limit:  MAX_BLOCK_STATEMENTS,
                                               line:   2,
                                               column: 3, });
}

#[test]
fn wrong_closer_is_an_error() {
    assert!(parse_src("if true then show 1; endwhile").is_err());
}

#[test]
fn block_may_hold_up_to_the_statement_limit() {
    let src = format!("if true then {} endif",
                      repeat_statement("show 1;", MAX_BLOCK_STATEMENTS));
    let program = parse_src(&src).unwrap();
    let Statement::If { body, .. } = &program[0] else {
        panic!("expected an if statement");
    };
    assert_eq!(body.len(), MAX_BLOCK_STATEMENTS);
}

#[test]
fn block_over_the_statement_limit_is_unterminated() {
    let src = format!("if true then {} endif",
                      repeat_statement("show 1;", MAX_BLOCK_STATEMENTS + 1));
    assert!(matches!(parse_src(&src).unwrap_err(),
                     ParseError::UnterminatedBlock { opener: "if", .. }));
}

fn nested_parens(depth: usize) -> String {
    format!("show {}1{};", "(".repeat(depth), ")".repeat(depth))
}

fn nested_ifs(depth: usize) -> String {
    format!("{} show 1; {}",
            "if true then ".repeat(depth),
            "endif ".repeat(depth))
}

#[test]
fn parentheses_may_nest_up_to_the_depth_limit() {
    assert_eq!(parse_src(&nested_parens(MAX_NESTING_DEPTH)).unwrap().len(), 1);
}

#[test]
fn parentheses_nested_past_the_limit_are_rejected() {
    let err = parse_src(&nested_parens(MAX_NESTING_DEPTH + 1)).unwrap_err();
    assert_eq!(err,
               ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                            line:   1,
                                            column: 6 + MAX_NESTING_DEPTH, });
}

#[test]
fn very_deep_parentheses_report_an_error_instead_of_overflowing() {
    assert!(matches!(parse_src(&nested_parens(5_000)).unwrap_err(),
                     ParseError::NestingTooDeep { .. }));
}

#[test]
fn negations_count_towards_the_depth_limit() {
    let src = format!("show {}true;", "!".repeat(5_000));
    assert!(matches!(parse_src(&src).unwrap_err(), ParseError::NestingTooDeep { .. }));
}

#[test]
fn long_operator_chains_count_towards_the_depth_limit() {
    let within = format!("show 1{};", " + 1".repeat(MAX_NESTING_DEPTH));
    assert!(parse_src(&within).is_ok());

    let beyond = format!("show 1{};", " + 1".repeat(50_000));
    assert!(matches!(parse_src(&beyond).unwrap_err(), ParseError::NestingTooDeep { .. }));
}

#[test]
fn blocks_nested_past_the_limit_are_rejected() {
    assert!(parse_src(&nested_ifs(MAX_NESTING_DEPTH)).is_ok());
    assert!(matches!(parse_src(&nested_ifs(MAX_NESTING_DEPTH + 1)).unwrap_err(),
                     ParseError::NestingTooDeep { .. }));
}
