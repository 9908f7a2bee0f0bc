use camlang::interpreter::lexer::{Token, TokenKind, tokenize};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
                 .iter()
                 .map(|t| t.kind)
                 .collect()
}

fn positions(src: &str) -> Vec<(usize, usize)> {
    tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
                 .iter()
                 .map(|t| (t.line, t.column))
                 .collect()
}

#[test]
fn empty_source_yields_only_end_of_input() {
    let stream = tokenize("").unwrap();
    assert_eq!(stream.len(), 1);
    assert_eq!(stream.as_slice()[0],
               Token { kind:   TokenKind::EndOfInput,
                       lexeme: "EOF".to_string(),
                       line:   1,
                       column: 1, });
}

#[test]
fn keywords_types_and_booleans() {
    use TokenKind::{
        Be, Boolean, Do, EndIf, EndOfInput, EndWhile, If, Let, Show, Then, TypeName, While,
    };

    assert_eq!(kinds("let be if then endif while do endwhile show true false num bool"),
               vec![Let, Be, If, Then, EndIf, While, Do, EndWhile, Show, Boolean, Boolean,
                    TypeName, TypeName, EndOfInput]);
}

#[test]
fn identifiers_are_maximal_letter_runs() {
    let stream = tokenize("letter showx iff numb Truth").unwrap();
    let idents: Vec<_> = stream.iter()
                               .filter(|t| t.is(TokenKind::Identifier))
                               .map(|t| t.lexeme.as_str())
                               .collect();
    assert_eq!(idents, vec!["letter", "showx", "iff", "numb", "Truth"]);
}

#[test]
fn two_character_operators_win_over_prefixes() {
    use TokenKind::{Bang, BangEqual, EndOfInput, EqualEqual, Equals, Greater, GreaterEqual, Less,
                    LessEqual};

    assert_eq!(kinds("== = != ! <= < >= >"),
               vec![EqualEqual, Equals, BangEqual, Bang, LessEqual, Less, GreaterEqual, Greater,
                    EndOfInput]);
    assert_eq!(kinds("a==b"),
               vec![TokenKind::Identifier, EqualEqual, TokenKind::Identifier, EndOfInput]);
}

#[test]
fn numbers_with_and_without_fraction() {
    let stream = tokenize("42 3.14 7.").unwrap();
    let numbers: Vec<_> = stream.iter()
                                .filter(|t| t.is(TokenKind::Number))
                                .map(|t| t.lexeme.as_str())
                                .collect();
    assert_eq!(numbers, vec!["42", "3.14", "7."]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(kinds("show 1; // prints one\n// whole line\r\n\tshow 2;"),
               vec![TokenKind::Show,
                    TokenKind::Number,
                    TokenKind::Semicolon,
                    TokenKind::Show,
                    TokenKind::Number,
                    TokenKind::Semicolon,
                    TokenKind::EndOfInput]);
}

#[test]
fn positions_are_one_based_and_track_lines() {
    assert_eq!(positions("let x be num;\n  x = 1;"),
               vec![(1, 1), (1, 5), (1, 7), (1, 10), (1, 13), (2, 3), (2, 5), (2, 7), (2, 8),
                    (2, 9)]);
}

#[test]
fn tabs_advance_four_columns() {
    assert_eq!(positions("\tshow\t1;"), vec![(1, 5), (1, 13), (1, 14), (1, 15)]);
}

#[test]
fn unknown_character_reports_its_position() {
    let err = tokenize("show 1;\n  show 2 $ 3;").unwrap_err();
    assert_eq!((err.line, err.column, err.character), (2, 10, '$'));
    assert_eq!(err.to_string(), "Error (2:10): Unidentified character '$'.");
}

#[test]
fn second_dot_in_number_is_rejected() {
    let err = tokenize("show 1.2.3;").unwrap_err();
    assert_eq!((err.line, err.column, err.character), (1, 9, '.'));
}

#[test]
fn tokens_render_as_lexeme_and_class() {
    let rendered: Vec<_> = tokenize("let x be num; x = true;").unwrap()
                                                              .iter()
                                                              .map(ToString::to_string)
                                                              .collect();
    assert_eq!(rendered,
               vec!["{let - KEYWORD}",
                    "{x - ID}",
                    "{be - KEYWORD}",
                    "{num - TYPE}",
                    "{; - SEMICOLON}",
                    "{x - ID}",
                    "{= - EQUALS}",
                    "{true - BOOLEAN}",
                    "{; - SEMICOLON}",
                    "{EOF - END}"]);
}

#[test]
fn tokenizing_is_repeatable() {
    let src = "let n be num;\nwhile n < 3 do n = n + 1; endwhile // done";
    assert_eq!(tokenize(src).unwrap(), tokenize(src).unwrap());
}

#[test]
fn long_single_line_lexes_in_linear_time() {
    let statements = 50_000;
    let src = "show 1; ".repeat(statements);

    let start = std::time::Instant::now();
    let stream = tokenize(&src).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(stream.len(), statements * 3 + 1);
    let last_show = &stream.as_slice()[stream.len() - 4];
    assert_eq!((last_show.line, last_show.column), (1, 8 * (statements - 1) + 1));
    let end = &stream.as_slice()[stream.len() - 1];
    assert_eq!((end.line, end.column), (1, 8 * statements + 1));
    assert!(elapsed.as_secs() < 5, "lexing one long line took {elapsed:?}");
}

#[test]
fn columns_restart_after_comment_and_newline() {
    assert_eq!(positions("show 1; // note\n\tshow 2;"),
               vec![(1, 1), (1, 6), (1, 7), (2, 5), (2, 10), (2, 11), (2, 12)]);
}
