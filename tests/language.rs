use std::fs;

use camlang::{
    error::{Error, ParseError, RuntimeError},
    run,
};
use walkdir::WalkDir;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn output_of(src: &str) -> (Result<(), Error>, String) {
    init_logger();
    let mut out = Vec::new();
    let result = run(src, &mut out);
    (result, String::from_utf8(out).expect("output is utf-8"))
}

fn assert_output(src: &str, expected: &str) {
    let (result, output) = output_of(src);
    if let Err(e) = result {
        panic!("Script failed: {e}\n{src}");
    }
    assert_eq!(output, expected, "unexpected output for:\n{src}");
}

fn runtime_error_of(src: &str) -> RuntimeError {
    match output_of(src).0 {
        Err(Error::Runtime(e)) => e,
        Err(e) => panic!("Expected a runtime error, got: {e}"),
        Ok(()) => panic!("Script succeeded but was expected to fail"),
    }
}

#[test]
fn program_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("tests/programs").into_iter()
                                               .filter_map(Result::ok)
                                               .filter(|e| {
                                                   e.path()
                                                    .extension()
                                                    .is_some_and(|ext| ext == "cam")
                                               })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let (result, output) = output_of(&source);
        if let Err(e) = result {
            panic!("Program {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(output, expected, "Program {path:?} printed unexpected output");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn declaration_assignment_and_show() {
    assert_output("let x be num; x = 5; show x;", "5.000000\n");
    assert_output("let b be bool; b = true; show !b;", "false\n");
    assert_output("let x be num; x = 2.5; show x * 2;", "5.000000\n");
}

#[test]
fn fresh_variables_hold_their_type_default() {
    assert_output("let x be num; show x;", "0.000000\n");
    assert_output("let b be bool; show b;", "false\n");
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("show 1 + 2 * 3;", "7.000000\n");
    assert_output("show (1 + 2) * 3;", "9.000000\n");
    assert_output("show 10 - 4 - 3;", "3.000000\n");
    assert_output("show 8 / 4 / 2;", "1.000000\n");
    assert_output("show 1 / 8;", "0.125000\n");
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_output("show 1/0;", "inf\n");
    assert_output("show 0 - 1/0;", "-inf\n");
    assert_output("show 0/0;", "nan\n");
}

#[test]
fn logical_and_comparisons() {
    assert_output("show 2 < 3;", "true\n");
    assert_output("show 3 > 2;", "true\n");
    assert_output("show 2 <= 2;", "true\n");
    assert_output("show 3 >= 4;", "false\n");
    assert_output("show 2 != 3;", "true\n");
    assert_output("show 2 == 2;", "true\n");
    assert_output("show true == false;", "false\n");
    assert_output("show true & false;", "false\n");
    assert_output("show true | false;", "true\n");
    assert_output("show !false;", "true\n");
    assert_output("show !!true;", "true\n");
    assert_output("show 1 < 2 & 3 < 4;", "true\n");
    assert_output("show 1 + 1 == 2 | false;", "true\n");
}

#[test]
fn if_executes_body_only_when_condition_holds() {
    assert_output("if 1 < 2 then show 1; endif show 2;", "1.000000\n2.000000\n");
    assert_output("if 1 > 2 then show 1; endif show 2;", "2.000000\n");
}

#[test]
fn while_loop_counts_down() {
    assert_output("let n be num; n = 3; while n > 0 do show n; n = n - 1; endwhile",
                  "3.000000\n2.000000\n1.000000\n");
}

#[test]
fn while_body_redeclaration_is_idempotent() {
    assert_output(r"
        let i be num;
        i = 0;
        while i < 3 do
            let total be num;
            total = total + i;
            i = i + 1;
        endwhile
        show i;
    ",
                  "3.000000\n");
}

#[test]
fn while_body_declarations_keep_their_value_across_iterations() {
    assert_output(r"
        let i be num;
        i = 0;
        while i < 3 do
            let total be num;
            total = total + 10;
            show total;
            i = i + 1;
        endwhile
    ",
                  "10.000000\n20.000000\n30.000000\n");
}

#[test]
fn redeclaration_with_same_type_keeps_value() {
    assert_output("let x be num; x = 4; let x be num; show x;", "4.000000\n");
}

#[test]
fn block_variables_are_invisible_after_the_block() {
    assert_output("if true then let y be num; y = 1; show y; endif", "1.000000\n");

    let err = runtime_error_of("if true then let y be num; y = 1; endif show y;");
    assert!(matches!(err, RuntimeError::UnknownVariable { ref name, .. } if name == "y"));
}

#[test]
fn inner_declarations_shadow_outer_ones() {
    assert_output(r"
        let x be num;
        x = 1;
        if true then
            let x be bool;
            x = true;
            show x;
        endif
        show x;
    ",
                  "true\n1.000000\n");
}

#[test]
fn assignment_reaches_outer_scope() {
    assert_output("let x be num; if true then x = 9; endif show x;", "9.000000\n");
}

#[test]
fn later_block_may_reuse_a_name_with_another_type() {
    assert_output(r"
        if true then let v be num; v = 1; show v; endif
        if true then let v be bool; v = true; show v; endif
    ",
                  "1.000000\ntrue\n");
}

#[test]
fn type_mismatch_stops_the_program() {
    let (result, output) = output_of("let x be num; show 1; x = true; show 2;");
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::TypeMismatch { .. }))));
    assert_eq!(output, "1.000000\n");
}

#[test]
fn error_inside_loop_stops_the_program() {
    let (result, output) = output_of(r"
        let i be num;
        i = 0;
        while true do
            show i;
            i = i + 1;
            if i == 2 then i = false; endif
        endwhile
        show 100;
    ");
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::TypeMismatch { .. }))));
    assert_eq!(output, "0.000000\n1.000000\n");
}

#[test]
fn undeclared_variable_is_error() {
    assert!(matches!(runtime_error_of("x = 1;"), RuntimeError::UnknownVariable { .. }));
    assert!(matches!(runtime_error_of("show x;"), RuntimeError::UnknownVariable { .. }));
}

#[test]
fn type_changing_redeclaration_is_error() {
    assert!(matches!(runtime_error_of("let x be num; let x be bool;"),
                     RuntimeError::TypeRedeclaration { .. }));
}

#[test]
fn operator_type_violations_are_errors() {
    for src in ["show 1 + true;",
                "show true < false;",
                "show 1 & true;",
                "show 1 == true;",
                "show !1;",
                "show false / 2;"]
    {
        assert!(matches!(runtime_error_of(src), RuntimeError::UnsupportedOperand { .. }),
                "{src}");
    }
}

#[test]
fn non_boolean_conditions_are_errors() {
    assert!(matches!(runtime_error_of("if 1 then show 1; endif"),
                     RuntimeError::ExpectedBoolean { construct: "if", .. }));
    assert!(matches!(runtime_error_of("while 0 do show 1; endwhile"),
                     RuntimeError::ExpectedBoolean { construct: "while", .. }));
}

#[test]
fn runtime_errors_report_their_line() {
    let err = runtime_error_of("let x be num;\n\nx = true;");
    assert_eq!(err.line(), 3);
    assert_eq!(err.to_string(),
               "Error on line 3: Type mismatch: cannot assign bool to 'x' of type num.");
}

#[test]
fn lex_and_parse_errors_run_nothing() {
    let (result, output) = output_of("show 1; show 2 # 3;");
    assert!(matches!(result, Err(Error::Lex(_))));
    assert!(output.is_empty());

    let (result, output) = output_of("show 1; show 2");
    assert!(matches!(result, Err(Error::Parse(_))));
    assert!(output.is_empty());
}

#[test]
fn evaluation_is_deterministic() {
    let src = "let a be num; a = 1; while a < 100 do a = a * 3; show a / 7; endwhile";
    assert_eq!(output_of(src).1, output_of(src).1);
}

#[test]
fn halted_interpreter_ignores_later_runs() {
    use camlang::{interpreter::evaluator::core::Interpreter, parse, tokenize};

    let failing = parse(&tokenize("show 1; x = 2;").unwrap()).unwrap();
    let later = parse(&tokenize("show 3;").unwrap()).unwrap();

    let mut out = Vec::new();
    let mut interpreter = Interpreter::new(&mut out);
    assert!(interpreter.run(&failing).is_err());
    assert!(interpreter.is_halted());
    assert!(interpreter.run(&later).is_ok());
    drop(interpreter);

    assert_eq!(String::from_utf8(out).unwrap(), "1.000000\n");
}

#[test]
fn deeply_nested_programs_fail_with_a_diagnostic() {
    let src = format!("show {}1{};", "(".repeat(5_000), ")".repeat(5_000));
    let (result, output) = output_of(&src);
    assert!(matches!(result, Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
    assert!(output.is_empty());
}

#[test]
fn nesting_within_the_limit_runs() {
    let src = format!("show {}2{} * 3;", "(".repeat(100), ")".repeat(100));
    assert_output(&src, "6.000000\n");
}
