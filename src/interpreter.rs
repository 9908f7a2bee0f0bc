/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the statement list, evaluates expressions, manages
/// variable scopes and writes `show` output. It is the execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Executes statements in order and evaluates expressions post-order.
/// - Keeps the scoped variable environment.
/// - Reports runtime errors such as type mismatches or undeclared variables,
///   halting execution at the first one.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a keyword, identifier, literal or symbol. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   source location.
/// - Skips whitespace and `//` comments.
/// - Reports the first unrecognized character.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream with one token of lookahead and
/// constructs the statement list of the program.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Encodes operator precedence and associativity.
/// - Validates the grammar, reporting the first error with its location.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum of numbers and booleans.
/// - Maps values to declared types.
/// - Formats values for `show`.
pub mod value;
