/// Lexical errors.
///
/// Raised by the scanner when it meets a character that cannot start any
/// token. Lexing stops at the first such character.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream: unexpected tokens, input nested too deeply and blocks
/// that are never closed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution: type
/// mismatches in operators and assignments, undeclared variables, type-changing
/// redeclarations and output failures.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The first error reported by any phase of a run.
#[derive(Debug)]
pub enum Error {
    /// Scanning failed.
    Lex(LexError),
    /// Parsing failed.
    Parse(ParseError),
    /// Execution failed.
    Runtime(RuntimeError),
    /// Writing diagnostic output (token or tree dumps) failed.
    Io(std::io::Error),
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "Error: Failed to write output: {e}."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}
