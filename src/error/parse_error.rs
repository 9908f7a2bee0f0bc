#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The lexeme actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Blocks, parentheses, `!` and operator chains were nested deeper than
    /// the parser allows.
    NestingTooDeep {
        /// How deep constructs may nest.
        limit:  usize,
        /// The source line of the construct that went too deep.
        line:   usize,
        /// The source column of the construct that went too deep.
        column: usize,
    },
    /// A block was not closed within the statement limit, or not at all.
    UnterminatedBlock {
        /// The keyword that opened the block (`if` or `while`).
        opener: &'static str,
        /// The keyword that should have closed it.
        closer: &'static str,
        /// How many statements the block may hold.
        limit:  usize,
        /// The source line of the opening keyword.
        line:   usize,
        /// The source column of the opening keyword.
        column: usize,
    },
}

impl ParseError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::UnterminatedBlock { line, .. } => *line,
        }
    }

    /// The source column the error refers to.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::NestingTooDeep { column, .. }
            | Self::UnterminatedBlock { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    column, } => write!(f,
                                                        "Error on line {line}, column {column}: Expected {expected}, found '{found}'."),

            Self::NestingTooDeep { limit, line, column } => write!(f,
                                                                   "Error on line {line}, column {column}: Nesting is too deep (more than {limit} levels)."),

            Self::UnterminatedBlock { opener,
                                      closer,
                                      limit,
                                      line,
                                      column, } => write!(f,
                                                          "Error on line {line}, column {column}: '{opener}' block is missing '{closer}' (no closing keyword within {limit} statements)."),
        }
    }
}

impl std::error::Error for ParseError {}
