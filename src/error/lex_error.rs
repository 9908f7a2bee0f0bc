/// An unrecognized character in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The source line where the character was found.
    pub line:      usize,
    /// The source column where the character was found.
    pub column:    usize,
    /// The offending character.
    pub character: char,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error ({}:{}): Unidentified character '{}'.",
               self.line, self.column, self.character)
    }
}

impl std::error::Error for LexError {}
