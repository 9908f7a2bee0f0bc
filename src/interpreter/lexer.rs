use logos::Logos;

use crate::error::LexError;

/// Columns a tab character advances the cursor by.
pub const TAB_WIDTH: usize = 4;

/// The kind of a lexical token.
///
/// Each variant corresponds to one fixed symbol, one keyword, or one class of
/// words (identifiers, numbers, booleans, type names). The source text of the
/// token is kept separately in [`Token::lexeme`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `let`
    #[token("let")]
    Let,
    /// `be`
    #[token("be")]
    Be,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `endif`
    #[token("endif")]
    EndIf,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `endwhile`
    #[token("endwhile")]
    EndWhile,
    /// `show`
    #[token("show")]
    Show,
    /// Boolean literal tokens, `true` or `false`.
    #[token("true")]
    #[token("false")]
    Boolean,
    /// Type names, `num` or `bool`.
    #[token("num")]
    #[token("bool")]
    TypeName,
    /// Identifier tokens; a run of ASCII letters that is not a reserved word.
    #[regex(r"[a-zA-Z]+")]
    Identifier,
    /// Numeric literal tokens, such as `42`, `3.14` or `7.`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `*`
    #[token("*")]
    Star,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `/`
    #[token("/")]
    Slash,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks. Never emitted, only used to track positions.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Terminates every token stream. Never produced by the scanner itself.
    EndOfInput,
}

impl TokenKind {
    /// Returns `true` for the statement keywords (`let`, `if`, `show`, ...).
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self,
                 Self::Let
                 | Self::Be
                 | Self::If
                 | Self::Then
                 | Self::EndIf
                 | Self::While
                 | Self::Do
                 | Self::EndWhile
                 | Self::Show)
    }

    /// Short name of the token class, as shown by the token dump.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Let
            | Self::Be
            | Self::If
            | Self::Then
            | Self::EndIf
            | Self::While
            | Self::Do
            | Self::EndWhile
            | Self::Show => "KEYWORD",
            Self::Boolean => "BOOLEAN",
            Self::TypeName => "TYPE",
            Self::Identifier => "ID",
            Self::Number => "NUMBER",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Equals => "EQUALS",
            Self::EqualEqual => "EQEQUALS",
            Self::Bang => "BANG",
            Self::BangEqual => "BANGEQ",
            Self::Less => "LTHAN",
            Self::Greater => "GTHAN",
            Self::LessEqual => "LTHANEQ",
            Self::GreaterEqual => "GTHANEQ",
            Self::Star => "STAR",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Slash => "SLASH",
            Self::Ampersand => "AND",
            Self::Pipe => "OR",
            Self::Comment | Self::NewLine | Self::Ignored => "TRIVIA",
            Self::EndOfInput => "END",
        }
    }
}

/// A classified lexeme together with the position it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The source text backing the token. `EOF` for the end-of-input token.
    pub lexeme: String,
    /// 1-based source line.
    pub line:   usize,
    /// 1-based source column, tabs counting as [`TAB_WIDTH`] columns.
    pub column: usize,
}

impl Token {
    /// Returns `true` if this token is of the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{} - {}}}", self.lexeme, self.kind.name())
    }
}

/// An ordered sequence of tokens that always ends with exactly one
/// [`TokenKind::EndOfInput`] token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    fn terminated(mut tokens: Vec<Token>, line: usize, column: usize) -> Self {
        tokens.push(Token { kind: TokenKind::EndOfInput,
                            lexeme: "EOF".to_string(),
                            line,
                            column });
        Self { tokens }
    }

    /// All tokens, including the trailing end-of-input token.
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates over the tokens in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of tokens, including the trailing end-of-input token.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A stream is never empty: it holds at least the end-of-input token.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type IntoIter = std::slice::Iter<'a, Token>;
    type Item = &'a Token;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and a column cursor: the byte offset just past the
/// last measured text together with the column it corresponds to. Columns are
/// computed by measuring only the text between the cursor and the next token,
/// so every byte of a line is measured once.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:          usize,
    /// Byte offset up to which columns have been measured.
    pub cursor:        usize,
    /// Column of the character at `cursor`.
    pub cursor_column: usize,
}

impl LexerExtras {
    /// Column of the character at byte offset `offset` of `source`, which must
    /// lie on the current line at or after the cursor.
    fn column_at(&self, source: &str, offset: usize) -> usize {
        self.cursor_column + visual_width(&source[self.cursor..offset])
    }

    /// Moves the cursor to `offset`, which sits at `column`.
    const fn advance(&mut self, offset: usize, column: usize) {
        self.cursor = offset;
        self.cursor_column = column;
    }
}

fn newline(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let end = lex.span().end;
    lex.extras.line += 1;
    lex.extras.advance(end, 1);
    logos::Skip
}

/// Width in columns of `text`, expanding tabs to [`TAB_WIDTH`].
fn visual_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

/// Converts source text into a [`TokenStream`].
///
/// Scanning stops at the first character that cannot start a token. In that
/// case every token produced so far is discarded and the offending character
/// is reported with its position.
///
/// # Errors
/// Returns a [`LexError`] for an unrecognized character.
///
/// # Example
/// ```
/// use camlang::interpreter::lexer::{TokenKind, tokenize};
///
/// let stream = tokenize("show 1 <= 2;").unwrap();
/// let kinds: Vec<_> = stream.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Show,
///                 TokenKind::Number,
///                 TokenKind::LessEqual,
///                 TokenKind::Number,
///                 TokenKind::Semicolon,
///                 TokenKind::EndOfInput]);
///
/// let err = tokenize("let x be num;\nx = 4 % 2;").unwrap_err();
/// assert_eq!((err.line, err.column, err.character), (2, 7, '%'));
/// ```
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source,
                                                 LexerExtras { line:          1,
                                                               cursor:        0,
                                                               cursor_column: 1, });

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let line = lexer.extras.line;
        let column = lexer.extras.column_at(source, span.start);

        match result {
            Ok(kind) => {
                let lexeme = lexer.slice().to_string();
                lexer.extras
                     .advance(span.end, column + visual_width(&lexeme));
                tokens.push(Token { kind,
                                    lexeme,
                                    line,
                                    column });
            },
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or('\0');
                log::debug!("lexing stopped at {line}:{column} after {} tokens", tokens.len());
                return Err(LexError { line,
                                      column,
                                      character });
            },
        }
    }

    let column = lexer.extras.column_at(source, source.len());
    let stream = TokenStream::terminated(tokens, lexer.extras.line, column);
    log::debug!("tokenized {} tokens", stream.len());

    Ok(stream)
}
