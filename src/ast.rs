/// The type a variable is declared with.
///
/// Fixed for the lifetime of the variable: assignments may change a
/// variable's value but never its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// `num`, a double precision floating-point number.
    Number,
    /// `bool`, `true` or `false`.
    Boolean,
}

impl DeclaredType {
    /// Maps a type name as written in source to its declared type.
    ///
    /// ## Example
    /// ```
    /// use camlang::ast::DeclaredType;
    ///
    /// assert_eq!(DeclaredType::from_name("num"), Some(DeclaredType::Number));
    /// assert_eq!(DeclaredType::from_name("string"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "num" => Some(Self::Number),
            "bool" => Some(Self::Boolean),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "num"),
            Self::Boolean => write!(f, "bool"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the line of the token it started at, for error
/// reporting during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation (`a + b`, `a == b`, `a & b`, ...).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (`!a`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A number or boolean literal, kept as its source text.
    Literal {
        /// The lexeme, e.g. `3.5` or `true`.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use camlang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::BinaryOp { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::Grouping { line, .. }
            | Self::Literal { line, .. }
            | Self::Variable { line, .. } => *line,
        }
    }
}

/// Represents a statement.
///
/// A program is an ordered list of statements; `if` and `while` own an ordered
/// body of further statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `if <condition> then <body> endif`
    If {
        /// The condition, which must evaluate to a boolean.
        condition: Expr,
        /// Statements executed when the condition holds.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `while <condition> do <body> endwhile`
    While {
        /// The condition, re-evaluated before every iteration.
        condition: Expr,
        /// Statements executed while the condition holds.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `show <expr>;`
    Show {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `let <name> be <type>;`
    VariableDeclaration {
        /// The name of the variable.
        name:          String,
        /// The type the variable is declared with.
        declared_type: DeclaredType,
        /// Line number in the source code.
        line:          usize,
    },
    /// `<name> = <expr>;`
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Show { line, .. }
            | Self::VariableDeclaration { line, .. }
            | Self::Assignment { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical or (`|`)
    Or,
    /// Logical and (`&`)
    And,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            Or => "|",
            And => "&",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
        }
    }
}

// The tree printers below render nodes in a bracketed debugging form, one
// top-level statement per line, e.g. `(VARASSIGN {x <= (LITERAL {5})})`.

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BinaryOp { left, op, right, .. } => {
                write!(f, "(BINOP {{{left} {op} {right}}})")
            },
            Self::UnaryOp { op, expr, .. } => write!(f, "(UNOP {{{op} {expr}}})"),
            Self::Grouping { expr, .. } => write!(f, "(BRACKETS {{{expr}}})"),
            Self::Literal { text, .. } => write!(f, "(LITERAL {{{text}}})"),
            Self::Variable { name, .. } => write!(f, "(VARIABLE {{{name}}})"),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::If { condition, body, .. } => {
                write!(f, "(IF {{{condition} -> ")?;
                body.iter().try_for_each(|s| write!(f, "{s}"))?;
                write!(f, "}})")
            },
            Self::While { condition, body, .. } => {
                write!(f, "(WHILE {{{condition} -> ")?;
                body.iter().try_for_each(|s| write!(f, "{s}"))?;
                write!(f, "}})")
            },
            Self::Show { expr, .. } => write!(f, "(SHOW {{{expr}}})"),
            Self::VariableDeclaration { name,
                                        declared_type, .. } => {
                let type_name = match declared_type {
                    DeclaredType::Number => "NUM",
                    DeclaredType::Boolean => "BOOL",
                };
                write!(f, "(VARDEC {{{name} {type_name}}})")
            },
            Self::Assignment { name, value, .. } => write!(f, "(VARASSIGN {{{name} <= {value}}})"),
        }
    }
}
