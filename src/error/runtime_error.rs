use crate::ast::DeclaredType;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Tried to read or assign a variable that is not declared in any visible
    /// scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assigned a value whose type differs from the variable's declared type.
    TypeMismatch {
        /// The name of the variable.
        name:     String,
        /// The declared type of the variable.
        expected: DeclaredType,
        /// The type of the assigned value.
        found:    DeclaredType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Redeclared a variable in the same scope with a different type.
    TypeRedeclaration {
        /// The name of the variable.
        name:      String,
        /// The type of the existing declaration.
        declared:  DeclaredType,
        /// The type of the new declaration.
        requested: DeclaredType,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An operator was applied to operands of the wrong type.
    UnsupportedOperand {
        /// The operator symbol.
        op:      String,
        /// Details about the type violation.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An `if` or `while` condition did not evaluate to a boolean.
    ExpectedBoolean {
        /// The statement keyword whose condition failed.
        construct: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A literal's text could not be read as a number.
    InvalidLiteral {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing `show` output failed.
    Output {
        /// Details from the underlying I/O error.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::TypeRedeclaration { line, .. }
            | Self::UnsupportedOperand { line, .. }
            | Self::ExpectedBoolean { line, .. }
            | Self::InvalidLiteral { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is not declared.")
            },
            Self::TypeMismatch { name,
                                 expected,
                                 found,
                                 line, } => write!(f,
                                                   "Error on line {line}: Type mismatch: cannot assign {found} to '{name}' of type {expected}."),
            Self::TypeRedeclaration { name,
                                      declared,
                                      requested,
                                      line, } => write!(f,
                                                        "Error on line {line}: Redeclaration of '{name}' as {requested}, already declared as {declared}."),
            Self::UnsupportedOperand { op, details, line } => {
                write!(f, "Error on line {line}: '{op}' {details}.")
            },
            Self::ExpectedBoolean { construct, line } => write!(f,
                                                                "Error on line {line}: Condition of '{construct}' must be bool."),
            Self::InvalidLiteral { text, line } => {
                write!(f, "Error on line {line}: Invalid literal '{text}'.")
            },
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
