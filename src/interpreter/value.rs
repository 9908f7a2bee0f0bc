use crate::ast::DeclaredType;

/// Represents a runtime value in the interpreter.
///
/// Values are plain scalars and are stored as-is in the environment; they are
/// never converted to and from text between operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by literals, comparisons and logical operators, and required
    /// by `if` and `while` conditions.
    Boolean(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// The declared type a variable must have to hold this value.
    ///
    /// # Example
    /// ```
    /// use camlang::{ast::DeclaredType, interpreter::value::Value};
    ///
    /// assert_eq!(Value::Number(1.5).declared_type(), DeclaredType::Number);
    /// assert_eq!(Value::Boolean(true).declared_type(), DeclaredType::Boolean);
    /// ```
    #[must_use]
    pub const fn declared_type(&self) -> DeclaredType {
        match self {
            Self::Number(_) => DeclaredType::Number,
            Self::Boolean(_) => DeclaredType::Boolean,
        }
    }

    /// The value a freshly declared variable of type `declared_type` holds
    /// before its first assignment.
    #[must_use]
    pub const fn default_for(declared_type: DeclaredType) -> Self {
        match declared_type {
            DeclaredType::Number => Self::Number(0.0),
            DeclaredType::Boolean => Self::Boolean(false),
        }
    }
}

/// Formats a number the way `show` prints it: six fixed decimals, with
/// `inf`, `-inf` and `nan` for the non-finite values.
///
/// # Example
/// ```
/// use camlang::interpreter::value::format_number;
///
/// assert_eq!(format_number(5.0), "5.000000");
/// assert_eq!(format_number(-0.125), "-0.125000");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// assert_eq!(format_number(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else if n.is_infinite() {
        String::from(if n > 0.0 { "inf" } else { "-inf" })
    } else {
        format!("{n:.6}")
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
