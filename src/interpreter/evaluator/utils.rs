use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a literal from its source text.
    ///
    /// `true` and `false` become booleans; any other text is read as a
    /// floating-point number.
    ///
    /// # Errors
    /// Returns `InvalidLiteral` if the text is neither.
    ///
    /// # Example
    /// ```
    /// use camlang::interpreter::{evaluator::core::Interpreter, value::Value};
    ///
    /// assert_eq!(Interpreter::eval_literal("true", 1).unwrap(), Value::Boolean(true));
    /// assert_eq!(Interpreter::eval_literal("2.5", 1).unwrap(), Value::Number(2.5));
    /// assert_eq!(Interpreter::eval_literal("7.", 1).unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_literal(text: &str, line: usize) -> EvalResult<Value> {
        match text {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => text.parse::<f64>()
                     .map(Value::Number)
                     .map_err(|_| RuntimeError::InvalidLiteral { text: text.to_string(),
                                                                 line }),
        }
    }

    /// Looks up a variable by name, innermost scope first.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if the variable is not declared in any
    /// visible scope.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment.get(name, line)
    }
}
