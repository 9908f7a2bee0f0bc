use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Not`: boolean negation. Numbers are rejected.
    ///
    /// # Example
    /// ```
    /// use camlang::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, Value::Boolean(false), 1).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// assert!(Interpreter::eval_unary(UnaryOperator::Not, Value::Number(1.0), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
            (UnaryOperator::Not, Value::Number(_)) => {
                Err(RuntimeError::UnsupportedOperand { op:      op.to_string(),
                                                       details: "does not support non bool values"
                                                                .to_string(),
                                                       line })
            },
        }
    }
}
