use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both operands have already been evaluated; there is no short-circuit.
    ///
    /// # Example
    /// ```
    /// use camlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let a = Value::Boolean(true);
    /// let b = Value::Boolean(false);
    ///
    /// let result = Interpreter::eval_logic(BinaryOperator::Or, a, b, 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: Value,
                      right: Value,
                      line: usize)
                      -> EvalResult<Value> {
        let (Value::Boolean(l), Value::Boolean(r)) = (left, right) else {
            return Err(RuntimeError::UnsupportedOperand { op: op.to_string(),
                                                          details: format!("does not support non bool values (found {} and {})",
                                                                           left.declared_type(),
                                                                           right.declared_type()),
                                                          line });
        };

        match op {
            BinaryOperator::And => Ok(Value::Boolean(l && r)),
            BinaryOperator::Or => Ok(Value::Boolean(l || r)),
            _ => unreachable!("eval_logic used with non logical operator"),
        }
    }
}
