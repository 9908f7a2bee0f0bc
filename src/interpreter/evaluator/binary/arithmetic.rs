use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates `+`, `-`, `*` or `/` on two numbers.
    ///
    /// Division follows IEEE 754: dividing by zero yields an infinity or NaN
    /// rather than an error.
    ///
    /// # Example
    /// ```
    /// use camlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let result = Interpreter::eval_arithmetic(BinaryOperator::Div,
    ///                                           Value::Number(1.0),
    ///                                           Value::Number(0.0),
    ///                                           1);
    /// assert_eq!(result.unwrap(), Value::Number(f64::INFINITY));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: Value,
                           right: Value,
                           line: usize)
                           -> EvalResult<Value> {
        let (l, r) = Self::numeric_operands(op, left, right, line)?;

        Ok(Value::Number(match op {
                             BinaryOperator::Add => l + r,
                             BinaryOperator::Sub => l - r,
                             BinaryOperator::Mul => l * r,
                             BinaryOperator::Div => l / r,
                             _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
                         }))
    }

    /// Unwraps two number operands of `op`.
    ///
    /// # Errors
    /// Returns `UnsupportedOperand` naming `op` if either operand is a
    /// boolean.
    pub(crate) fn numeric_operands(op: BinaryOperator,
                                   left: Value,
                                   right: Value,
                                   line: usize)
                                   -> EvalResult<(f64, f64)> {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok((l, r)),
            _ => Err(RuntimeError::UnsupportedOperand { op: op.to_string(),
                                                        details: format!("does not support non num values (found {} and {})",
                                                                         left.declared_type(),
                                                                         right.declared_type()),
                                                        line }),
        }
    }
}
