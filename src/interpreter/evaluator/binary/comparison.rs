use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept two numbers or two booleans. The relational
    /// operators accept numbers only. The result is always a boolean.
    ///
    /// # Example
    /// ```
    /// use camlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Less, a, b, 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Equal, a, Value::Boolean(true), 1);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: Value,
                           right: Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        Ok(Value::Boolean(match op {
                              Equal | NotEqual => {
                                  let equal = match (left, right) {
                                      (Value::Number(l), Value::Number(r)) => l == r,
                                      (Value::Boolean(l), Value::Boolean(r)) => l == r,
                                      _ => {
                                          return Err(RuntimeError::UnsupportedOperand {
                                              op: op.to_string(),
                                              details: format!("cannot compare {} with {}",
                                                               left.declared_type(),
                                                               right.declared_type()),
                                              line,
                                          });
                                      },
                                  };
                                  if op == Equal { equal } else { !equal }
                              },

                              Less | LessEqual | Greater | GreaterEqual => {
                                  let (l, r) = Self::numeric_operands(op, left, right, line)?;

                                  match op {
                                      Less => l < r,
                                      LessEqual => l <= r,
                                      Greater => l > r,
                                      GreaterEqual => l >= r,
                                      _ => unreachable!(),
                                  }
                              },

                              _ => unreachable!("eval_comparison used with non comparison operator"),
                          }))
    }
}
