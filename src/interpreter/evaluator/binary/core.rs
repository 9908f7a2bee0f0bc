use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// Routes the operation to a specialized handler depending on the
    /// operator:
    /// - `&` and `|` use `eval_logic`.
    /// - `==`, `!=`, `<`, `<=`, `>`, `>=` use `eval_comparison`.
    /// - `+`, `-`, `*`, `/` use `eval_arithmetic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use camlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                       Value::Number(3.0),
    ///                                       Value::Number(4.0),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    ///
    /// let mixed = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                      Value::Number(3.0),
    ///                                      Value::Boolean(true),
    ///                                      1);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match op {
            And | Or => Self::eval_logic(op, left, right, line),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right, line),
        }
    }
}
