use crate::{
    ast::{DeclaredType, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Executes an `if` statement.
    ///
    /// A scope is pushed before the condition is evaluated and popped when
    /// the statement finishes, whichever branch was taken and even if the
    /// condition or body failed.
    ///
    /// # Errors
    /// - `ExpectedBoolean` if the condition is not a boolean.
    /// - Any error raised by the condition or the body.
    pub fn exec_if(&mut self, condition: &Expr, body: &[Statement], line: usize) -> EvalResult<()> {
        self.environment.push_scope();
        let result = match self.eval_condition(condition, "if", line) {
            Ok(true) => self.execute_all(body),
            Ok(false) => Ok(()),
            Err(e) => Err(e),
        };
        self.environment.pop_scope();
        result
    }

    /// Executes a `while` statement.
    ///
    /// One scope is pushed for the whole loop, so a declaration in the body is
    /// still present on the next iteration, where executing it again is a
    /// no-op. The scope is popped once the loop ends.
    ///
    /// # Errors
    /// - `ExpectedBoolean` if the condition is not a boolean.
    /// - Any error raised by the condition or the body.
    pub fn exec_while(&mut self,
                      condition: &Expr,
                      body: &[Statement],
                      line: usize)
                      -> EvalResult<()> {
        self.environment.push_scope();
        let result = self.repeat_while(condition, body, line);
        self.environment.pop_scope();
        result
    }

    /// Runs the body of a `while` for as long as its condition holds.
    fn repeat_while(&mut self, condition: &Expr, body: &[Statement], line: usize) -> EvalResult<()> {
        while self.eval_condition(condition, "while", line)? {
            self.execute_all(body)?;
        }
        Ok(())
    }

    /// Executes a `show` statement, printing the value on its own line.
    ///
    /// # Errors
    /// Returns any error raised by the expression, or `Output` if writing
    /// fails.
    pub fn exec_show(&mut self, expr: &Expr, line: usize) -> EvalResult<()> {
        let value = self.eval(expr)?;
        self.emit(value, line)
    }

    /// Executes a variable declaration in the innermost scope.
    ///
    /// # Errors
    /// Returns `TypeRedeclaration` if the scope already declares the name
    /// with another type.
    pub fn exec_declaration(&mut self,
                            name: &str,
                            declared_type: DeclaredType,
                            line: usize)
                            -> EvalResult<()> {
        self.environment.declare(name, declared_type, line)
    }

    /// Executes an assignment.
    ///
    /// The right-hand side is evaluated first, then stored in the innermost
    /// visible variable with that name.
    ///
    /// # Errors
    /// - Any error raised by the right-hand side.
    /// - `UnknownVariable` if the name is not declared.
    /// - `TypeMismatch` if the value's type differs from the declared type.
    pub fn exec_assignment(&mut self, name: &str, value: &Expr, line: usize) -> EvalResult<()> {
        let value = self.eval(value)?;
        self.environment.assign(name, value, line)
    }

    /// Evaluates the condition of an `if` or `while`.
    fn eval_condition(&self,
                      condition: &Expr,
                      construct: &'static str,
                      line: usize)
                      -> EvalResult<bool> {
        match self.eval(condition)? {
            Value::Boolean(b) => Ok(b),
            Value::Number(_) => Err(RuntimeError::ExpectedBoolean { construct, line }),
        }
    }
}
