use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of one program run.
///
/// The interpreter owns the variable [`Environment`] and writes `show` output
/// to the sink it was created with.
///
/// ## Halting
///
/// The first runtime error halts the interpreter. A halted interpreter skips
/// every further statement without side effects, including statements handed
/// to later calls of [`Interpreter::run`].
///
/// ## Usage
///
/// ```
/// use camlang::interpreter::{
///     evaluator::core::Interpreter, lexer::tokenize, parser::core::parse_program,
/// };
///
/// let program = parse_program(&tokenize("show 2 * 3 == 6;").unwrap()).unwrap();
/// let mut out = Vec::new();
///
/// Interpreter::new(&mut out).run(&program).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "true\n");
/// ```
pub struct Interpreter<'a> {
    /// Variables visible to the program.
    pub environment: Environment,
    out:             &'a mut dyn Write,
    halted:          bool,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter with an empty global scope that prints to
    /// `out`.
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { environment: Environment::new(),
               out,
               halted: false }
    }

    /// Returns `true` once a runtime error has stopped execution.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Executes statements in order.
    ///
    /// Stops at the first runtime error and returns it; the interpreter stays
    /// halted afterwards.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    pub fn run(&mut self, program: &[Statement]) -> EvalResult<()> {
        log::debug!("running {} top-level statements", program.len());
        self.execute_all(program)
    }

    /// Executes a list of statements in order, stopping at the first error.
    pub(crate) fn execute_all(&mut self, statements: &[Statement]) -> EvalResult<()> {
        statements.iter().try_for_each(|statement| self.execute(statement))
    }

    /// Executes a single statement.
    ///
    /// Does nothing if the interpreter is halted. An error raised here halts
    /// the interpreter before it is returned.
    ///
    /// # Errors
    /// Returns the `RuntimeError` raised while executing the statement.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        if self.halted {
            return Ok(());
        }
        log::trace!("executing statement on line {} at depth {}",
                    statement.line_number(),
                    self.environment.depth());

        let result = match statement {
            Statement::If { condition, body, line } => self.exec_if(condition, body, *line),
            Statement::While { condition, body, line } => self.exec_while(condition, body, *line),
            Statement::Show { expr, line } => self.exec_show(expr, *line),
            Statement::VariableDeclaration { name,
                                             declared_type,
                                             line, } => {
                self.exec_declaration(name, *declared_type, *line)
            },
            Statement::Assignment { name, value, line } => {
                self.exec_assignment(name, value, *line)
            },
        };

        if let Err(e) = &result
           && !self.halted
        {
            log::debug!("halting: {e}");
            self.halted = true;
        }
        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated before their operator, left operand first.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for undeclared variables, invalid literals and
    /// operator type violations.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { text, line } => Self::eval_literal(text, *line),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
        }
    }

    /// Writes one line of `show` output.
    pub(crate) fn emit(&mut self, value: Value, line: usize) -> EvalResult<()> {
        writeln!(self.out, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                        line })
    }
}
