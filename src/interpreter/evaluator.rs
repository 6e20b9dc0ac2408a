use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context: the session's variable table.
///
/// This is the only state that outlives a single line. Entries keep the
/// order in which their names were first assigned, so a snapshot lists
/// variables in assignment order no matter how often they were
/// overwritten. The table has exactly one writer, [`Context::eval`], which
/// is always called synchronously from the thread driving the pipeline.
///
/// ## Usage
///
/// `Context` is created once per session and reused for every line
/// evaluated in it.
pub struct Context {
    variables: Vec<(String, f64)>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no variables assigned.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: Vec::new() }
    }

    /// Looks up the current value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    /// Binds `name` to `value`, overwriting an earlier binding in place.
    pub fn set(&mut self, name: &str, value: f64) {
        if let Some(entry) = self.variables.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value;
        } else {
            self.variables.push((name.to_string(), value));
        }
    }

    /// Renders the table for display, entries in first-assignment order.
    ///
    /// # Examples
    /// ```
    /// use deskcalc::{interpreter::evaluator::Context, run_line};
    ///
    /// let mut context = Context::new();
    /// run_line("x = 2", &mut context).unwrap();
    /// run_line("y = 7.5", &mut context).unwrap();
    /// assert_eq!(context.snapshot(), "{x=2, y=7.5}");
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> String {
        let entries: Vec<String> = self.variables
                                       .iter()
                                       .map(|(key, value)| format!("{key}={value}"))
                                       .collect();
        format!("{{{}}}", entries.join(", "))
    }

    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// The walk is bottom-up: children are evaluated (and decorated) before
    /// their parent, and every successfully visited node's decoration slot
    /// is filled with its result before the call returns. On an error the
    /// failing node and its ancestors stay undecorated.
    ///
    /// Per variant:
    /// - a literal evaluates to itself,
    /// - a variable reads the table,
    /// - an assignment evaluates its right-hand side, then stores it —
    ///   this is the table's sole mutation point,
    /// - a binary operation evaluates left strictly before right, so a
    ///   right operand already sees an assignment made inside the left one.
    ///
    /// # Parameters
    /// - `expr`: Tree to evaluate; decorated in place.
    ///
    /// # Returns
    /// The value of the whole tree.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownVariable`] when a variable is read that was
    /// never assigned in this session.
    pub fn eval(&mut self, expr: &mut Expr) -> EvalResult<f64> {
        let result = match expr {
            Expr::Number { literal, .. } => *literal,
            Expr::Variable { name, .. } => {
                self.get(name)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })?
            },
            Expr::Assignment { name, expr: rhs, .. } => {
                let value = self.eval(rhs)?;
                self.set(name, value);
                value
            },
            Expr::BinaryOp { op, left, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                match op {
                    BinaryOperator::Add => left + right,
                    BinaryOperator::Sub => left - right,
                    BinaryOperator::Mul => left * right,
                    // Division by zero is not checked: the quotient follows
                    // IEEE-754 and becomes an infinity or NaN.
                    BinaryOperator::Div => left / right,
                }
            },
        };

        expr.decorate(result);
        Ok(result)
    }
}
