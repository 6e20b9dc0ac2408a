#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that has never been assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Unknown variable '{name}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
