#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token sequence.
pub enum ParseError {
    /// The parser required a specific token but found another one.
    UnexpectedToken {
        /// Description of what the grammar required here.
        expected: &'static str,
        /// The token actually encountered.
        found:    String,
        /// Byte offset of the found token.
        position: usize,
    },
    /// No alternative of the factor production matched the lookahead token.
    ExpectedFactor {
        /// The token actually encountered.
        found:    String,
        /// Byte offset of the found token.
        position: usize,
    },
    /// The token sequence ran out before the end-of-input marker.
    UnexpectedEndOfInput {
        /// Byte offset where input ended.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f,
                       "Syntax error at position {position}: expected {expected}, found {found}.")
            },

            Self::ExpectedFactor { found, position } => {
                write!(f,
                       "Syntax error at position {position}: expected a factor, found {found}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Syntax error at position {position}: unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
