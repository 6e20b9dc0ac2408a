#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Raised when the scanner meets a character that starts no token.
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the source line.
    pub position:  usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Lexical error at position {}: unrecognized character '{}'.",
               self.position, self.character)
    }
}

impl std::error::Error for LexError {}
