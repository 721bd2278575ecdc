use std::fmt;

/// Errors produced when parsing a chemical formula string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// The input string was empty.
    EmptyInput,
    /// An unexpected character was encountered at the given position.
    UnexpectedChar { pos: usize, ch: char },
    /// A well-formed symbol token that names no known element.
    UnknownElement { pos: usize, symbol: String },
    /// A parenthesis was opened without a matching close, or vice versa.
    UnmatchedParen { pos: usize },
    /// A parenthesized group contained no terms.
    EmptyGroup { pos: usize },
    /// A count was zero or overflowed.
    InvalidCount { pos: usize },
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty formula"),
            Self::UnexpectedChar { pos, ch } => {
                write!(f, "unexpected character '{}' at position {}", ch, pos)
            }
            Self::UnknownElement { pos, symbol } => {
                write!(f, "unknown element '{}' at position {}", symbol, pos)
            }
            Self::UnmatchedParen { pos } => {
                write!(f, "unmatched parenthesis at position {}", pos)
            }
            Self::EmptyGroup { pos } => {
                write!(f, "empty group at position {}", pos)
            }
            Self::InvalidCount { pos } => {
                write!(f, "invalid count at position {}", pos)
            }
        }
    }
}

impl std::error::Error for FormulaError {}
