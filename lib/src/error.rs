use std::fmt;

/// Raised when untyped input (command line strings, JSON requests) does not
/// describe a hand, a card or a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VTrumpfStaerkeError {
    InvalidArgumentType(String),
}

impl VTrumpfStaerkeError {
    pub fn invalid_argument_type(str_msg: impl Into<String>) -> Self {
        VTrumpfStaerkeError::InvalidArgumentType(str_msg.into())
    }
}

impl fmt::Display for VTrumpfStaerkeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VTrumpfStaerkeError::InvalidArgumentType(str_msg) => write!(f, "Type error: {}", str_msg),
        }
    }
}

impl std::error::Error for VTrumpfStaerkeError {}
