use thiserror::Error;

/// The result type for the `dfamin` crate.
pub type Result<T> = std::result::Result<T, DfaminError>;

/// The error type for the `dfamin` crate.
#[derive(Error, Debug)]
pub struct DfaminError {
    /// The source of the error.
    pub source: Box<DfaminErrorKind>,
}

impl DfaminError {
    /// Create a new `DfaminError`.
    pub fn new(kind: DfaminErrorKind) -> Self {
        DfaminError {
            source: Box::new(kind),
        }
    }
}

impl std::fmt::Display for DfaminError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum DfaminErrorKind {
    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// The textual DFA description is malformed.
    #[error(transparent)]
    ParseError(ParseError),

    /// An error occurred during programmatic construction of a DFA.
    #[error("DFA construction error: {0}")]
    ConstructionError(String),

    /// A JSON serialization error occurred.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl From<std::io::Error> for DfaminError {
    fn from(error: std::io::Error) -> Self {
        DfaminError::new(DfaminErrorKind::IoError(error))
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for DfaminError {
    fn from(error: serde_json::Error) -> Self {
        DfaminError::new(DfaminErrorKind::JsonError(error))
    }
}

impl From<ParseError> for DfaminError {
    fn from(error: ParseError) -> Self {
        DfaminError::new(DfaminErrorKind::ParseError(error))
    }
}

/// An error type for the textual DFA format.
/// Every variant names the specific violation and, where applicable, the
/// offending value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended although more tokens were required.
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    /// A token could not be parsed as an integer.
    #[error("invalid integer '{0}'")]
    InvalidInteger(String),

    /// The state count in the header is not positive.
    #[error("state count must be at least 1, got {0}")]
    InvalidStateCount(i64),

    /// The alphabet size in the header is not positive.
    #[error("alphabet size must be at least 1, got {0}")]
    InvalidAlphabetSize(i64),

    /// An alphabet entry is not a single printable character.
    #[error("alphabet symbol '{0}' must be a single printable character")]
    InvalidSymbol(String),

    /// A transition entry references a state outside of the automaton.
    #[error("transition target {value} out of range for {nstates} states")]
    TransitionOutOfRange {
        /// The offending transition entry.
        value: i64,
        /// The number of states of the automaton being read.
        nstates: usize,
    },

    /// An accepting state entry references a state outside of the automaton.
    #[error("accepting state {value} out of range for {nstates} states")]
    AcceptOutOfRange {
        /// The offending accepting state entry.
        value: i64,
        /// The number of states of the automaton being read.
        nstates: usize,
    },
}
