use thiserror::Error;


/// The different kinds of errors that can occur while parsing.
///
/// Every parse error is terminal for the whole parse: there is no recovery
/// and no multi-error accumulation. None of them are fatal to the process.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The input file could not be opened.
    NoSuchFile,

    /// A section header line had no closing `]`.
    NoClosingBracket,

    /// A section was closed (by the next section header or end of input)
    /// without acquiring any key-value pairs.
    EmptySection,

    /// A key-value pair appeared before any section was opened.
    KeyOutsideSection,

    /// A key had no value: either no `=` on the line,
    /// or the value was empty after trimming.
    NoValueForKey,

    /// A quoted value had no closing double quote.
    NoClosingQuotation,
}

impl ErrorKind {
    /// A human-readable description of this kind of error.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoSuchFile => "File does not exist.",
            Self::NoClosingBracket => "No closing bracket found for section.",
            Self::EmptySection => "Section has no key-value pairs.",
            Self::KeyOutsideSection => "Key-value pair was found outside a section.",
            Self::NoValueForKey => "No value found for key.",
            Self::NoClosingQuotation => "No closing double quotes for value.",
        }
    }
}


/// A terminal parse failure, carrying the error kind and,
/// for line-level failures, the 1-indexed line it occurred on.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
    #[error("file does not exist: {path}")]
    NoSuchFile { path: String },

    #[error("no closing bracket found for section (line {line})")]
    NoClosingBracket { line: usize },

    #[error("section has no key-value pairs (line {line})")]
    EmptySection { line: usize },

    #[error("key-value pair was found outside a section (line {line})")]
    KeyOutsideSection { line: usize },

    #[error("no value found for key (line {line})")]
    NoValueForKey { line: usize },

    #[error("no closing double quotes for value (line {line})")]
    NoClosingQuotation { line: usize },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoSuchFile { .. } => ErrorKind::NoSuchFile,
            Self::NoClosingBracket { .. } => ErrorKind::NoClosingBracket,
            Self::EmptySection { .. } => ErrorKind::EmptySection,
            Self::KeyOutsideSection { .. } => ErrorKind::KeyOutsideSection,
            Self::NoValueForKey { .. } => ErrorKind::NoValueForKey,
            Self::NoClosingQuotation { .. } => ErrorKind::NoClosingQuotation,
        }
    }
}
