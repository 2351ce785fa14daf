//! Console errors.

/// Errors that can occur while handling console input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A move-shaped token had a malformed square or promotion letter.
    #[error("invalid move: {value}")]
    InvalidMove {
        /// The token that failed to parse.
        value: String,
    },

    /// `perft` or `divide` was called without a depth argument.
    #[error("missing depth: usage is 'perft <depth>' or 'divide <depth>'")]
    MissingDepth,

    /// The depth argument could not be parsed as a number.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
