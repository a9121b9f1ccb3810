use std::path::PathBuf;

/// Xfsum error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A results.xml file that could not be parsed
    #[error("bad record: {}: {message}", .path.display())]
    Record { path: PathBuf, message: String },

    /// Marker file line without a `key: "value"` separator
    #[error("malformed marker line in {}: {line:?}", .path.display())]
    MarkerLine { path: PathBuf, line: String },

    /// Suite timestamp that does not match YYYY-MM-DDTHH:MM:SS
    #[error("suite {suite:?}: bad timestamp {value:?}")]
    Timestamp { suite: String, value: String },

    /// Archive merge failure (the canonical archive is untouched)
    #[error("archive merge failed: {}: {message}", .path.display())]
    Merge { path: PathBuf, message: String },

    /// Report output failure
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type using xfsum Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Report generated (or nothing to do)
    Success = 0,
    /// Bad input data: record, marker, or timestamp
    DataError = 1,
    /// I/O or merge failure
    InternalError = 2,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Record { .. } | Error::MarkerLine { .. } | Error::Timestamp { .. } => {
                ExitCode::DataError
            }
            Error::Io { .. } | Error::Merge { .. } | Error::Write(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
