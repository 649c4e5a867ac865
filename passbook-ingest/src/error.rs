use thiserror::Error;

/// Failures obtaining statement text. The engine itself never fails: lines it
/// cannot use are dropped and show up in the parse report instead.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("extracting text from {path}: {message}")]
    Pdf { path: String, message: String },

    #[error("{path} has no text pages")]
    NoPages { path: String },
}
