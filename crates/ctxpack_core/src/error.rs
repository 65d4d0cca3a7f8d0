use std::{io, path::PathBuf};

/// Errors that abort an aggregation run.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("unsupported root file {0} (expected .ts, .tsx, .js or .jsx)")]
    UnsupportedRoot(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
