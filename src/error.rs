use std::path::PathBuf;

use thiserror::Error;

/// Failures at the I/O edge. The extraction core itself never fails.
#[derive(Error, Debug)]
pub enum PopupError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} line {line}: {source}", path.display())]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type PopupResult<T> = Result<T, PopupError>;
