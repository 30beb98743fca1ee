use{
    std::{
        io,
        path::{Path, PathBuf},
    },
    thiserror::Error,
};

/// Everything that can go wrong outside of the simulation itself.
/// The simulation core is never handed data that failed to load.
#[derive(Debug, Error)]
pub enum SirError{
    #[error("could not open {}: {source}", path.display())]
    Io{
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("could not write {}: {source}", path.display())]
    Write{
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("Error in line {line}: {expected}")]
    MalformedLine{
        line: usize,
        expected: String
    },

    #[error("{} contains no people", path.display())]
    EmptyCity{
        path: PathBuf
    },

    #[error("invalid parameter json in {}: {source}", path.display())]
    Json{
        path: PathBuf,
        #[source]
        source: serde_json::Error
    },

    #[error("unable to serialize parameters: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unable to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("unable to set up logging: {0}")]
    Logging(String),
}

impl SirError{
    pub fn io(path: &Path, source: io::Error) -> Self
    {
        Self::Io{path: path.to_owned(), source}
    }

    pub fn write(path: &Path, source: io::Error) -> Self
    {
        Self::Write{path: path.to_owned(), source}
    }
}

pub type SirResult<T> = Result<T, SirError>;
