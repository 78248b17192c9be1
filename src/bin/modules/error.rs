use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the core reconstruction library.
    #[error("Reconstruction error: {0}")]
    Reconstruction(#[from] abp_pairdist::PairDistError),

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// Invalid combinations of command-line values.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
