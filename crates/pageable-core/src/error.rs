use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No container defined")]
    NoContainer,

    #[error("The container could not be found: {0}")]
    ContainerNotFound(String),

    #[error("No child nodes with an anchor could be found in container: {0}")]
    NoPages(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid orientation: {0} (expected \"vertical\" or \"horizontal\")")]
    InvalidOrientation(String),

    #[error("Unknown easing: {0}")]
    UnknownEasing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
