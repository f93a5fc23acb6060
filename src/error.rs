use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("No .cpost file selected")]
    FileNotSelected,

    #[error("Save directory not specified")]
    SaveDirEmpty,

    #[error("Error reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error parsing post document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Error parsing post document: top level must be a key/value mapping")]
    NotAMapping,

    #[error("Missing field '{0}' in post document")]
    MissingField(&'static str),

    #[error("Field '{0}' must be a plain text value")]
    InvalidField(&'static str),

    #[error("Error parsing card template: {0}")]
    Template(String),

    #[error("Error writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Error converting the HTML file into an image: {0}")]
    Rasterizer(String),
}

pub type CardResult<T> = Result<T, CardError>;
