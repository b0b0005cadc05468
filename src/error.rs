use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tilify operations
#[derive(Error, Diagnostic, Debug)]
pub enum TilifyError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tilify::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tilify::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(tilify::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(tilify::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A pixel stream ended before the stitcher consumed all of its rows.
    /// Stream lengths follow from `Dimensions`, so this is always a bug.
    #[error("Pixel stream {stream} exhausted at row {row}")]
    #[diagnostic(
        code(tilify::exhausted),
        help("this is an internal error; stream lengths are derived from the tile dimensions")
    )]
    Exhausted { stream: String, row: usize },
}

impl TilifyError {
    /// Shorthand for a configuration error with optional help text.
    pub fn config(message: impl Into<String>, help: Option<&str>) -> Self {
        Self::Config {
            message: message.into(),
            help: help.map(str::to_string),
        }
    }
}

pub type Result<T> = std::result::Result<T, TilifyError>;
