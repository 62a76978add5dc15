use thiserror::Error;

#[derive(Error, Debug)]
pub enum DartsError {
    #[error("invalid number of darts: {input:?} is not a whole number")]
    InvalidDartCount { input: String },

    #[error("at least one dart must be thrown")]
    NoDarts,

    #[error("canvas of {width}x{height} cells is too small to hold a dartboard")]
    CanvasTooSmall { width: usize, height: usize },

    #[error("canvas of {width}x{height} cells is too large to draw")]
    CanvasTooLarge { width: usize, height: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DartsError>;
