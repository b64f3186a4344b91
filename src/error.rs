use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// Every letter has used up its compound suffixes up to `max_suffix`.
    #[error("no bed code left to allocate: all letters A-Z are used up to suffix {max_suffix}")]
    CapacityExceeded { max_suffix: u32 },

    #[error("invalid bed code '{0}'")]
    InvalidCode(String),

    #[error("invalid layout configuration: {0}")]
    Config(#[from] serde_json::Error),
}
