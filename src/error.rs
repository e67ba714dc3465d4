use thiserror::Error;

pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Missing required columns in catalog: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FeedError {
    /// True when the input file was readable but is not a usable catalog.
    pub fn is_input_error(&self) -> bool {
        matches!(self, FeedError::MissingColumns(_) | FeedError::Import(_))
    }
}
