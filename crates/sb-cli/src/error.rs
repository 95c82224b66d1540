use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] sb_config::ConfigError),

    #[error("{0}")]
    Core(#[from] sb_core::CoreError),

    #[error("{0}")]
    Store(#[from] sb_store::StoreError),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
