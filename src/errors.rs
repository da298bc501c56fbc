use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Model download failed: {0}")]
    Hub(#[from] hf_hub::api::sync::ApiError),

    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] tokenizers::Error),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Dimension mismatch: {0}")]
    Dimension(String),

    #[error("Empty input batch")]
    EmptyBatch,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EmbedResult<T> = Result<T, EmbedError>;
