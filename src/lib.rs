//! Text embedding with a pretrained sentence-transformer model.
//!
//! Model acquisition (Hugging Face Hub), tokenization, ONNX inference, and
//! sentence pooling live behind [`embedder::Embedder`]; the `textembed`
//! binary exposes the pipeline as a one-argument CLI that prints the vector
//! as a single comma-separated line.

pub mod embedder;
pub mod errors;
pub mod hub;
pub mod output;
pub mod similarity;

/// Model used when no other id is supplied.
pub const DEFAULT_MODEL_ID: &str = "sentence-transformers/all-MiniLM-L6-v2";
