//! Tokenization into the tensor shapes BERT-style ONNX models expect.

use std::path::Path;

use ndarray::Array2;
use tokenizers::{PaddingParams, Tokenizer, TruncationParams};

use crate::errors::{EmbedError, EmbedResult};

/// One tokenized batch, padded to the longest sequence in the batch.
pub struct EncodedBatch {
    pub input_ids: Array2<i64>,
    pub attention_mask: Array2<i64>,
    pub token_type_ids: Array2<i64>,
}

pub struct TextTokenizer {
    inner: Tokenizer,
}

impl TextTokenizer {
    /// Load `tokenizer.json`, enabling batch padding and truncation at
    /// `max_tokens`.
    pub fn from_file(path: &Path, max_tokens: usize) -> EmbedResult<Self> {
        let mut inner = Tokenizer::from_file(path)?;
        inner.with_padding(Some(PaddingParams::default()));
        inner.with_truncation(Some(TruncationParams {
            max_length: max_tokens,
            ..Default::default()
        }))?;
        Ok(Self { inner })
    }

    /// Encode `texts` with special tokens, returning rectangular id, mask,
    /// and type arrays ready for the model.
    pub fn encode_batch(&self, texts: &[&str]) -> EmbedResult<EncodedBatch> {
        let encodings = self.inner.encode_batch(texts.to_vec(), true)?;

        let batch = encodings.len();
        let seq = encodings.first().map(|e| e.get_ids().len()).unwrap_or(0);

        let mut input_ids = Array2::<i64>::zeros((batch, seq));
        let mut attention_mask = Array2::<i64>::zeros((batch, seq));
        let mut token_type_ids = Array2::<i64>::zeros((batch, seq));

        for (i, enc) in encodings.iter().enumerate() {
            if enc.get_ids().len() != seq {
                return Err(EmbedError::Dimension(format!(
                    "row {i} has {} tokens, expected padded length {seq}",
                    enc.get_ids().len()
                )));
            }
            for (j, &id) in enc.get_ids().iter().enumerate() {
                input_ids[[i, j]] = i64::from(id);
            }
            for (j, &m) in enc.get_attention_mask().iter().enumerate() {
                attention_mask[[i, j]] = i64::from(m);
            }
            for (j, &t) in enc.get_type_ids().iter().enumerate() {
                token_type_ids[[i, j]] = i64::from(t);
            }
        }

        Ok(EncodedBatch {
            input_ids,
            attention_mask,
            token_type_ids,
        })
    }
}
