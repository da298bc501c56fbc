//! Sentence embedding via ONNX Runtime.
//!
//! Pipeline: tokenize → run the transformer → mask-weighted mean pooling →
//! L2 normalization. The pooled vector has the model's hidden size (384 for
//! all-MiniLM-L6-v2).

pub mod pooling;
pub mod tokenize;

use ndarray::{Array3, Ix3};
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Tensor;

use self::tokenize::TextTokenizer;
use crate::errors::{EmbedError, EmbedResult};
use crate::hub;

/// Token budget per input; all-MiniLM-L6-v2 was trained on 256-token windows.
const MAX_TOKENS: usize = 256;

/// Holds the ONNX Runtime session and tokenizer for one pretrained model.
///
/// Construction downloads (or reuses cached) model files, so one instance per
/// process is the intended shape.
pub struct Embedder {
    session: Session,
    tokenizer: TextTokenizer,
}

impl Embedder {
    /// Acquire `model_id` from the hub and build an inference session.
    pub fn new(model_id: &str) -> EmbedResult<Self> {
        Self::with_revision(model_id, None)
    }

    /// Like [`Embedder::new`] but pinned to a specific hub revision.
    pub fn with_revision(model_id: &str, revision: Option<&str>) -> EmbedResult<Self> {
        let files = hub::fetch(model_id, revision)?;
        let tokenizer = TextTokenizer::from_file(&files.tokenizer, MAX_TOKENS)?;

        let session = Session::builder()
            .map_err(|e| EmbedError::Inference(format!("ort session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| EmbedError::Inference(format!("ort opt-level: {e}")))?
            .commit_from_file(&files.onnx_model)
            .map_err(|e| EmbedError::Inference(format!("ort load model: {e}")))?;
        tracing::info!(model = %model_id, "embedder ready");

        Ok(Self { session, tokenizer })
    }

    /// Embed one text. Equivalent to a one-element [`Embedder::embed_batch`].
    pub fn embed(&mut self, text: &str) -> EmbedResult<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text])?;
        vectors
            .pop()
            .ok_or_else(|| EmbedError::Inference("model returned no vector".into()))
    }

    /// Embed a batch of texts: one vector per input, input order preserved.
    pub fn embed_batch(&mut self, texts: &[&str]) -> EmbedResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Err(EmbedError::EmptyBatch);
        }

        let encoded = self.tokenizer.encode_batch(texts)?;
        let attention_mask = encoded.attention_mask.clone();

        let input_ids = Tensor::from_array(encoded.input_ids)
            .map_err(|e| EmbedError::Inference(format!("ort tensor: {e}")))?;
        let mask = Tensor::from_array(encoded.attention_mask)
            .map_err(|e| EmbedError::Inference(format!("ort tensor: {e}")))?;
        let token_type_ids = Tensor::from_array(encoded.token_type_ids)
            .map_err(|e| EmbedError::Inference(format!("ort tensor: {e}")))?;

        let hidden: Array3<f32> = {
            let outputs = self
                .session
                .run(ort::inputs![
                    "input_ids" => input_ids,
                    "attention_mask" => mask,
                    "token_type_ids" => token_type_ids,
                ])
                .map_err(|e| EmbedError::Inference(format!("ort run: {e}")))?;

            // Output 0 is last_hidden_state: [batch, seq, hidden].
            outputs[0]
                .try_extract_array::<f32>()
                .map_err(|e| EmbedError::Inference(format!("extract tensor: {e}")))?
                .to_owned()
                .into_dimensionality::<Ix3>()
                .map_err(|e| EmbedError::Dimension(format!("last_hidden_state: {e}")))?
            // `outputs` (and the mutable borrow on session) is dropped here
        };

        pooling::mean_pool(&hidden.view(), &attention_mask)
    }
}
