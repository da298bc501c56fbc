//! Model acquisition from the Hugging Face Hub.

use std::path::PathBuf;

use hf_hub::{api::sync::Api, Repo, RepoType};

use crate::errors::EmbedResult;

/// Local paths of the files an embedder needs, downloaded or reused from the
/// hub cache.
pub struct ModelFiles {
    pub tokenizer: PathBuf,
    pub onnx_model: PathBuf,
}

/// Fetch the tokenizer and ONNX weights for `model_id`, hitting the network
/// only when the cache does not already hold them.
pub fn fetch(model_id: &str, revision: Option<&str>) -> EmbedResult<ModelFiles> {
    let api = Api::new()?;
    let repo = match revision {
        Some(rev) => Repo::with_revision(model_id.to_string(), RepoType::Model, rev.to_string()),
        None => Repo::new(model_id.to_string(), RepoType::Model),
    };
    let repo = api.repo(repo);

    let tokenizer = repo.get("tokenizer.json")?;
    tracing::debug!(path = %tokenizer.display(), "tokenizer ready");
    let onnx_model = repo.get("onnx/model.onnx")?;
    tracing::debug!(path = %onnx_model.display(), "model weights ready");

    Ok(ModelFiles {
        tokenizer,
        onnx_model,
    })
}
