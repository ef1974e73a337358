use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;
use std::sync::Arc;

/// Plain BERT encoder with attention-masked mean pooling.
///
/// This is the default sentence-transformers head for a checkpoint that ships
/// without its own pooling config.
#[derive(Clone)]
pub struct BertMeanPooler {
    model: Arc<BertModel>,
    hidden_size: usize,
}

impl BertMeanPooler {
    pub fn load(config_path: &Path, weights_path: &Path, device: &Device) -> Result<Self> {
        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path.to_path_buf()], DType::F32, device)?
        };

        // Pretraining checkpoints nest the encoder under a model-type prefix.
        let model = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else if vb.contains_tensor("roberta.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("roberta"), &config)?
        } else {
            BertModel::load(vb, &config)?
        };

        Ok(Self {
            model: Arc::new(model),
            hidden_size: config.hidden_size,
        })
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Returns pooled embeddings of shape `[batch, hidden]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Tensor> {
        let hidden = self
            .model
            .forward(input_ids, token_type_ids, Some(attention_mask))?;

        // [batch, seq] -> [batch, seq, 1] so padding rows contribute nothing
        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        // [CLS] and [SEP] are always attended, so counts never reach zero
        let counts = mask.sum(1)?;

        summed.broadcast_div(&counts)
    }
}
