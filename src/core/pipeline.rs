use crate::core::codec::{format_output, parse_input};
use crate::core::reverse::reverse_in_place;
use crate::core::{ConfigProvider, Pipeline, Sequence, Storage};
use crate::utils::error::Result;

pub struct ReversePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReversePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReversePipeline<S, C> {
    async fn extract(&self) -> Result<Sequence> {
        tracing::debug!(
            "Reading input from: {}",
            self.config.input_path().unwrap_or("<stdin>")
        );
        let raw = self.storage.read_input().await?;
        tracing::debug!("Read {} bytes", raw.len());

        parse_input(&raw)
    }

    async fn transform(&self, mut data: Sequence) -> Result<Sequence> {
        reverse_in_place(data.as_mut_slice());
        Ok(data)
    }

    async fn load(&self, result: Sequence) -> Result<String> {
        let output = format_output(result.as_slice());
        self.storage.write_output(&output).await
    }
}
