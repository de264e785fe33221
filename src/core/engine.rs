use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct ReverseEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReverseEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order; nothing is written if an
    /// earlier phase fails.
    pub async fn run(&self) -> Result<String> {
        let start = Instant::now();
        tracing::debug!("Starting reverse pipeline");

        // Extract
        let sequence = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} elements", sequence.len());

        // Transform
        let reversed = self.pipeline.transform(sequence).await?;
        tracing::debug!("Reversed {} elements", reversed.len());

        // Load
        let output_path = self.pipeline.load(reversed).await?;
        tracing::debug!(
            "Output written to {} in {:?}",
            output_path,
            start.elapsed()
        );

        Ok(output_path)
    }
}
