use crate::domain::model::Sequence;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_input(&self) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Writes the formatted output and returns where it went.
    fn write_output(
        &self,
        data: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// `None` means standard input.
    fn input_path(&self) -> Option<&str>;
    /// `None` means standard output.
    fn output_path(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Sequence>;
    async fn transform(&self, data: Sequence) -> Result<Sequence>;
    async fn load(&self, result: Sequence) -> Result<String>;
}
