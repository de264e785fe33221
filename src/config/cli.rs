use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Files when paths are given, standard streams otherwise.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl LocalStorage {
    pub fn new(input_path: Option<String>, output_path: Option<String>) -> Self {
        Self {
            input_path: input_path.map(PathBuf::from),
            output_path: output_path.map(PathBuf::from),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.input_path().map(str::to_string),
            config.output_path().map(str::to_string),
        )
    }
}

impl Storage for LocalStorage {
    async fn read_input(&self) -> Result<String> {
        match &self.input_path {
            Some(path) => Ok(tokio::fs::read_to_string(path).await?),
            None => {
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                Ok(buf)
            }
        }
    }

    async fn write_output(&self, data: &str) -> Result<String> {
        match &self.output_path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(path, data).await?;
                Ok(path.display().to_string())
            }
            None => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(data.as_bytes()).await?;
                stdout.flush().await?;
                Ok("<stdout>".to_string())
            }
        }
    }
}
