use anyhow::anyhow;
use courses_core::FileIO;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[derive(Default, Clone)]
pub struct NativeFileIO {}

#[async_trait::async_trait(?Send)]
impl FileIO for NativeFileIO {
    async fn write<'a>(&'a self, path: &'a str, content: &'a [u8]) -> anyhow::Result<()> {
        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|e| anyhow!("Unable to create {}: {}", path, e))?;
        file.write_all(content)
            .await
            .map_err(|e| anyhow!("{}", e))?;
        // tokio completes the write on the blocking pool
        file.flush().await?;
        log::debug!("File write: {}", path);
        Ok(())
    }

    async fn read<'a>(&'a self, path: &'a str) -> anyhow::Result<String> {
        let mut file = tokio::fs::File::open(path)
            .await
            .map_err(|e| anyhow!("Unable to open {}: {}", path, e))?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .await
            .map_err(|e| anyhow!("{}", e))?;
        log::debug!("File read: {}", path);
        Ok(String::from_utf8(buffer)?)
    }
}
