use crate::config::ClientConfig;
use crate::runtime::TargetRuntime;
use anyhow::Context;
use reqwest::Url;

/// Reads the client configuration from a file or from an HTTP URL.
pub struct ConfigReader {
    runtime: TargetRuntime,
}

/// Response of a file read operation
#[derive(Debug)]
struct FileRead {
    content: String,
    path: String,
}

impl ConfigReader {
    pub fn init(runtime: TargetRuntime) -> Self {
        Self { runtime }
    }

    /// Reads the config file and returns the validated config
    pub async fn read<T: AsRef<str>>(&self, file: T) -> anyhow::Result<ClientConfig> {
        let file = self.read_file(file).await?;
        let config = ClientConfig::from_json(&file.content)
            .with_context(|| format!("Unable to parse config: {}", file.path))?;
        config.validate()?;

        Ok(config)
    }

    /// Reads a file from the filesystem or from an HTTP URL
    async fn read_file<T: AsRef<str>>(&self, file: T) -> anyhow::Result<FileRead> {
        // Is an HTTP URL
        let content = match Url::parse(file.as_ref()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                let response = self
                    .runtime
                    .http
                    .execute(reqwest::Request::new(reqwest::Method::GET, url))
                    .await?;
                if !response.status.is_success() {
                    anyhow::bail!(
                        "Unable to fetch config {}: status {}",
                        file.as_ref(),
                        response.status
                    );
                }

                String::from_utf8(response.body.to_vec())?
            }
            // Is a file path
            _ => self.runtime.file.read(file.as_ref()).await?,
        };

        Ok(FileRead {
            content,
            path: file.as_ref().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{"api_url": "http://localhost:9000/app", "teacher_id": 7}"#;

    async fn get_rt() -> TargetRuntime {
        let rt = crate::runtime::tests::init();
        rt.file
            .write("config.json", CONFIG.as_bytes())
            .await
            .unwrap();
        rt
    }

    #[tokio::test]
    async fn test_read_file() {
        let reader = ConfigReader::init(get_rt().await);

        let file = reader.read_file("config.json").await.unwrap();

        assert_eq!(file.path, "config.json");
        assert_eq!(file.content, CONFIG);
    }

    #[tokio::test]
    async fn test_read_from_url() {
        let reader = ConfigReader::init(get_rt().await);
        let server = httpmock::MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET).path("/config.json");
                then.status(200).body(CONFIG);
            })
            .await;

        let actual = reader
            .read_file(format!("{}/config.json", server.base_url()))
            .await
            .unwrap();

        assert_eq!(actual.content, CONFIG);
    }

    #[tokio::test]
    async fn test_read() {
        let reader = ConfigReader::init(get_rt().await);

        let config = reader.read("config.json").await.unwrap();
        assert_eq!(config.api_url, "http://localhost:9000/app");
        assert_eq!(config.teacher_id, 7);
        assert_eq!(config.sign, "123");
    }

    #[tokio::test]
    async fn test_read_rejects_invalid_config() {
        let rt = crate::runtime::tests::init();
        rt.file
            .write("bad.json", br#"{"teacher_id": 99}"#)
            .await
            .unwrap();
        let reader = ConfigReader::init(rt);

        assert!(reader.read("bad.json").await.is_err());
        assert!(reader.read("missing.json").await.is_err());
    }
}
