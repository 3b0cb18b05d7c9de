use bytes::Bytes;
use courses_core::http::response::Response;
use courses_core::HttpIO;
use reqwest::Client;

/// `HttpIO` over the browser's `fetch`.
#[derive(Clone)]
pub struct WasmHttp {
    client: Client,
}

impl WasmHttp {
    pub fn init() -> Self {
        let client = Client::new();
        Self { client }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpIO for WasmHttp {
    async fn execute(&self, request: reqwest::Request) -> anyhow::Result<Response<Bytes>> {
        log::debug!("{} {}", request.method(), request.url());
        let response = self.client.execute(request).await?;
        Response::from_reqwest(response).await
    }
}
