use bytes::Bytes;
use courses_core::http::response::Response;
use courses_core::HttpIO;
use reqwest::{Client, Request};

#[derive(Default, Clone)]
pub struct NativeHttp {
    client: Client,
}

#[async_trait::async_trait(?Send)]
impl HttpIO for NativeHttp {
    async fn execute(&self, request: Request) -> anyhow::Result<Response<Bytes>> {
        log::debug!(
            "{} {} {:?}",
            request.method(),
            request.url(),
            request.version()
        );
        log::debug!("request: {:?}", request);
        let response = self.client.execute(request).await?;
        log::debug!("response: {:?}", response);

        Response::from_reqwest(response).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;

    #[tokio::test]
    async fn test_native_http_get_request() {
        let server = httpmock::MockServer::start_async().await;

        let header_serv = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET).path("/test");
                then.status(200).body("Alo");
            })
            .await;

        let native_http = NativeHttp::default();
        let request_url = server.url("/test");
        let request = Request::new(Method::GET, request_url.parse().unwrap());

        let response = native_http.execute(request).await.unwrap();

        assert_eq!(response.status, reqwest::StatusCode::OK);
        assert_eq!(response.body, Bytes::from("Alo"));

        header_serv.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        let server = httpmock::MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET).path("/missing");
                then.status(404);
            })
            .await;

        let request = Request::new(Method::GET, server.url("/missing").parse().unwrap());
        let response = NativeHttp::default().execute(request).await.unwrap();

        assert_eq!(response.status, reqwest::StatusCode::NOT_FOUND);
    }
}
