use anyhow::Result;
use bytes::Bytes;
use serde::de;

#[derive(Clone, Debug, Default)]
pub struct Response<Body: Default + Clone> {
    pub status: reqwest::StatusCode,
    pub headers: reqwest::header::HeaderMap,
    pub body: Body,
}

impl Response<Bytes> {
    pub async fn from_reqwest(resp: reqwest::Response) -> Result<Self> {
        let status = resp.status();
        let headers = resp.headers().to_owned();
        let body = resp.bytes().await?;
        Ok(Response {
            status,
            headers,
            body,
        })
    }

    pub fn to_json<T: de::DeserializeOwned + Clone + Default>(self) -> Result<Response<T>> {
        let body = serde_json::from_slice::<T>(&self.body)?;
        Ok(Response {
            status: self.status,
            headers: self.headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn response(status: StatusCode, body: &'static str) -> Response<Bytes> {
        Response {
            status,
            headers: reqwest::header::HeaderMap::new(),
            body: Bytes::from(body),
        }
    }

    #[test]
    fn test_to_json() {
        let json_response = response(StatusCode::CREATED, r#"{"name":"test"}"#)
            .to_json::<serde_json::Value>()
            .unwrap();
        assert_eq!(json_response.body["name"], "test");
        assert_eq!(json_response.status, StatusCode::CREATED);
    }

    #[test]
    fn test_to_json_rejects_garbage() {
        let response = response(StatusCode::OK, "<html>");
        assert!(response.to_json::<serde_json::Value>().is_err());
    }
}
