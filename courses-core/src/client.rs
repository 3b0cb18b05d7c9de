use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use bytes::Bytes;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Request, Url};

use crate::config::ClientConfig;
use crate::course::{ApiError, Course, CourseDraft};
use crate::http::response::Response;
use crate::HttpIO;

const JSON: &str = "application/json";

/// Operations the page needs from the course API.
#[async_trait::async_trait(?Send)]
pub trait CourseApi {
    async fn list_courses(&self) -> Result<Vec<Course>>;
    /// Creates a course and resolves to the refreshed listing.
    async fn add_course(&self, draft: CourseDraft) -> Result<Vec<Course>>;
    /// Deletes a course and resolves to the refreshed listing.
    async fn delete_course(&self, id: &str) -> Result<Vec<Course>>;
}

/// HTTP client for the `/courses` routes of the course API.
#[derive(Clone)]
pub struct CourseClient {
    http: Arc<dyn HttpIO>,
    config: ClientConfig,
}

impl CourseClient {
    pub fn new(http: Arc<dyn HttpIO>, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn courses_url(&self) -> Result<Url> {
        let base = self.config.api_url.trim_end_matches('/');
        Url::parse(&format!("{}/courses", base))
            .with_context(|| format!("Invalid api_url: {}", self.config.api_url))
    }

    fn course_url(&self, id: &str) -> Result<Url> {
        let mut url = self.courses_url()?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid api_url: {}", self.config.api_url))?
            .push(id);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> Result<Request> {
        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(
            "sign",
            HeaderValue::from_str(&self.config.sign).context("Invalid sign header")?,
        );
        Ok(request)
    }

    async fn send(&self, request: Request) -> Result<Vec<Course>> {
        let method = request.method().clone();
        let url = request.url().clone();
        let response = self.http.execute(request).await?;
        log::info!("{} {} {}", method, url, response.status.as_u16());

        if !response.status.is_success() {
            return Err(api_error(&response));
        }
        let courses = response
            .to_json::<Vec<Course>>()
            .with_context(|| format!("Unexpected response body from {} {}", method, url))?
            .body;
        Ok(courses)
    }
}

fn api_error(response: &Response<Bytes>) -> anyhow::Error {
    match serde_json::from_slice::<ApiError>(&response.body) {
        Ok(err) => err.into(),
        Err(_) => anyhow!("Course API responded with status {}", response.status),
    }
}

#[async_trait::async_trait(?Send)]
impl CourseApi for CourseClient {
    async fn list_courses(&self) -> Result<Vec<Course>> {
        let request = self.request(Method::GET, self.courses_url()?)?;
        self.send(request).await
    }

    async fn add_course(&self, draft: CourseDraft) -> Result<Vec<Course>> {
        let body = serde_json::to_vec(&draft.into_new_course(self.config.teacher_id))?;
        let mut request = self.request(Method::POST, self.courses_url()?)?;
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        *request.body_mut() = Some(reqwest::Body::from(body));
        self.send(request).await
    }

    async fn delete_course(&self, id: &str) -> Result<Vec<Course>> {
        let request = self.request(Method::DELETE, self.course_url(id)?)?;
        self.send(request).await
    }
}
