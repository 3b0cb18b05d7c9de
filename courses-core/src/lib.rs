#![allow(clippy::module_inception)]

pub mod client;
pub mod config;
pub mod course;
pub mod handler;
pub mod http;
pub mod page;
pub mod runtime;

// Browser futures are not `Send`, so none of the IO traits require it.
#[async_trait::async_trait(?Send)]
pub trait HttpIO: 'static {
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> anyhow::Result<http::response::Response<bytes::Bytes>>;
}

#[async_trait::async_trait(?Send)]
pub trait FileIO {
    async fn write<'a>(&'a self, path: &'a str, content: &'a [u8]) -> anyhow::Result<()>;
    async fn read<'a>(&'a self, path: &'a str) -> anyhow::Result<String>;
}
