use std::sync::Arc;

use courses_core::client::CourseClient;
use courses_core::config::ClientConfig;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::http::WasmHttp;
use crate::query::PageQuery;
use crate::to_js;

/// Builds the course client from the defaults and the page query.
pub fn init(window: &Window) -> Result<CourseClient, JsValue> {
    let search = window.location().search()?;
    let config = PageQuery::parse(&search)
        .map_err(to_js)?
        .apply(ClientConfig::default());
    config.validate().map_err(to_js)?;

    log::debug!("Course API at {}", config.api_url);
    Ok(CourseClient::new(Arc::new(WasmHttp::init()), config))
}
