use std::rc::Rc;

use anyhow::anyhow;
use courses_core::client::CourseApi;
use courses_core::course::CourseDraft;
use wasm_bindgen::prelude::*;

mod dom;
mod http;
mod query;
mod render;
mod runtime;

#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    init_log();

    let window = web_sys::window().ok_or_else(|| to_js("no global window exists"))?;
    let document = window
        .document()
        .ok_or_else(|| to_js("no global document exists"))?;

    // The form must never navigate, even when the client cannot be built.
    let client = match runtime::init(&window) {
        Ok(client) => client,
        Err(e) => {
            let message = format!("Unable to configure the course client: {}", js_message(&e));
            log::error!("{}", message);
            render::show_status(&document, &message);
            dom::cancel_submit(&document)?;
            return Ok(());
        }
    };
    let handler = Rc::new(dom::CourseHandler::new(
        client,
        dom::DomHost::new(window, document.clone()),
    ));

    dom::bind_submit(&document, handler.clone())?;
    render::course_table(&document, handler).await?;

    log::info!("Course page ready");
    Ok(())
}

/// Creates a course and resolves to the refreshed course list.
#[wasm_bindgen]
pub async fn add_course(name: String, description: String) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| to_js("no global window exists"))?;
    let client = runtime::init(&window)?;
    let draft = CourseDraft::new(name, description).map_err(to_js)?;
    let courses = client.add_course(draft).await.map_err(to_js)?;

    serde_wasm_bindgen::to_value(&courses).map_err(JsValue::from)
}

pub(crate) fn init_log() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

pub(crate) fn to_anyhow<T: std::fmt::Debug>(e: T) -> anyhow::Error {
    anyhow!("{:?}", e)
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub(crate) fn to_js<T: std::fmt::Display>(e: T) -> JsValue {
    JsValue::from_str(&e.to_string())
}
