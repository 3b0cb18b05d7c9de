use std::rc::Rc;

use courses_core::client::CourseClient;
use courses_core::handler::{FormEvent, PageHost};
use courses_core::page;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::{to_anyhow, to_js};

pub type CourseHandler = courses_core::handler::CourseHandler<CourseClient, DomHost>;

/// `PageHost` backed by the live window and document.
#[derive(Clone)]
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl PageHost for DomHost {
    fn field_value(&self, id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value)
    }

    fn form_is_valid(&self) -> bool {
        self.document
            .get_element_by_id(page::FORM_ID)
            .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
            .is_some_and(|form| form.check_validity())
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("Unable to show alert: {:?}", e);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn reload(&self) -> anyhow::Result<()> {
        self.window.location().reload().map_err(to_anyhow)
    }
}

struct SubmitEvent<'a>(&'a Event);

impl FormEvent for SubmitEvent<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

fn course_form(document: &Document) -> Result<Element, JsValue> {
    document
        .get_element_by_id(page::FORM_ID)
        .ok_or_else(|| to_js("course form not found"))
}

/// Registers the course form's submit listener for the lifetime of the page.
pub fn bind_submit(document: &Document, handler: Rc<CourseHandler>) -> Result<(), JsValue> {
    let form = course_form(document)?;

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        // Navigation has to be cancelled before the listener returns.
        let Some(draft) = handler.take_draft(&SubmitEvent(&event)) else {
            return;
        };
        let handler = handler.clone();
        spawn_local(async move {
            if let Err(e) = handler.submit(draft).await {
                log::error!("Unable to add course: {}", e);
            }
        });
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

/// Listener for a page without a usable course client: submissions are
/// cancelled and dropped.
pub fn cancel_submit(document: &Document) -> Result<(), JsValue> {
    let form = course_form(document)?;

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        SubmitEvent(&event).prevent_default();
        log::warn!("Course client is not configured, submission dropped");
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn host_with_name(name: &str) -> DomHost {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        document.body().unwrap().set_inner_html(
            r#"<form id="form"><input id="name" required><textarea id="description"></textarea></form>"#,
        );
        document
            .get_element_by_id("name")
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap()
            .set_value(name);
        DomHost::new(window, document)
    }

    #[wasm_bindgen_test]
    fn test_reads_input_and_textarea() {
        let host = host_with_name("Rust");
        assert_eq!(host.field_value(page::NAME_ID).as_deref(), Some("Rust"));
        assert_eq!(host.field_value(page::DESCRIPTION_ID).as_deref(), Some(""));
        assert_eq!(host.field_value("missing"), None);
        assert!(host.form_is_valid());
    }

    #[wasm_bindgen_test]
    fn test_empty_name_fails_validation() {
        let host = host_with_name("");
        assert!(!host.form_is_valid());
    }

    fn dispatch_submit(document: &Document) -> Event {
        let event = document.create_event("Event").unwrap();
        event.init_event_with_bubbles_and_cancelable("submit", true, true);
        course_form(document).unwrap().dispatch_event(&event).unwrap();
        event
    }

    #[wasm_bindgen_test]
    fn test_bound_submit_is_cancelled() {
        // An empty name keeps the submission away from the network.
        let host = host_with_name("");
        let document = host.document.clone();
        let client = crate::runtime::init(&host.window).unwrap();
        bind_submit(&document, Rc::new(CourseHandler::new(client, host))).unwrap();

        assert!(dispatch_submit(&document).default_prevented());
    }

    #[wasm_bindgen_test]
    fn test_unconfigured_submit_is_cancelled() {
        let host = host_with_name("Rust");
        cancel_submit(&host.document).unwrap();

        assert!(dispatch_submit(&host.document).default_prevented());
    }
}
