use std::rc::Rc;

use courses_core::client::CourseApi;
use courses_core::page::{self, CourseRow, DELETE_BUTTON_CLASS, DELETE_BUTTON_TEXT};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement, MouseEvent};

use crate::dom::CourseHandler;
use crate::to_js;

/// Fills the course table. A failed listing is reported in the status area
/// instead of failing start-up.
pub async fn course_table(document: &Document, handler: Rc<CourseHandler>) -> Result<(), JsValue> {
    let tbody = document
        .get_element_by_id(page::TBODY_ID)
        .ok_or_else(|| to_js("course table not found"))?;

    let courses = match handler.api().list_courses().await {
        Ok(courses) => courses,
        Err(e) => {
            log::error!("Unable to load courses: {}", e);
            show_status(document, &format!("Unable to load courses: {}", e));
            return Ok(());
        }
    };

    for course in &courses {
        let tr = course_row(document, &CourseRow::from(course), handler.clone())?;
        tbody.append_child(&tr)?;
    }
    Ok(())
}

fn course_row(
    document: &Document,
    row: &CourseRow,
    handler: Rc<CourseHandler>,
) -> Result<Element, JsValue> {
    let tr = document.create_element("tr")?;
    tr.set_attribute("id", &row.row_id())?;

    for cell in &row.cells {
        let td = document.create_element("td")?;
        td.set_text_content(Some(cell));
        tr.append_child(&td)?;
    }

    let td = document.create_element("td")?;
    let button = delete_button(document, row.course_id.clone(), handler)?;
    td.append_child(&button)?;
    tr.append_child(&td)?;

    Ok(tr)
}

fn delete_button(
    document: &Document,
    course_id: String,
    handler: Rc<CourseHandler>,
) -> Result<HtmlButtonElement, JsValue> {
    let button: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
    button.set_type("button");
    button.set_class_name(DELETE_BUTTON_CLASS);
    button.set_text_content(Some(DELETE_BUTTON_TEXT));

    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        if !handler.confirm_delete(&course_id) {
            return;
        }
        let handler = handler.clone();
        let course_id = course_id.clone();
        spawn_local(async move {
            if let Err(e) = handler.delete(&course_id).await {
                log::error!("Unable to delete course {}: {}", course_id, e);
            }
        });
    });

    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(button)
}

pub(crate) fn show_status(document: &Document, message: &str) {
    match document.get_element_by_id(page::STATUS_ID) {
        Some(status) => status.set_text_content(Some(message)),
        None => log::warn!("Status element #{} not found", page::STATUS_ID),
    }
}
