//! Form submission and row deletion, independent of the DOM.
//!
//! Browser listeners run the synchronous half (`take_draft`,
//! `confirm_delete`) inside the event callback, then queue the asynchronous
//! half (`submit`, `delete`).

use anyhow::Result;

use crate::client::CourseApi;
use crate::course::CourseDraft;
use crate::page::{self, ADDED_MESSAGE, DELETED_MESSAGE};

/// The submit event of the course form.
pub trait FormEvent {
    fn prevent_default(&self);
}

/// The page the handler reads from and reports to.
pub trait PageHost {
    /// Current value of the input or textarea with the given id.
    fn field_value(&self, id: &str) -> Option<String>;
    /// Native constraint validation of the course form.
    fn form_is_valid(&self) -> bool;
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn reload(&self) -> Result<()>;
}

pub struct CourseHandler<A, H> {
    api: A,
    host: H,
}

impl<A: CourseApi, H: PageHost> CourseHandler<A, H> {
    pub fn new(api: A, host: H) -> Self {
        Self { api, host }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Cancels the form navigation and collects the draft. `None` when the
    /// form does not pass validation.
    pub fn take_draft(&self, event: &impl FormEvent) -> Option<CourseDraft> {
        event.prevent_default();

        if !self.host.form_is_valid() {
            log::debug!("Course form is invalid, skipping submission");
            return None;
        }
        let name = self.host.field_value(page::NAME_ID).unwrap_or_default();
        let description = self
            .host
            .field_value(page::DESCRIPTION_ID)
            .unwrap_or_default();

        match CourseDraft::new(name, description) {
            Ok(draft) => Some(draft),
            Err(e) => {
                log::debug!("{}", e);
                None
            }
        }
    }

    /// Creates the course, then confirms and reloads the page.
    pub async fn submit(&self, draft: CourseDraft) -> Result<()> {
        log::info!("Adding course {}", draft.name());
        self.api.add_course(draft).await?;
        self.host.alert(ADDED_MESSAGE);
        self.host.reload()
    }

    pub fn confirm_delete(&self, id: &str) -> bool {
        self.host.confirm(&page::confirm_delete_message(id))
    }

    /// Deletes the course, then confirms and reloads the page.
    pub async fn delete(&self, id: &str) -> Result<()> {
        log::info!("Deleting course {}", id);
        self.api.delete_course(id).await?;
        self.host.alert(DELETED_MESSAGE);
        self.host.reload()
    }
}
