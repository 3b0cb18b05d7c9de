mod rows;

pub use rows::*;

/// Markup of the course page served next to the wasm bundle.
pub const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../www/index.html"));

pub const FORM_ID: &str = "form";
pub const NAME_ID: &str = "name";
pub const DESCRIPTION_ID: &str = "description";
/// Body of the course table.
pub const TBODY_ID: &str = "left-tbody";
/// Status area under the course table.
pub const STATUS_ID: &str = "left";

pub const ADDED_MESSAGE: &str = "Course added!";
pub const DELETED_MESSAGE: &str = "Course deleted!";

pub fn confirm_delete_message(id: &str) -> String {
    format!("Delete course {}?", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_every_element() {
        for id in [FORM_ID, NAME_ID, DESCRIPTION_ID, TBODY_ID, STATUS_ID] {
            let attr = format!("id=\"{}\"", id);
            assert_eq!(INDEX_HTML.matches(&attr).count(), 1, "missing {}", attr);
        }
    }

    #[test]
    fn test_name_is_required_and_description_is_not() {
        let name_input = INDEX_HTML
            .lines()
            .find(|line| line.contains("id=\"name\""))
            .unwrap();
        assert!(name_input.contains(" required"));

        let description = INDEX_HTML
            .lines()
            .find(|line| line.contains("id=\"description\""))
            .unwrap();
        assert!(!description.contains("required"));
    }

    #[test]
    fn test_form_has_no_action() {
        let form = INDEX_HTML
            .lines()
            .find(|line| line.contains("<form"))
            .unwrap();
        assert!(!form.contains("action="));
    }
}
