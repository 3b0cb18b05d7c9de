use crate::course::Course;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DELETE_BUTTON_CLASS: &str = "btn btn-danger btn-sm";
pub const DELETE_BUTTON_TEXT: &str = "Delete";

/// Text cells of one course table row; the action cell is added by the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    pub course_id: String,
    pub cells: [String; 4],
}

impl CourseRow {
    pub fn row_id(&self) -> String {
        format!("tr-{}", self.course_id)
    }
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.id.clone(),
            cells: [
                course.id.clone(),
                course.name.clone(),
                course.time.format(DATE_FORMAT).to_string(),
                course.description.clone().unwrap_or_default(),
            ],
        }
    }
}

/// Tab separated listing, one course per line.
pub fn render_listing(courses: &[Course]) -> String {
    courses
        .iter()
        .map(CourseRow::from)
        .map(|row| row.cells.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}
