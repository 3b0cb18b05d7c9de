use anyhow::{bail, Result};
use serde::Serialize;

/// Name and description collected from the "add course" form for a single
/// submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    name: String,
    description: String,
}

impl CourseDraft {
    /// Same rule as the `required` attribute on the name input: any
    /// non-empty value passes, whitespace included.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            bail!("Course name is required");
        }
        Ok(Self {
            name,
            description: description.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn into_new_course(self, teacher_id: i64) -> NewCourse {
        NewCourse {
            teacher_id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Body of the course creation request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewCourse {
    pub teacher_id: i64,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected() {
        let err = CourseDraft::new("", "something").unwrap_err();
        assert_eq!(err.to_string(), "Course name is required");
    }

    #[test]
    fn test_blank_name_passes_like_the_browser() {
        let draft = CourseDraft::new(" ", "").unwrap();
        assert_eq!(draft.name(), " ");
        assert_eq!(draft.description(), "");
    }

    #[test]
    fn test_new_course_body() {
        let body = CourseDraft::new("Rust \"101\"", "")
            .unwrap()
            .into_new_course(1);
        insta::assert_json_snapshot!(body, @r###"
        {
          "teacher_id": 1,
          "name": "Rust \"101\"",
          "description": ""
        }
        "###);
    }
}
