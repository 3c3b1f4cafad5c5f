use serde::Serialize;

use crate::domain::course::Course;
use crate::list::filter::FilterOption;

/// Data required to render `courses/edit.html`.
#[derive(Debug, Serialize)]
pub struct CourseEditData {
    pub course: Course,
    pub categories: Vec<FilterOption>,
    pub languages: Vec<FilterOption>,
}
