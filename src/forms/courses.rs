use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::course::{Course, NewCourse};
use crate::domain::types::{CategorySlug, CourseTitle, LanguageCode, MediaUrl};
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Serialize, Validate)]
/// Form data for adding or editing a course.
pub struct CourseForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(length(min = 1, max = 64))]
    pub category: String,
    #[validate(length(equal = 2))]
    pub language: String,
    /// Blank when the course has no cover.
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub published: bool,
}

impl CourseForm {
    /// Prefills the edit form.
    pub fn from_course(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone().unwrap_or_default(),
            category: course.category.clone(),
            language: course.language.clone(),
            cover_url: course.cover_url.clone().unwrap_or_default(),
            published: course.published,
        }
    }
}

impl TryFrom<CourseForm> for NewCourse {
    type Error = FormError;

    fn try_from(form: CourseForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let title = CourseTitle::new(form.title).map_err(|_| FormError::InvalidTitle)?;
        let category = CategorySlug::new(form.category).map_err(|_| FormError::InvalidCategory)?;
        let language = LanguageCode::new(form.language).map_err(|_| FormError::InvalidLanguage)?;
        let cover_url = match form.cover_url.trim() {
            "" => None,
            url => Some(MediaUrl::new(url).map_err(|_| FormError::InvalidUrl)?),
        };

        Ok(NewCourse::new(
            title,
            Some(form.description),
            category,
            language,
            cover_url,
            form.published,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CourseForm {
        CourseForm {
            title: " Planets ".to_string(),
            description: String::new(),
            category: "science".to_string(),
            language: "EN".to_string(),
            cover_url: String::new(),
            published: true,
        }
    }

    #[test]
    fn valid_form_builds_normalized_course() {
        let course = NewCourse::try_from(form()).unwrap();
        assert_eq!(course.title.as_str(), "Planets");
        assert_eq!(course.language.as_str(), "en");
        assert_eq!(course.description, None);
        assert_eq!(course.cover_url, None);
        assert!(course.published);
    }

    #[test]
    fn bad_cover_url_is_rejected() {
        let bad_cover = CourseForm {
            cover_url: "not a url".to_string(),
            ..form()
        };
        assert!(matches!(NewCourse::try_from(bad_cover), Err(FormError::InvalidUrl)));
    }

    #[test]
    fn language_must_be_two_letters() {
        let three_letters = CourseForm {
            language: "eng".to_string(),
            ..form()
        };
        assert!(matches!(
            NewCourse::try_from(three_letters),
            Err(FormError::Validation(_))
        ));

        let with_digit = CourseForm {
            language: "e1".to_string(),
            ..form()
        };
        assert!(matches!(
            NewCourse::try_from(with_digit),
            Err(FormError::InvalidLanguage)
        ));
    }

    #[test]
    fn blank_title_fails_validation() {
        let blank = CourseForm {
            title: String::new(),
            ..form()
        };
        assert!(NewCourse::try_from(blank).is_err());
    }
}
