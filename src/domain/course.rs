use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategorySlug, CourseId, CourseTitle, LanguageCode, MediaUrl};

/// Course as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub language: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated payload for creating or replacing a course.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: CourseTitle,
    pub description: Option<String>,
    pub category: CategorySlug,
    pub language: LanguageCode,
    pub cover_url: Option<MediaUrl>,
    pub published: bool,
}

impl NewCourse {
    #[must_use]
    pub fn new(
        title: CourseTitle,
        description: Option<String>,
        category: CategorySlug,
        language: LanguageCode,
        cover_url: Option<MediaUrl>,
        published: bool,
    ) -> Self {
        Self {
            title,
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            category,
            language,
            cover_url,
            published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_description_is_dropped() {
        let course = NewCourse::new(
            CourseTitle::new("Planets").unwrap(),
            Some("   ".to_string()),
            CategorySlug::new("science").unwrap(),
            LanguageCode::new("en").unwrap(),
            None,
            false,
        );
        assert_eq!(course.description, None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let course = NewCourse::new(
            CourseTitle::new("Planets").unwrap(),
            None,
            CategorySlug::new("science").unwrap(),
            LanguageCode::new("en").unwrap(),
            Some(MediaUrl::new("https://cdn.example.com/p.png").unwrap()),
            true,
        );
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["coverUrl"], "https://cdn.example.com/p.png");
        assert_eq!(json["language"], "en");
        assert_eq!(json["published"], true);
    }

    #[test]
    fn deserializes_backend_course() {
        let course: Course = serde_json::from_str(
            r#"{"id":3,"title":"Planets","category":"science","language":"en","createdAt":"2026-01-02T03:04:05Z"}"#,
        )
        .unwrap();
        assert_eq!(course.id.get(), 3);
        assert!(!course.published);
        assert_eq!(course.cover_url, None);
    }
}
