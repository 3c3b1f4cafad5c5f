//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, trimmed
//! non-empty titles, normalized phone numbers) so that once a value reaches the
//! domain layer it can be sent to the backend without further checks.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
    /// Language code is not a two-letter ISO 639-1 code.
    #[error("invalid language code")]
    InvalidLanguage,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(RecordId, "Identifier of any row managed by the backend.");
id_newtype!(CourseId, "Unique identifier for a course.");
id_newtype!(HospitalId, "Unique identifier for a partner hospital.");
id_newtype!(PopupId, "Unique identifier for a pop-up notification.");

fn trimmed(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    Ok(trimmed.to_string())
}

/// Strips scripts, event handlers and unknown tags with `ammonia`.
fn sanitized_html(value: String) -> Result<String, TypeConstraintError> {
    trimmed(ammonia::clean(&value))
}

fn language_code(value: String) -> Result<String, TypeConstraintError> {
    let code = value.trim().to_lowercase();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase()) {
        Ok(code)
    } else {
        Err(TypeConstraintError::InvalidLanguage)
    }
}

/// Normalizes a phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

fn e164(value: String) -> Result<String, TypeConstraintError> {
    normalize_phone_to_e164(&value)
}

fn absolute_url(value: String) -> Result<String, TypeConstraintError> {
    let url = trimmed(value)?;
    if url.validate_url() {
        Ok(url)
    } else {
        Err(TypeConstraintError::InvalidUrl)
    }
}

/// String wrapper whose constructor runs `$check` over the raw input and
/// keeps the normalized result.
macro_rules! string_value {
    ($name:ident, $check:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                $check(value.into()).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_value!(CourseTitle, trimmed, "Trimmed, non-empty course title.");
string_value!(CategorySlug, trimmed, "Content category key as used in URL filters.");
string_value!(HospitalName, trimmed, "Trimmed, non-empty hospital name.");
string_value!(CityName, trimmed, "Trimmed, non-empty city.");
string_value!(PopupTitle, trimmed, "Trimmed, non-empty pop-up headline.");
string_value!(PopupMessage, sanitized_html, "Sanitized pop-up body; never empty after cleaning.");
string_value!(LanguageCode, language_code, "Two-letter lower-case ISO 639-1 code.");
string_value!(PhoneNumber, e164, "Phone number normalized to E.164.");
string_value!(MediaUrl, absolute_url, "Absolute media URL (cover images, audio files).");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_rejects_non_positive_values() {
        assert_eq!(CourseId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(RecordId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(HospitalId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn title_is_trimmed() {
        let title = CourseTitle::new("  Space for kids ").unwrap();
        assert_eq!(title.as_str(), "Space for kids");
        assert!(CourseTitle::new("   ").is_err());
    }

    #[test]
    fn language_code_is_normalized() {
        assert_eq!(LanguageCode::new(" EN ").unwrap().as_str(), "en");
        assert_eq!(
            LanguageCode::new("eng"),
            Err(TypeConstraintError::InvalidLanguage)
        );
        assert!(LanguageCode::new("e1").is_err());
    }

    #[test]
    fn popup_message_is_sanitized() {
        let message = PopupMessage::new("<b>Hi</b><script>alert(1)</script>").unwrap();
        assert_eq!(message.as_str(), "<b>Hi</b>");
        assert!(PopupMessage::new("<script>x</script>").is_err());
    }

    #[test]
    fn phone_number_normalizes_to_e164() {
        let phone = PhoneNumber::new("+1 (415) 555-2671").unwrap();
        assert_eq!(phone.as_str(), "+14155552671");
        assert_eq!(
            PhoneNumber::new("not a phone"),
            Err(TypeConstraintError::InvalidPhone)
        );
    }

    #[test]
    fn media_url_requires_valid_url() {
        assert!(MediaUrl::new("https://cdn.example.com/cover.png").is_ok());
        assert_eq!(
            MediaUrl::new("cover.png"),
            Err(TypeConstraintError::InvalidUrl)
        );
    }
}
