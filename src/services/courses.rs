use crate::SERVICE_ADMIN_ROLE;
use crate::backend::{CourseReader, CourseWriter, LookupSource};
use crate::domain::course::{Course, NewCourse};
use crate::domain::types::CourseId;
use crate::dto::courses::CourseEditData;
use crate::forms::courses::CourseForm;
use crate::list::filter::FilterOption;
use crate::models::auth::AuthenticatedUser;
use crate::resources::{LOOKUP_CATEGORIES, LOOKUP_LANGUAGES};
use crate::services::{ServiceError, ServiceResult};

async fn options_or_empty<B>(backend: &B, kind: &str) -> Vec<FilterOption>
where
    B: LookupSource + ?Sized,
{
    backend.lookup_options(kind).await.unwrap_or_else(|err| {
        log::warn!("Failed to load {kind} options: {err}");
        Vec::new()
    })
}

/// Loads a course together with the select options of the edit form.
pub async fn load_course_edit<B>(
    backend: &B,
    user: &AuthenticatedUser,
    id: i32,
) -> ServiceResult<CourseEditData>
where
    B: CourseReader + LookupSource + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let id = CourseId::new(id)?;
    let (course, categories, languages) = futures::join!(
        backend.get_course(id),
        options_or_empty(backend, LOOKUP_CATEGORIES),
        options_or_empty(backend, LOOKUP_LANGUAGES),
    );

    let course = course
        .map_err(|err| {
            log::error!("Failed to load course {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)?;

    Ok(CourseEditData {
        course,
        categories,
        languages,
    })
}

/// Validates the form and creates a course.
pub async fn add_course<B>(
    backend: &B,
    user: &AuthenticatedUser,
    form: CourseForm,
) -> ServiceResult<Course>
where
    B: CourseWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let new_course = NewCourse::try_from(form).map_err(|err| {
        log::error!("Failed to validate course form: {err}");
        ServiceError::from(err)
    })?;

    backend.create_course(&new_course).await.map_err(|err| {
        log::error!("Failed to add a course: {err}");
        ServiceError::from(err)
    })
}

/// Validates the form and replaces the course `id`.
pub async fn save_course<B>(
    backend: &B,
    user: &AuthenticatedUser,
    id: i32,
    form: CourseForm,
) -> ServiceResult<Course>
where
    B: CourseWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let id = CourseId::new(id)?;
    let course = NewCourse::try_from(form).map_err(|err| {
        log::error!("Failed to validate course form: {err}");
        ServiceError::from(err)
    })?;

    backend.update_course(id, &course).await.map_err(|err| {
        log::error!("Failed to save course {id}: {err}");
        ServiceError::from(err)
    })
}
