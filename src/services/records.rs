use crate::SERVICE_ADMIN_ROLE;
use crate::backend::RecordWriter;
use crate::domain::types::RecordId;
use crate::models::auth::AuthenticatedUser;
use crate::resources::Resource;
use crate::services::{ServiceError, ServiceResult};

/// Deletes row `id` of the list `slug` and returns the resource so the caller
/// can go back to its list.
pub async fn delete_record<B>(
    backend: &B,
    user: &AuthenticatedUser,
    slug: &str,
    id: i32,
) -> ServiceResult<Resource>
where
    B: RecordWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let resource = Resource::from_slug(slug).ok_or(ServiceError::NotFound)?;
    if !resource.deletable() {
        return Err(ServiceError::Form(format!(
            "{} cannot be deleted",
            resource.title()
        )));
    }

    let id = RecordId::new(id)?;
    backend.delete_record(resource, id).await.map_err(|err| {
        log::error!("Failed to delete {} {id}: {err}", resource.slug());
        ServiceError::from(err)
    })?;

    Ok(resource)
}
