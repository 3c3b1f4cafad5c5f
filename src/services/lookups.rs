use crate::SERVICE_ACCESS_ROLE;
use crate::backend::LookupSource;
use crate::list::filter::FilterOption;
use crate::models::auth::AuthenticatedUser;
use crate::resources::LOOKUP_KINDS;
use crate::services::{ServiceError, ServiceResult};

/// Returns the options of lookup `kind` for the filter popovers.
pub async fn lookup_options<B>(
    backend: &B,
    user: &AuthenticatedUser,
    kind: &str,
) -> ServiceResult<Vec<FilterOption>>
where
    B: LookupSource + ?Sized,
{
    if !user.has_role(SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    if !LOOKUP_KINDS.contains(&kind) {
        return Err(ServiceError::NotFound);
    }

    backend.lookup_options(kind).await.map_err(|err| {
        log::error!("Failed to load {kind} options: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::backend::mock::MockBackend;

    fn editor() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".to_string(),
            email: "editor@example.com".to_string(),
            name: "Editor".to_string(),
            roles: vec!["dashboard".to_string()],
            exp: usize::MAX,
        }
    }

    #[test]
    fn known_kinds_are_proxied() {
        let mut backend = MockBackend::new();
        backend
            .expect_lookup_options()
            .withf(|kind| kind == "languages")
            .returning(|_| Ok(vec![FilterOption::new("en", "English")]));

        let options = block_on(lookup_options(&backend, &editor(), "languages")).unwrap();
        assert_eq!(options, vec![FilterOption::new("en", "English")]);
    }

    #[test]
    fn unknown_kind_is_not_found() {
        let backend = MockBackend::new();
        assert!(matches!(
            block_on(lookup_options(&backend, &editor(), "secrets")),
            Err(ServiceError::NotFound)
        ));
    }
}
