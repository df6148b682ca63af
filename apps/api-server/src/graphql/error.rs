//! Domain errors as GraphQL errors.

use async_graphql::{Error, ErrorExtensions};
use pulse_core::DomainError;

/// Convert a `DomainError` into a GraphQL error carrying a `code` extension.
pub fn to_graphql_error(err: DomainError) -> Error {
    match err {
        DomainError::NotFound { entity_type, id } => {
            Error::new(err.to_string()).extend_with(|_, e| {
                e.set("code", "NOT_FOUND");
                e.set("entity", entity_type);
                e.set("id", id);
            })
        }
        DomainError::Internal(detail) => {
            tracing::error!(error = %detail, "Internal error while resolving field");
            Error::new("Internal server error")
                .extend_with(|_, e| e.set("code", "INTERNAL_SERVER_ERROR"))
        }
    }
}

/// `?`-friendly conversion for service results inside resolvers.
pub trait GraphQLResultExt<T> {
    fn into_gql(self) -> async_graphql::Result<T>;
}

impl<T> GraphQLResultExt<T> for Result<T, DomainError> {
    fn into_gql(self) -> async_graphql::Result<T> {
        self.map_err(to_graphql_error)
    }
}
