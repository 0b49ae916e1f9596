//! Injected API client
//!
//! The REST server is an external collaborator; the view only needs one
//! call, `GET /organizations/{org_id}/`.

use crate::error::ApiError;
use async_trait::async_trait;
use orgset_fields::Organization;

/// Client for the organization resource endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetch `GET /organizations/{org_id}/`.
    ///
    /// # Errors
    /// - `ApiError::FetchFailed` when the request fails for any reason
    async fn fetch_organization(&self, org_id: &str) -> Result<Organization, ApiError>;
}
