use crate::{RepositoriesRequest, Response, StdResult};

/// A trait for fetching the repositories of a user from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches the repositories of the user of the request.
    async fn fetch(&self, request: &RepositoriesRequest) -> StdResult<Response>;
}
