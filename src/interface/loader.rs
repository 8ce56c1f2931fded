use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{RenderTarget, StdResult};

/// A trait for loading the repositories of a user into a render target.
#[async_trait::async_trait]
pub trait RepositoryListLoader: Sync + Send {
    /// Shows the loading indicator in the target, then fetches and renders the repositories in
    /// the background.
    ///
    /// Returns as soon as the loading indicator is shown, with a handle on the background task.
    async fn load_repositories(
        &self,
        username: &str,
        target: Arc<dyn RenderTarget>,
    ) -> StdResult<JoinHandle<StdResult<()>>>;
}
