use std::sync::Arc;

use log::{debug, error, info};
use tokio::task::JoinHandle;

use crate::{
    Content, ListItem, RenderTarget, RepositoriesRequest, RepositoryFetcher, RepositoryListLoader,
    Response, StdResult,
};

/// A widget listing the public repositories of a user, most watched first, forks left out.
pub struct RepositoryListWidget {
    fetcher: Arc<dyn RepositoryFetcher>,
}

impl RepositoryListWidget {
    /// Creates a new `RepositoryListWidget` instance with the given fetcher.
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>) -> Self {
        Self { fetcher }
    }
}

/// Builds a list container holding the non-fork repositories of the response, most watched
/// first.
fn build_list(response: Response) -> StdResult<Content> {
    let mut list = Content::empty_list();
    for repository in response
        .into_sorted_repositories()
        .iter()
        .filter(|repository| !repository.is_fork())
    {
        debug!("Rendering {repository}");
        list.push_item(ListItem::term(repository))?;
        list.push_item(ListItem::description(repository))?;
    }

    Ok(list)
}

/// Replaces the content of the target with the list built from the response.
///
/// The list is built before it reaches the target, so the target goes from the previous content
/// to the complete list in one step.
async fn render_repositories(response: Response, target: &dyn RenderTarget) -> StdResult<()> {
    target.replace_content(build_list(response)?).await
}

#[async_trait::async_trait]
impl RepositoryListLoader for RepositoryListWidget {
    async fn load_repositories(
        &self,
        username: &str,
        target: Arc<dyn RenderTarget>,
    ) -> StdResult<JoinHandle<StdResult<()>>> {
        let request = RepositoriesRequest::try_new(username)?;
        target.replace_content(Content::loading()).await?;
        info!("Loading repositories: {request}");

        let fetcher = self.fetcher.clone();
        Ok(tokio::spawn(async move {
            let result: StdResult<()> = async {
                let response = fetcher.fetch(&request).await?;
                render_repositories(response, target.as_ref()).await
            }
            .await;
            match &result {
                Ok(()) => info!("Rendered repositories: {request}"),
                // The target keeps showing the loading indicator.
                Err(e) => error!("Failed to load repositories: {request}: {e:?}"),
            }

            result
        }))
    }
}
