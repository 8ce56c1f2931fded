use log::debug;
use tokio::sync::RwLock;

use crate::{Content, RenderTarget, StdResult, WidgetState};

/// A render target holding its content in memory.
#[derive(Debug, Default)]
pub struct MemoryRenderTarget {
    /// The current content, `None` until the widget first writes to the target.
    content: RwLock<Option<Content>>,
}

impl MemoryRenderTarget {
    /// Retrieves a copy of the current content.
    pub async fn content(&self) -> Option<Content> {
        self.content.read().await.to_owned()
    }

    /// Retrieves the state of the widget owning the target.
    pub async fn state(&self) -> Option<WidgetState> {
        self.content.read().await.as_ref().map(Content::state)
    }

    /// Serializes the current content to HTML markup, empty when nothing was written yet.
    pub async fn to_html(&self) -> String {
        self.content
            .read()
            .await
            .as_ref()
            .map(Content::to_html)
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl RenderTarget for MemoryRenderTarget {
    async fn replace_content(&self, content: Content) -> StdResult<()> {
        debug!("Replacing content with {:?}", content.state());
        let mut current_content = self.content.write().await;
        *current_content = Some(content);

        Ok(())
    }
}
