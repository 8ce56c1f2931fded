use crate::{Content, StdResult};

/// A trait for a display container whose content is owned by the widget.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RenderTarget: Sync + Send {
    /// Replaces the whole content of the container in a single step.
    async fn replace_content(&self, content: Content) -> StdResult<()>;
}
