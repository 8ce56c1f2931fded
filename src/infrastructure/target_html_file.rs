use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use tokio::sync::Mutex;

use crate::{Content, RenderTarget, StdResult, escape_html};

/// A render target backed by an HTML page on disk.
///
/// The page holds a single container element and is rewritten whenever the content is replaced.
/// The page on disk is the only copy of the content.
pub struct HtmlFileRenderTarget {
    /// The path of the page.
    path: PathBuf,

    /// The id of the container element.
    container_id: String,

    /// Serializes the writes of the page.
    write_lock: Mutex<()>,
}

impl HtmlFileRenderTarget {
    /// Creates a new `HtmlFileRenderTarget` writing to the given path.
    pub fn new(path: &Path, container_id: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            container_id: container_id.to_string(),
            write_lock: Mutex::new(()),
        }
    }

    /// Retrieves the path of the page.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render_page(&self, content: &Content) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Repositories</title>
</head>
<body>
<div id="{}">{}</div>
</body>
</html>
"#,
            escape_html(&self.container_id),
            content.to_html()
        )
    }
}

#[async_trait::async_trait]
impl RenderTarget for HtmlFileRenderTarget {
    async fn replace_content(&self, content: Content) -> StdResult<()> {
        let _guard = self.write_lock.lock().await;
        debug!("Writing page {}", self.path.display());

        tokio::fs::write(&self.path, self.render_page(&content))
            .await
            .with_context(|| format!("Failed to write page {}", self.path.display()))
    }
}
