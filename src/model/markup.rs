use std::fmt::Display;

use anyhow::anyhow;

use super::{Repository, StdResult};

/// The message shown in a target while the repositories are being fetched.
pub const LOADING_MESSAGE: &str = "Querying GitHub for repositories...";

/// The state of a render target owned by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// The loading indicator is shown, the repositories have not been rendered yet.
    Loading,

    /// The list container has replaced the loading indicator.
    Rendered,
}

/// The content of a render target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// A loading indicator carrying a message.
    Loading(String),

    /// A definition list container and the items appended to it.
    List(Vec<ListItem>),
}

impl Content {
    /// Creates the loading indicator content.
    pub fn loading() -> Self {
        Self::Loading(LOADING_MESSAGE.to_string())
    }

    /// Creates an empty list container.
    pub fn empty_list() -> Self {
        Self::List(vec![])
    }

    /// Returns the widget state this content corresponds to.
    pub fn state(&self) -> WidgetState {
        match self {
            Self::Loading(_) => WidgetState::Loading,
            Self::List(_) => WidgetState::Rendered,
        }
    }

    /// Appends an item to the list container.
    ///
    /// Fails if the content is not a list container.
    pub fn push_item(&mut self, item: ListItem) -> StdResult<()> {
        match self {
            Self::List(items) => {
                items.push(item);

                Ok(())
            }
            Self::Loading(_) => Err(anyhow!(
                "Can not append '{item}' to a target without a list container"
            )),
        }
    }

    /// Serializes the content to HTML markup.
    pub fn to_html(&self) -> String {
        match self {
            Self::Loading(message) => format!("<span>{}</span>", escape_html(message)),
            Self::List(items) => {
                let items = items.iter().map(ListItem::to_html).collect::<String>();

                format!("<dl>{items}</dl>")
            }
        }
    }
}

impl Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_html())
    }
}

/// An item of a definition list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    /// A term holding a link.
    Term {
        /// The text of the link.
        text: String,
        /// The target of the link.
        href: String,
    },

    /// A description following a term.
    Description {
        /// The text of the description.
        text: String,
    },
}

impl ListItem {
    /// Creates the term linking to a repository page.
    pub fn term(repository: &Repository) -> Self {
        Self::Term {
            text: repository.name().to_string(),
            href: repository.html_url().to_string(),
        }
    }

    /// Creates the description of a repository.
    pub fn description(repository: &Repository) -> Self {
        Self::Description {
            text: repository.description().to_string(),
        }
    }

    /// Serializes the item to HTML markup.
    pub fn to_html(&self) -> String {
        match self {
            Self::Term { text, href } => format!(
                "<dt><a href=\"{}\">{}</a></dt>",
                escape_html(href),
                escape_html(text)
            ),
            Self::Description { text } => format!("<dd>{}</dd>", escape_html(text)),
        }
    }
}

impl Display for ListItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_html())
    }
}

/// Escapes the characters that have a meaning in HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_content_to_html() {
        assert_eq!(
            "<span>Querying GitHub for repositories...</span>",
            Content::loading().to_html()
        );
    }

    #[test]
    fn empty_list_to_html() {
        assert_eq!("<dl></dl>", Content::empty_list().to_html());
    }

    #[test]
    fn list_to_html() {
        let repository = Repository::new(
            "Hello-World",
            "My first repository",
            "https://github.com/octocat/Hello-World",
            false,
            80,
        );
        let mut content = Content::empty_list();
        content.push_item(ListItem::term(&repository)).unwrap();
        content.push_item(ListItem::description(&repository)).unwrap();

        assert_eq!(
            "<dl><dt><a href=\"https://github.com/octocat/Hello-World\">Hello-World</a></dt><dd>My first repository</dd></dl>",
            content.to_html()
        );
    }

    #[test]
    fn push_item_on_loading_content_fails() {
        let mut content = Content::loading();

        content
            .push_item(ListItem::Description {
                text: "orphan".to_string(),
            })
            .expect_err("Expected an error without list container");
        assert_eq!(Content::loading(), content);
    }

    #[test]
    fn state_of_content() {
        assert_eq!(WidgetState::Loading, Content::loading().state());
        assert_eq!(WidgetState::Rendered, Content::empty_list().state());
    }

    #[test]
    fn items_are_escaped() {
        let repository = Repository::new(
            "<script>",
            "Tom & \"Jerry\"",
            "https://example.com/?a=1&b='2'",
            false,
            0,
        );

        assert_eq!(
            "<dt><a href=\"https://example.com/?a=1&amp;b=&#39;2&#39;\">&lt;script&gt;</a></dt>",
            ListItem::term(&repository).to_html()
        );
        assert_eq!(
            "<dd>Tom &amp; &quot;Jerry&quot;</dd>",
            ListItem::description(&repository).to_html()
        );
    }
}
