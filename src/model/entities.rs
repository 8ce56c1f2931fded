use std::{fmt::Display, ops::Deref};

use serde::{Deserialize, Deserializer};

/// The name of a repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of watchers a repository has.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct WatchersCounter(pub u32);

impl Deref for WatchersCounter {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for WatchersCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A public GitHub repository as returned by the `users/{username}/repos` endpoint.
///
/// Only the fields needed to render the list are kept, the rest of the payload is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The name of the repository.
    name: RepositoryName,

    /// The description of the repository, empty when the owner did not set one.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    description: String,

    /// The URL of the repository page.
    html_url: String,

    /// Whether the repository is a fork of another one.
    #[serde(default)]
    fork: bool,

    /// The number of watchers of the repository.
    #[serde(default)]
    watchers: WatchersCounter,
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(name: &str, description: &str, html_url: &str, fork: bool, watchers: u32) -> Self {
        Self {
            name: RepositoryName(name.to_string()),
            description: description.to_string(),
            html_url: html_url.to_string(),
            fork,
            watchers: WatchersCounter(watchers),
        }
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the repository description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Retrieves the URL of the repository page.
    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    /// Returns `true` if the repository is a fork.
    pub fn is_fork(&self) -> bool {
        self.fork
    }

    /// Retrieves the number of watchers of the repository.
    pub fn watchers(&self) -> &WatchersCounter {
        &self.watchers
    }

    /// Creates a dummy `Repository` with the given name and watchers for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(name: &str, watchers: u32, fork: bool) -> Self {
        Self::new(
            name,
            &format!("{name} description"),
            &format!("https://github.com/octocat/{name}"),
            fork,
            watchers,
        )
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Watchers: {}, Fork: {}",
            self.name, self.watchers, self.fork
        )
    }
}

/// Sorts repositories by number of watchers, most watched first.
///
/// The sort is stable: repositories with the same number of watchers keep their relative order.
pub fn sort_by_watchers(repositories: &mut [Repository]) {
    repositories.sort_by(|a, b| b.watchers.cmp(&a.watchers));
}
