use serde::Deserialize;

use super::{Repository, sort_by_watchers};

/// A response containing the public repositories of a user, in the order returned by the API.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Response {
    /// Retrieved repositories
    pub(crate) repositories: Vec<Repository>,
}

impl Response {
    /// Creates a new `Response` instance with the given repositories.
    pub fn new(repositories: Vec<Repository>) -> Self {
        Self { repositories }
    }

    /// Retrieves the list of repositories.
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Consumes the response and returns its repositories, most watched first.
    pub fn into_sorted_repositories(self) -> Vec<Repository> {
        let mut repositories = self.repositories;
        sort_by_watchers(&mut repositories);

        repositories
    }
}
