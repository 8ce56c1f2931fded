use std::fmt::Display;

use super::RequestError;

/// A request for the public repositories of a GitHub user
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct RepositoriesRequest {
    /// The login of the user.
    pub(crate) username: String,
}

impl RepositoriesRequest {
    /// Creates a new `RepositoriesRequest` for the given non-empty username.
    pub fn try_new(username: &str) -> Result<Self, RequestError> {
        if username.is_empty() {
            return Err(RequestError::EmptyUsername);
        }

        Ok(Self {
            username: username.to_string(),
        })
    }

    /// Retrieves the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the API path of the request, relative to the API endpoint.
    ///
    /// The username is percent-encoded, so it always stays a single path segment.
    pub fn path(&self) -> String {
        format!("users/{}/repos", urlencoding::encode(&self.username))
    }

    /// Creates a dummy `RepositoriesRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self {
            username: "octocat".to_string(),
        }
    }
}

impl Display for RepositoriesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RepositoriesRequest: username={}", self.username)
    }
}
