use async_trait::async_trait;
use derive_more::{Constructor, Display};
use thiserror::Error;

/// Upstream endpoint a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Resource {
    #[strum(serialize = "language")]
    Languages,
    #[strum(serialize = "contributors")]
    Contributors,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not reach {resource} of repo")]
    Unreachable {
        resource: Resource,
        #[source]
        source: anyhow::Error,
    },
    #[error("Error parsing the expected {resource} JSON body: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: anyhow::Error,
    },
    #[error("Error: {0}")]
    Error(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn unreachable(resource: Resource, source: impl Into<anyhow::Error>) -> Self {
        Error::Unreachable {
            resource,
            source: source.into(),
        }
    }

    pub fn decode(resource: Resource, source: impl Into<anyhow::Error>) -> Self {
        Error::Decode {
            resource,
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Constructor, Display)]
#[display(fmt = "{}/{}", owner, name)]
pub struct Repo {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
    pub contributions: u32,
}

impl Contributor {
    pub fn new(name: impl Into<String>, contributions: u32) -> Self {
        Contributor {
            name: name.into(),
            contributions,
        }
    }
}

#[async_trait]
pub trait Client: Send + Sync {
    /// Names of the languages detected in `repo`. Order is not meaningful.
    async fn languages(&self, repo: &Repo) -> Result<Vec<String>>;

    /// Contributors of `repo` sorted by contributions in desc order.
    /// A repository without contribution history yields an empty list.
    async fn contributors(&self, repo: &Repo) -> Result<Vec<Contributor>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_resource() {
        let err = Error::unreachable(Resource::Languages, anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "Could not reach language of repo");

        let err = Error::decode(Resource::Contributors, anyhow::anyhow!("expected value at line 1 column 1"));
        assert_eq!(
            err.to_string(),
            "Error parsing the expected contributors JSON body: expected value at line 1 column 1"
        );
    }

    #[test]
    fn repo_display() {
        let repo = Repo::new("golang".to_string(), "go".to_string());
        assert_eq!(repo.to_string(), "golang/go");
    }
}
