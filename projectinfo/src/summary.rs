use crate::api::{Client, Contributor, Repo, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Summary returned to the caller for a single repository.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Default, Clone)]
pub struct ProjectInfo {
    pub project: String,
    pub owner: String,
    pub committer: String,
    pub commits: u32,
    pub language: BTreeSet<String>,
}

impl ProjectInfo {
    /// Builds the summary. `committer` and `commits` are either both taken from
    /// `top_contributor` or both left empty.
    pub fn new(repo: &Repo, languages: Vec<String>, top_contributor: Option<&Contributor>) -> Self {
        let (committer, commits) = top_contributor
            .map(|contributor| (contributor.name.clone(), contributor.contributions))
            .unwrap_or_default();
        ProjectInfo {
            project: repo.name.clone(),
            owner: repo.owner.clone(),
            committer,
            commits,
            language: languages.into_iter().collect(),
        }
    }
}

pub struct ProjectInfoService<CLIENT: Client> {
    client: CLIENT,
}

impl<CLIENT: Client> ProjectInfoService<CLIENT> {
    pub fn new(client: CLIENT) -> Self {
        ProjectInfoService { client }
    }

    /// Queries languages, then contributors of `repo` and merges them.
    ///
    /// The first failing query aborts the summary. Contributors arrive sorted by
    /// contributions in desc order, so the first one is the top committer.
    pub async fn project_info(&self, repo: &Repo) -> Result<ProjectInfo> {
        let languages = self.client.languages(repo).await?;
        debug!("Found {} languages in {}", languages.len(), repo);

        let contributors = self.client.contributors(repo).await?;
        debug!("Found {} contributors in {}", contributors.len(), repo);

        Ok(ProjectInfo::new(repo, languages, contributors.first()))
    }
}
