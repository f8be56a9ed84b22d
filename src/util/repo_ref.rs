//! Repository reference parsing for detail-page links.

#[cfg(test)]
#[path = "repo_ref_test.rs"]
mod repo_ref_test;

/// Parsed `owner/name` repository field, optionally `#ref` suffixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    /// Everything after the first slash; registry values are plain names
    /// but monorepo paths survive verbatim.
    pub repo: String,
    /// Branch or tag after `#`, when present.
    pub reference: Option<String>,
}

impl RepoRef {
    /// Parse a repo field. `None` when the owner or name half is missing,
    /// in which case the page simply renders no repository link.
    pub fn parse(raw: &str) -> Option<Self> {
        let (path, reference) = match raw.split_once('#') {
            Some((path, reference)) if !reference.is_empty() => (path, Some(reference)),
            Some((path, _)) => (path, None),
            None => (raw, None),
        };
        let (owner, repo) = path.split_once('/')?;
        if owner.is_empty() || repo.is_empty() {
            return None;
        }
        Some(Self {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
            reference: reference.map(ToOwned::to_owned),
        })
    }

    /// Browse URL for the repository, without the ref.
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }

    /// `owner/name` label shown on the detail page.
    pub fn label(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
