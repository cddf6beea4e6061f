//! Download URL construction for files hosted in a GitHub repository.

/// Raw content host.
pub const RAW_HOST: &str = "https://raw.githubusercontent.com";

/// Placeholder account; replace with the repository owner before deploying.
pub const DEFAULT_USERNAME: &str = "your-username";

pub const DEFAULT_REPO: &str = "file-sharing-website";

pub const DEFAULT_BRANCH: &str = "main";

/// `{host}/{username}/{repo}/{branch}/{path}` template.
///
/// Plain concatenation: the path is neither escaped nor checked against the
/// remote repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawUrlTemplate {
    pub host: String,
    pub username: String,
    pub repo: String,
    pub branch: String,
}

impl RawUrlTemplate {
    pub fn new(
        username: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            host: RAW_HOST.to_string(),
            username: username.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    /// Full URL for a repository-relative path.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.host, self.username, self.repo, self.branch, path
        )
    }
}

impl Default for RawUrlTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_REPO, DEFAULT_BRANCH)
    }
}
