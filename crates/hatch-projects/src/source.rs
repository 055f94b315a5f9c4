//! Template source references
//!
//! A reference names a git repository and optionally a branch:
//!
//! | reference                            | clone URL                                  |
//! |--------------------------------------|--------------------------------------------|
//! | `direct:https://host/repo.git#dev`   | `https://host/repo.git`, branch `dev`      |
//! | `github:owner/repo`                  | `https://github.com/owner/repo.git`        |
//! | `gitlab:owner/repo#next`             | `https://gitlab.com/owner/repo.git`        |
//! | `bitbucket:owner/repo`               | `https://bitbucket.org/owner/repo.git`     |
//! | `owner/repo`                         | `https://github.com/owner/repo.git`        |

use crate::error::{Error, Result};

/// A resolved template source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// URL handed to `git clone`
    pub url: String,
    /// Branch named in the reference, if any
    pub branch: Option<String>,
}

impl TemplateSource {
    /// Parse a source reference
    pub fn parse(reference: &str) -> Result<Self> {
        let reference = reference.trim();

        let (location, branch) = match reference.rsplit_once('#') {
            Some((_, "")) => return Err(Error::invalid_template_source(reference)),
            Some((location, branch)) => (location, Some(branch.to_string())),
            None => (reference, None),
        };

        let url = if let Some(url) = location.strip_prefix("direct:") {
            if url.is_empty() {
                return Err(Error::invalid_template_source(reference));
            }
            url.to_string()
        } else if let Some(path) = location.strip_prefix("github:") {
            hosted_url("github.com", path, reference)?
        } else if let Some(path) = location.strip_prefix("gitlab:") {
            hosted_url("gitlab.com", path, reference)?
        } else if let Some(path) = location.strip_prefix("bitbucket:") {
            hosted_url("bitbucket.org", path, reference)?
        } else {
            hosted_url("github.com", location, reference)?
        };

        Ok(Self { url, branch })
    }
}

impl std::str::FromStr for TemplateSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Build an https clone URL from an `owner/repo` path on a known host
fn hosted_url(host: &str, path: &str, reference: &str) -> Result<String> {
    let mut segments = path.split('/');
    let owner = segments.next().unwrap_or_default();
    let repo = segments.next().unwrap_or_default();
    let repo = repo.trim_end_matches(".git");

    let is_segment = |s: &str| {
        !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };

    if segments.next().is_some() || !is_segment(owner) || !is_segment(repo) {
        return Err(Error::invalid_template_source(reference));
    }

    Ok(format!("https://{}/{}/{}.git", host, owner, repo))
}
