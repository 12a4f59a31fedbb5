//! Read remotes from the git repository in a working directory.

use git2::{ConfigLevel, Repository};
use std::path::Path;
use tracing::debug;

use crate::error::OpenerError;

/// Name of the remote whose URL is opened
pub const ORIGIN: &str = "origin";

/// A configured remote and every `remote.<name>.url` value, in config order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub urls: Vec<String>,
}

/// Open the repository rooted exactly at `path`
///
/// Parent directories are not searched.
pub fn open_repository(path: &Path) -> Result<Repository, OpenerError> {
    Repository::open(path).map_err(|e| OpenerError::NotAGitRepository(e.message().to_string()))
}

/// List all remotes configured in the repository's own config file
pub fn list_remotes(repo: &Repository) -> Result<Vec<Remote>, OpenerError> {
    let unavailable = |e: git2::Error| OpenerError::RemotesUnavailable(e.message().to_string());

    let names = repo.remotes().map_err(unavailable)?;
    let config = repo
        .config()
        .and_then(|c| c.open_level(ConfigLevel::Local))
        .map_err(unavailable)?;

    let mut remotes = Vec::new();
    for name in names.iter().flatten() {
        let mut urls = Vec::new();
        config
            .multivar(&format!("remote.{}.url", name), None)
            .and_then(|entries| {
                entries.for_each(|entry| {
                    if let Some(url) = entry.value() {
                        urls.push(url.to_string());
                    }
                })
            })
            .map_err(unavailable)?;

        remotes.push(Remote {
            name: name.to_string(),
            urls,
        });
    }

    Ok(remotes)
}

/// Pick the first URL of the `origin` remote
pub fn origin_url(remotes: &[Remote]) -> Result<String, OpenerError> {
    remotes
        .iter()
        .find(|r| r.name == ORIGIN)
        .and_then(|r| r.urls.first())
        .cloned()
        .ok_or(OpenerError::OriginRemoteNotFound)
}

/// Open the repository at `path` and return its origin URL
pub fn find_origin_url(path: &Path) -> Result<String, OpenerError> {
    let repo = open_repository(path)?;
    let remotes = list_remotes(&repo)?;
    debug!(count = remotes.len(), "read remotes");
    origin_url(&remotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        (dir, repo)
    }

    #[test]
    fn test_open_repository() {
        let (dir, _repo) = init_repo();
        assert!(open_repository(dir.path()).is_ok());
    }

    #[test]
    fn test_open_plain_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let Err(err) = open_repository(dir.path()) else {
            panic!("plain directory opened as a repository");
        };
        assert!(matches!(err, OpenerError::NotAGitRepository(_)));
        assert!(err.to_string().starts_with("not a git repository: "));
    }

    #[test]
    fn test_find_origin_url() {
        let (dir, repo) = init_repo();
        repo.remote(ORIGIN, "https://example.com/org/repo.git").unwrap();

        assert_eq!(
            find_origin_url(dir.path()).unwrap(),
            "https://example.com/org/repo.git"
        );
    }

    #[test]
    fn test_origin_missing() {
        let (dir, repo) = init_repo();
        repo.remote("upstream", "https://example.com/org/repo.git").unwrap();

        assert_eq!(
            find_origin_url(dir.path()),
            Err(OpenerError::OriginRemoteNotFound)
        );
    }

    #[test]
    fn test_no_remotes() {
        let (dir, _repo) = init_repo();
        assert_eq!(
            find_origin_url(dir.path()),
            Err(OpenerError::OriginRemoteNotFound)
        );
    }

    #[test]
    fn test_list_remotes_collects_every_url() {
        let (_dir, repo) = init_repo();
        repo.remote(ORIGIN, "git@github.com:org/repo.git").unwrap();
        repo.remote("upstream", "https://gitlab.com/org/repo.git").unwrap();
        repo.config()
            .unwrap()
            .open_level(ConfigLevel::Local)
            .unwrap()
            .set_multivar("remote.origin.url", "^$", "https://mirror.example.com/org/repo.git")
            .unwrap();

        let remotes = list_remotes(&repo).unwrap();
        let origin = remotes.iter().find(|r| r.name == ORIGIN).unwrap();
        assert_eq!(
            origin.urls,
            vec![
                "git@github.com:org/repo.git".to_string(),
                "https://mirror.example.com/org/repo.git".to_string(),
            ]
        );
        assert_eq!(origin_url(&remotes).unwrap(), "git@github.com:org/repo.git");
        assert!(remotes.iter().any(|r| r.name == "upstream"));
    }

    #[test]
    fn test_origin_without_urls() {
        let remotes = vec![Remote {
            name: ORIGIN.to_string(),
            urls: Vec::new(),
        }];
        assert_eq!(origin_url(&remotes), Err(OpenerError::OriginRemoteNotFound));
    }
}
