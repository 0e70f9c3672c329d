// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{CplError, GitError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CplError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CplError::Git(GitError::NotARepository)
            } else {
                CplError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CplError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            CplError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get commits reachable from `to` but not from `from`, newest first.
    pub fn get_commits_in_range(&self, from: Option<&str>, to: &str) -> Result<Vec<(Oid, String)>> {
        let revwalk_err = |command: &str, e: git2::Error| {
            CplError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let mut revwalk = self
            .inner
            .revwalk()
            .map_err(|e| revwalk_err("revwalk", e))?;

        let to = self.get_commit(to)?;
        revwalk
            .push(to.id())
            .map_err(|e| revwalk_err("revwalk.push", e))?;

        if let Some(from) = from {
            let from = self.get_commit(from)?;
            revwalk
                .hide(from.id())
                .map_err(|e| revwalk_err("revwalk.hide", e))?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| revwalk_err("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                CplError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            let message = commit.message().unwrap_or("").to_string();
            commits.push((oid, message));
        }

        Ok(commits)
    }
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Get commits in a range of the current repository.
pub fn get_commit_range(from: Option<&str>, to: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    let commits = repo.get_commits_in_range(from, to)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn commit(repo: &Git2Repo, message: &str) -> Oid {
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.treebuilder(None).unwrap().write().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn create_test_repo(messages: &[&str]) -> (TempDir, Vec<Oid>) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let oids = messages.iter().map(|m| commit(&repo, m)).collect();
        (dir, oids)
    }

    #[test]
    fn test_open_repo() {
        let (dir, _) = create_test_repo(&["chore: init"]);
        let repo = Repository::open(dir.path()).unwrap();
        assert!(repo.git_dir().ends_with(".git"));
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(CplError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_get_commit() {
        let (dir, oids) = create_test_repo(&["chore: init", "feat(api): add endpoint"]);
        let repo = Repository::open(dir.path()).unwrap();

        let commit = repo.get_commit("HEAD").unwrap();
        assert_eq!(commit.id(), oids[1]);
        assert_eq!(commit.message(), Some("feat(api): add endpoint"));
    }

    #[test]
    fn test_bare_repository() {
        let dir = TempDir::new().unwrap();
        let bare = Git2Repo::init_bare(dir.path()).unwrap();
        commit(&bare, "chore: init");
        commit(&bare, "fix: bare");

        let repo = Repository::open(dir.path()).unwrap();
        let commits = repo.get_commits_in_range(None, "HEAD").unwrap();
        assert_eq!(commits.len(), 2);
    }

    #[test]
    fn test_commits_in_range() {
        let (dir, oids) = create_test_repo(&["chore: init", "feat: one", "fix: two"]);
        let repo = Repository::open(dir.path()).unwrap();

        let from = oids[0].to_string();
        let commits = repo.get_commits_in_range(Some(&from), "HEAD").unwrap();
        let messages: Vec<&str> = commits.iter().map(|(_, m)| m.as_str()).collect();
        assert_eq!(messages.len(), 2);
        assert!(messages.contains(&"feat: one"));
        assert!(messages.contains(&"fix: two"));

        let all = repo.get_commits_in_range(None, "HEAD").unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_invalid_reference() {
        let (dir, _) = create_test_repo(&["chore: init"]);
        let repo = Repository::open(dir.path()).unwrap();
        assert!(matches!(
            repo.get_commit("does-not-exist"),
            Err(CplError::Git(GitError::InvalidReference { .. }))
        ));
    }
}
