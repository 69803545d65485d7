//! Git publishing module
//!
//! Reads the committed catalog at HEAD (the merge baseline) and commits and
//! pushes the refreshed catalog after a run.
use chrono::Local;
use git2::{Cred, CredentialType, PushOptions, RemoteCallbacks, Repository, Signature};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::GitPublish;
use crate::error::{Result, ToolscoutError};

/// Result of a commit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The data file is not inside a git work tree
    NotARepository,
    /// The data file matches HEAD
    NoChanges,
    Committed { hash: String, pushed: bool },
}

/// Commit message for a catalog refresh
pub fn commit_message() -> String {
    format!(
        "Update AI tools database - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Open the repository containing `path`, if any
fn discover(path: &Path) -> Option<Repository> {
    let start = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    // Walk up to the nearest existing directory
    let mut dir = start.to_path_buf();
    while !dir.exists() {
        if !dir.pop() {
            dir = PathBuf::from(".");
            break;
        }
    }

    Repository::discover(&dir).ok()
}

/// Path of `file` relative to the repository work dir
fn relative_path(repo: &Repository, file: &Path) -> Result<PathBuf> {
    let workdir = repo
        .workdir()
        .ok_or_else(|| ToolscoutError::Alert("Repository has no work tree".to_string()))?;
    let workdir = fs::canonicalize(workdir)?;

    let absolute = if file.exists() {
        fs::canonicalize(file)?
    } else {
        let parent = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = file.file_name().ok_or_else(|| {
            ToolscoutError::Alert(format!("Not a file path: {}", file.display()))
        })?;
        fs::canonicalize(parent)?.join(name)
    };

    absolute
        .strip_prefix(&workdir)
        .map(Path::to_path_buf)
        .map_err(|_| {
            ToolscoutError::Alert(format!(
                "'{}' is outside the repository at '{}'",
                absolute.display(),
                workdir.display()
            ))
        })
}

/// Contents of `file` as committed at HEAD.
///
/// `None` when there is no repository, no commit yet, or the file is not
/// tracked at HEAD.
pub fn read_head_file(file: &Path) -> Result<Option<String>> {
    let Some(repo) = discover(file) else {
        debug!(path = %file.display(), "No git repository for baseline");
        return Ok(None);
    };

    let relative = relative_path(&repo, file)?;

    let tree = match repo.head().and_then(|h| h.peel_to_tree()) {
        Ok(tree) => tree,
        Err(e) => {
            debug!(error = %e, "Repository has no HEAD tree");
            return Ok(None);
        }
    };

    let entry = match tree.get_path(&relative) {
        Ok(entry) => entry,
        Err(_) => return Ok(None),
    };

    let blob = entry.to_object(&repo)?.peel_to_blob()?;
    let content = String::from_utf8_lossy(blob.content()).into_owned();
    Ok(Some(content))
}

/// Commit `file` when it differs from HEAD, then optionally push
pub fn commit_file(file: &Path, config: &GitPublish) -> Result<CommitOutcome> {
    let Some(repo) = discover(file) else {
        return Ok(CommitOutcome::NotARepository);
    };

    let relative = relative_path(&repo, file)?;

    let status = repo.status_file(&relative)?;
    if status.is_empty() || status.is_ignored() {
        return Ok(CommitOutcome::NoChanges);
    }

    let mut index = repo.index()?;
    index.add_path(&relative)?;
    index.write()?;
    let tree = repo.find_tree(index.write_tree()?)?;

    let signature = signature(&repo, config)?;
    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(_) => None,
    };
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let oid = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        &commit_message(),
        &tree,
        &parents,
    )?;
    let hash = format!("{:.7}", oid);
    info!(commit = %hash, path = %relative.display(), "Committed catalog");

    let pushed = if config.push {
        match push(&repo, config) {
            Ok(pushed) => pushed,
            Err(e) => {
                warn!(error = %e, "Git push failed");
                false
            }
        }
    } else {
        false
    };

    Ok(CommitOutcome::Committed { hash, pushed })
}

/// Commit author: CI actor, then repository config, then a fixed identity
fn signature(repo: &Repository, config: &GitPublish) -> Result<Signature<'static>> {
    if let Some(actor) = config.actor() {
        let email = format!("{}@users.noreply.github.com", actor);
        return Ok(Signature::now(&actor, &email)?);
    }

    match repo.signature() {
        Ok(sig) => Ok(sig.to_owned()),
        Err(_) => Ok(Signature::now("toolscout", "toolscout@localhost")?),
    }
}

/// Push the current branch; `false` when the remote is not configured
fn push(repo: &Repository, config: &GitPublish) -> Result<bool> {
    let mut remote = match repo.find_remote(&config.remote) {
        Ok(remote) => remote,
        Err(_) => {
            info!(remote = %config.remote, "No such remote, skipping push");
            return Ok(false);
        }
    };

    let head = repo.head()?;
    let branch = head
        .shorthand()
        .ok_or_else(|| ToolscoutError::Alert("HEAD is not a named branch".to_string()))?;
    let refspec = format!("refs/heads/{0}:refs/heads/{0}", branch);

    let token = config.token();
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(move |_url, username, allowed| {
        if let Some(token) = &token {
            Cred::userpass_plaintext("x-access-token", token)
        } else if allowed.contains(CredentialType::SSH_KEY) {
            Cred::ssh_key_from_agent(username.unwrap_or("git"))
        } else {
            Cred::default()
        }
    });

    let mut options = PushOptions::new();
    options.remote_callbacks(callbacks);
    remote.push(&[refspec.as_str()], Some(&mut options))?;

    info!(remote = %config.remote, branch, "Pushed catalog");
    Ok(true)
}
