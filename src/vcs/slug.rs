//! Repository slug parsing.
//!
//! Reduces a git remote URL to its `owner/repo` slug. Two remote shapes
//! are recognized:
//!
//! | Shape | Example |
//! |-------|---------|
//! | SSH (scp-like) | `git@github.com:owner/repo.git` |
//! | HTTP(S) | `https://github.com/owner/repo.git` |
//!
//! Anything else, including nested namespaces such as
//! `https://gitlab.com/group/subgroup/repo.git`, is rejected.

use std::fmt;

use crate::error::{CovmetaError, Result};

/// An `owner/repo` identifier with both segments non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug {
    owner: String,
    repo: String,
}

impl Slug {
    /// The owning user or organization.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name, without a `.git` suffix.
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Parse the slug out of a git remote URL.
///
/// # Example
///
/// ```
/// use covmeta::vcs::parse_slug;
///
/// let slug = parse_slug("git@github.com:testOrg/testRepo.git").unwrap();
/// assert_eq!(slug.to_string(), "testOrg/testRepo");
///
/// assert!(parse_slug("notaurl").is_err());
/// ```
pub fn parse_slug(remote_url: &str) -> Result<Slug> {
    let url = remote_url.trim();
    let fail = |reason: &str| CovmetaError::SlugParse {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let path = if let Some((scheme, rest)) = url.split_once("://") {
        http_path(scheme, rest).ok_or_else(|| fail("unrecognized remote URL format"))?
    } else if let Some((host, rest)) = url.split_once(':') {
        if !is_plain_host(host) {
            return Err(fail("unrecognized remote URL format"));
        }
        rest
    } else {
        return Err(fail("unrecognized remote URL format"));
    };

    let path = path.strip_suffix(".git").unwrap_or(path);
    let segments: Vec<&str> = path.split('/').collect();

    match segments.as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(Slug {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }),
        [_, _] => Err(fail("owner and repository must both be non-empty")),
        _ => Err(fail(&format!(
            "expected exactly two path segments, found {}",
            segments.len()
        ))),
    }
}

/// Path portion of an `http(s)://host/path` URL.
fn http_path<'a>(scheme: &str, rest: &'a str) -> Option<&'a str> {
    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return None;
    }
    let (authority, path) = rest.split_once('/')?;
    // userinfo is not accepted on HTTP remotes
    if authority.contains('@') {
        return None;
    }
    let host = match authority.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            host
        }
        Some(_) => return None,
        None => authority,
    };
    is_plain_host(host).then_some(path)
}

/// A host segment, optionally prefixed with an SSH user (`git@host`).
fn is_plain_host(host: &str) -> bool {
    let host = match host.split_once('@') {
        Some((user, host)) if !user.is_empty() && !user.contains(':') => host,
        Some(_) => return false,
        None => host,
    };
    !host.is_empty()
        && !host.contains(['@', '/', ':'])
        && !host.chars().any(char::is_whitespace)
}
