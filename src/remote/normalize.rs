use std::fmt;
use tracing::debug;
use url::Url;

use super::RemoteUrlError;

const SHORTHAND_SSH_PREFIX: &str = "git@";
const SSH_USER: &str = "git";
const GIT_SUFFIX: &str = ".git";
const GITHUB_MARKER: &str = "github";
const GITHUB_HOST: &str = "github.com";

/// A browsable `https://<host>/<path>` URL with no trailing slash and no `.git` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebUrl(String);

impl WebUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WebUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WebUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Convert a git remote URL into the repository's web page URL
///
/// Accepts `http://`, `https://` and `ssh://` URLs as well as the
/// `git@host:owner/repo` shorthand. The result always uses https.
///
/// # Errors
/// Returns the [`RemoteUrlError`] describing why the remote is not browsable.
pub fn normalize(raw: &str) -> Result<WebUrl, RemoteUrlError> {
    // `git@host:path` has no scheme: '@' is not a valid scheme character
    if let Some((scheme, rest)) = split_scheme(raw) {
        return normalize_structured(raw, &scheme.to_ascii_lowercase(), rest);
    }

    if raw.starts_with(SHORTHAND_SSH_PREFIX) {
        return normalize_shorthand_ssh(raw);
    }

    Err(RemoteUrlError::UnsupportedFormat(raw.to_string()))
}

/// Split `scheme:rest`, where the scheme is a letter followed by
/// letters, digits, `+`, `-` or `.`
fn split_scheme(raw: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = raw.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}

/// Host and path are sliced verbatim from the raw text; `Url` only
/// validates a non-empty authority.
fn normalize_structured(raw: &str, scheme: &str, rest: &str) -> Result<WebUrl, RemoteUrlError> {
    let (authority, tail) = match rest.strip_prefix("//") {
        Some(after) => after.split_at(after.find(['/', '?', '#']).unwrap_or(after.len())),
        None => ("", rest),
    };

    if !authority.is_empty() && Url::parse(raw).is_err() {
        return Err(RemoteUrlError::UnsupportedFormat(raw.to_string()));
    }

    let (user, host) = match authority.rsplit_once('@') {
        Some((userinfo, host)) => {
            let user = userinfo.split_once(':').map_or(userinfo, |(user, _)| user);
            (Some(user), host)
        }
        None => (None, authority),
    };

    match scheme {
        "http" | "https" => {}
        "ssh" => {
            if let Some(user) = user.filter(|u| *u != SSH_USER) {
                return Err(RemoteUrlError::UnsupportedSshUser(user.to_string()));
            }
        }
        other => return Err(RemoteUrlError::UnsupportedScheme(other.to_string())),
    }

    // Opaque forms like `https:org/repo` carry no path
    let path = tail.split(['?', '#']).next().unwrap_or_default();
    if !path.starts_with('/') {
        return Err(RemoteUrlError::EmptyRepositoryPath);
    }

    debug!(scheme, host, path, "structured remote URL");
    build_web_url(host, path)
}

fn normalize_shorthand_ssh(raw: &str) -> Result<WebUrl, RemoteUrlError> {
    let (host_part, path_part) = raw
        .split_once(':')
        .ok_or(RemoteUrlError::InvalidSshFormat)?;

    let host = host_part
        .strip_prefix(SHORTHAND_SSH_PREFIX)
        .unwrap_or(host_part);
    let path = path_part.trim_matches('/');

    if path.is_empty() {
        return Err(RemoteUrlError::EmptyRepositoryPath);
    }

    // Require owner/repository
    if path.split('/').count() < 2 {
        return Err(RemoteUrlError::InvalidSshFormat);
    }

    debug!(host, path, "shorthand SSH remote URL");
    build_web_url(host, path)
}

/// Assemble the https web URL for a repository path on a host
///
/// Strips one trailing `.git` and any surrounding slashes from `path`.
/// Any host containing `github` is rewritten to `github.com`.
pub fn build_web_url(host: &str, path: &str) -> Result<WebUrl, RemoteUrlError> {
    let clean_path = path
        .strip_suffix(GIT_SUFFIX)
        .unwrap_or(path)
        .trim_matches('/');
    if clean_path.is_empty() {
        return Err(RemoteUrlError::EmptyRepositoryPath);
    }

    let host = if host.contains(GITHUB_MARKER) {
        GITHUB_HOST
    } else {
        host
    };

    Ok(WebUrl(format!("https://{}/{}", host, clean_path)))
}
