use std::fmt;

/// Why a remote URL could not be turned into a browsable web URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteUrlError {
    /// Structured URL with a scheme other than http, https or ssh
    UnsupportedScheme(String),
    /// `ssh://` URL whose user is not `git`
    UnsupportedSshUser(String),
    /// Neither a structured URL nor `git@host:path` shorthand
    UnsupportedFormat(String),
    /// Shorthand without a colon, or without an owner/repository path
    InvalidSshFormat,
    EmptyRepositoryPath,
}

impl fmt::Display for RemoteUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteUrlError::UnsupportedScheme(scheme) => write!(f, "unsupported scheme: {}", scheme),
            RemoteUrlError::UnsupportedSshUser(user) => {
                write!(f, "unsupported SSH username: {}", user)
            }
            RemoteUrlError::UnsupportedFormat(raw) => write!(f, "unsupported URL format: {}", raw),
            RemoteUrlError::InvalidSshFormat => write!(f, "invalid SSH URL format"),
            RemoteUrlError::EmptyRepositoryPath => write!(f, "empty repository path"),
        }
    }
}

impl std::error::Error for RemoteUrlError {}
