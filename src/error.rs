use std::fmt;

use crate::remote::RemoteUrlError;

/// Every way opening the repository page can fail. All of them are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenerError {
    NotAGitRepository(String),
    /// Remotes exist in the repository but could not be read from its config
    RemotesUnavailable(String),
    OriginRemoteNotFound,
    RemoteUrl(RemoteUrlError),
    BrowserLaunchFailed(String),
}

impl fmt::Display for OpenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenerError::NotAGitRepository(msg) => write!(f, "not a git repository: {}", msg),
            OpenerError::RemotesUnavailable(msg) => write!(f, "failed to get remotes: {}", msg),
            OpenerError::OriginRemoteNotFound => write!(f, "origin remote not found"),
            OpenerError::RemoteUrl(e) => write!(f, "{}", e),
            OpenerError::BrowserLaunchFailed(msg) => write!(f, "failed to open browser: {}", msg),
        }
    }
}

impl std::error::Error for OpenerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OpenerError::RemoteUrl(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RemoteUrlError> for OpenerError {
    fn from(e: RemoteUrlError) -> Self {
        OpenerError::RemoteUrl(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_url_error_shown_verbatim() {
        let err = OpenerError::from(RemoteUrlError::UnsupportedScheme("ftp".to_string()));
        assert_eq!(err.to_string(), "unsupported scheme: ftp");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            OpenerError::OriginRemoteNotFound.to_string(),
            "origin remote not found"
        );
        assert_eq!(
            OpenerError::NotAGitRepository("could not find repository at '.'".to_string())
                .to_string(),
            "not a git repository: could not find repository at '.'"
        );
        assert_eq!(
            OpenerError::BrowserLaunchFailed("no browser".to_string()).to_string(),
            "failed to open browser: no browser"
        );
    }
}
