use crate::error::OpenerError;

/// Something that can show a URL to the user
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> Result<(), OpenerError>;
}

/// The operating system's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), OpenerError> {
        open_url(url)
    }
}

/// Open a URL in the user's default browser
///
/// # Arguments
/// * `url` - The URL to open (e.g., a repository's GitHub page)
///
/// # Errors
/// Returns `BrowserLaunchFailed` if no browser could be started
pub fn open_url(url: &str) -> Result<(), OpenerError> {
    webbrowser::open(url).map_err(|e| OpenerError::BrowserLaunchFailed(e.to_string()))
}
