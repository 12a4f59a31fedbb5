use std::path::Path;
use tracing::debug;

use crate::browser::BrowserLauncher;
use crate::error::OpenerError;
use crate::git;
use crate::remote::{self, WebUrl};

/// Resolve the web URL of the repository at `dir` without opening it
pub fn resolve_web_url(dir: &Path) -> Result<WebUrl, OpenerError> {
    debug!(path = %dir.display(), "opening repository");
    let remote_url = git::find_origin_url(dir)?;
    debug!(remote_url = %remote_url, "found origin remote");

    let web_url = remote::normalize(&remote_url)?;
    debug!(web_url = %web_url, "normalized remote URL");
    Ok(web_url)
}

/// Open the repository at `dir` in the browser and return the URL shown
pub fn run(dir: &Path, launcher: &dyn BrowserLauncher) -> Result<WebUrl, OpenerError> {
    let web_url = resolve_web_url(dir)?;
    launcher.open(web_url.as_str())?;
    Ok(web_url)
}
