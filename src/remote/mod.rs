mod error;
mod normalize;

pub use error::RemoteUrlError;
pub use normalize::{build_web_url, normalize, WebUrl};
