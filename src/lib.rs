pub mod app;
pub mod browser;
pub mod build_info;
pub mod error;
pub mod git;
pub mod logging;
pub mod remote;

pub use error::OpenerError;
