//! Version and build metadata, fixed at compile time.
//!
//! Release builds set `REPO_OPENER_COMMIT`, `REPO_OPENER_DATE` and
//! `REPO_OPENER_BUILT_BY` in the build environment.

/// Immutable description of the running binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
    pub built_by: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: or_default(option_env!("REPO_OPENER_COMMIT"), "none"),
            date: or_default(option_env!("REPO_OPENER_DATE"), "unknown"),
            built_by: or_default(option_env!("REPO_OPENER_BUILT_BY"), "unknown"),
        }
    }

    /// Two-line text printed by `--version`
    pub fn render(&self) -> String {
        format!(
            "Version: {}\nBuild info: commit {}, built at {}, by {}",
            self.version, self.commit, self.date, self.built_by
        )
    }
}

const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}
