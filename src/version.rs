//! Build identity: package version plus the git checkout it came from.

use std::fmt;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git branch at build time, or "unknown" outside a checkout.
pub const GIT_BRANCH: &str = match option_env!("VERGEN_GIT_BRANCH") {
    Some(branch) => branch,
    None => "unknown",
};

/// Git commit SHA at build time, or "unknown" outside a checkout.
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// Where a build came from.
///
/// Displays as `{version}+{branch}.{sha7}`, with `.dirty` appended for
/// builds from a modified tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub branch: &'static str,
    pub sha: &'static str,
    pub dirty: bool,
}

impl BuildInfo {
    /// The running build.
    pub fn current() -> Self {
        Self {
            version: PKG_VERSION,
            branch: GIT_BRANCH,
            sha: GIT_SHA,
            dirty: option_env!("VERGEN_GIT_DIRTY") == Some("true"),
        }
    }

    pub fn short_sha(&self) -> &'static str {
        self.sha.get(..7).unwrap_or(self.sha)
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}.{}", self.version, self.branch, self.short_sha())?;
        if self.dirty {
            f.write_str(".dirty")?;
        }
        Ok(())
    }
}

/// Version shown by `predictform --version` and in the startup log.
pub fn version_string() -> String {
    BuildInfo::current().to_string()
}

/// `User-Agent` sent with every prediction request.
pub fn user_agent() -> String {
    format!("predictform/{}", BuildInfo::current())
}
