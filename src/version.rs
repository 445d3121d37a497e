//! Build metadata embedded by `build.rs`.

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git state of the tree the binary was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitInfo {
    pub branch: &'static str,
    pub sha: &'static str,
    pub dirty: bool,
}

impl GitInfo {
    /// The metadata captured at build time; `None` when built outside a checkout.
    pub fn embedded() -> Option<Self> {
        Some(Self {
            branch: option_env!("VERGEN_GIT_BRANCH")?,
            sha: option_env!("VERGEN_GIT_SHA")?,
            dirty: option_env!("VERGEN_GIT_DIRTY") == Some("true"),
        })
    }

    /// First seven characters of the commit SHA.
    pub fn short_sha(&self) -> &'static str {
        self.sha.get(..7).unwrap_or(self.sha)
    }
}

/// `{version}+{branch}.{short_sha}`, suffixed `.dirty` for a modified tree.
///
/// Plain `{version}` when no git metadata was embedded.
pub fn version_string() -> String {
    render(PKG_VERSION, GitInfo::embedded())
}

fn render(version: &str, git: Option<GitInfo>) -> String {
    let Some(git) = git else {
        return version.to_string();
    };
    let dirty = if git.dirty { ".dirty" } else { "" };
    format!("{version}+{}.{}{dirty}", git.branch, git.short_sha())
}
