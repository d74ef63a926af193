//! Project metadata: where the project lives and what it is called.
//!
//! The bootstrap flow only needs the application name (to suggest a GitHub
//! repository) and the root directory (to run git in).

mod internal;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use internal::slug;

/// Metadata provider for the project being bootstrapped.
pub trait Project {
    /// Human-readable application name, e.g. `My Cool App`.
    fn app_name(&self) -> String;

    /// Directory every git command runs in.
    fn root(&self) -> &Path;
}

/// A project on disk, named explicitly or after its directory.
#[derive(Debug, Clone)]
pub struct ProjectDir {
    root: PathBuf,
    name: Option<String>,
}

impl ProjectDir {
    /// Resolve `root` to an absolute directory.
    ///
    /// `name` wins over the directory name when given and non-blank.
    pub fn open(root: &Path, name: Option<String>) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Project directory not found: {}", root.display()))?;

        if !root.is_dir() {
            anyhow::bail!("Not a directory: {}", root.display());
        }

        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self { root, name })
    }
}

impl Project for ProjectDir {
    fn app_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }

        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn root(&self) -> &Path {
        &self.root
    }
}
