use crate::{
    config::{platform, storage},
    project::problem_url,
};
use std::path::{Path, PathBuf};

/// Where the platform lives and where local state is kept.
#[derive(Debug, Clone)]
pub struct Settings {
    pub origin: String,
    pub root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            origin: platform::ORIGIN.to_string(),
            root: PathBuf::from("."),
        }
    }
}

impl Settings {
    pub fn in_dir<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
    pub fn with_origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origin = origin.into().trim_end_matches('/').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(storage::CATALOG_FILE)
    }
    pub fn cookie_path(&self) -> PathBuf {
        self.root.join(storage::COOKIE_FILE)
    }
    pub fn account_path(&self) -> PathBuf {
        self.root.join(storage::ACCOUNT_FILE)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
    pub fn problem_url(&self, slug: &str) -> String {
        problem_url(&self.origin, slug)
    }
}
