extern crate log;
extern crate serde;
extern crate serde_json;

use crate::{
    error::{Error, Result},
    judge::Session,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

pub mod storage;

/// Bulk problem index as returned by `/api/problems/all/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub stat_status_pairs: Vec<Pair>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub stat: Stat,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Level>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub question_id: u32,
    #[serde(rename = "question__title")]
    pub title: String,
    #[serde(rename = "question__title_slug")]
    pub title_slug: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Accepted,
    Attempted,
    Untouched,
}
impl From<Option<&str>> for Status {
    fn from(status: Option<&str>) -> Self {
        match status {
            Some("ac") => Self::Accepted,
            Some("notac") => Self::Attempted,
            _ => Self::Untouched,
        }
    }
}
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Accepted => "accepted",
            Self::Attempted => "attempted",
            Self::Untouched => "todo",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}
impl Difficulty {
    fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }
}
impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub question_id: u32,
    pub title: String,
    pub title_slug: String,
    pub status: Status,
    pub paid_only: bool,
    pub difficulty: Option<Difficulty>,
}
impl From<&Pair> for CatalogEntry {
    fn from(pair: &Pair) -> Self {
        Self {
            question_id: pair.stat.question_id,
            title: pair.stat.title.clone(),
            title_slug: pair.stat.title_slug.clone(),
            status: Status::from(pair.status.as_deref()),
            paid_only: pair.paid_only.unwrap_or(false),
            difficulty: pair
                .difficulty
                .as_ref()
                .and_then(|d| Difficulty::from_level(d.level)),
        }
    }
}
impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.question_id, self.title)
    }
}

pub struct Catalog {
    path: PathBuf,
    entries: BTreeMap<u32, CatalogEntry>,
}

impl Catalog {
    fn from_index(path: &Path, index: &Index) -> Self {
        let entries: BTreeMap<_, _> = index
            .stat_status_pairs
            .iter()
            .map(|pair| (pair.stat.question_id, CatalogEntry::from(pair)))
            .collect();
        if entries.len() != index.stat_status_pairs.len() {
            warn!("Problem index contains duplicated question ids");
        }
        Self {
            path: path.to_owned(),
            entries,
        }
    }

    /// Reads the local snapshot without touching the network.
    pub fn open(path: &Path) -> Result<Option<Self>> {
        Ok(storage::read(path)?.map(|index| Self::from_index(path, &index)))
    }
    pub async fn load(path: &Path, session: &Session) -> Result<Self> {
        match Self::open(path)? {
            Some(v) => Ok(v),
            None => {
                info!("No catalog snapshot at {}, downloading", path.display());
                Self::refresh(path, session).await.map_err(Error::unavailable)
            }
        }
    }
    /// Downloads the whole index and replaces the snapshot.
    pub async fn refresh(path: &Path, session: &Session) -> Result<Self> {
        let index = session.problem_index().await?;
        storage::write(path, &index)?;
        info!(
            "Saved {} problems to {}",
            index.stat_status_pairs.len(),
            path.display()
        );
        Ok(Self::from_index(path, &index))
    }

    pub fn resolve(&self, id: u32) -> Result<&CatalogEntry> {
        self.entries.get(&id).ok_or(Error::UnknownProblem(id))
    }
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
    pub fn entries(&self) -> &BTreeMap<u32, CatalogEntry> {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}
