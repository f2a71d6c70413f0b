extern crate reqwest;
extern crate thiserror;

use std::{io, path::PathBuf, result::Result as StdResult};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Handshake failed: no {0} cookie after visiting the platform")]
    HandshakeFailed(&'static str),
    #[error("Unknown language {0:?}")]
    UnknownLanguage(String),
    #[error("Problem id {0} not exists")]
    UnknownProblem(u32),
    #[error("Invalid project input: {0}")]
    InvalidProjectInput(&'static str),
    #[error("Problem catalog unavailable: {0}")]
    CatalogUnavailable(#[source] Box<Error>),
    #[error("Can't find code template in playground page")]
    TemplateExtractionFailed,
    #[error("Submission rejected ({status}): {detail}")]
    SubmitRejected {
        status: reqwest::StatusCode,
        detail: String,
    },
    #[error("Directory slug {found:?} doesn't match problem {id} ({expect:?})")]
    SlugMismatch {
        id: u32,
        expect: String,
        found: String,
    },
    #[error("No local project for problem {0}")]
    NoProject(u32),
    #[error("Error sending request: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Error accessing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error processing json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error processing yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Cookie jar: {0}")]
    Cookie(String),
    #[error("Invalid project pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Invalid platform origin {0:?}")]
    InvalidOrigin(String),
}

pub type Result<T> = StdResult<T, Error>;

impl Error {
    pub(crate) fn io<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
    pub(crate) fn unavailable(self) -> Self {
        match self {
            Self::CatalogUnavailable(_) => self,
            other => Self::CatalogUnavailable(Box::new(other)),
        }
    }
}
