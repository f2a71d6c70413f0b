//! Local companion for an online judge: keeps the problem catalog, names
//! local solution projects and talks to the platform to fetch templates,
//! submit code and poll verdicts.
pub mod account;
pub mod catalog;
mod companion;
pub mod config;
pub mod error;
pub mod judge;
pub mod language;
pub mod project;
pub mod settings;
pub mod workspace;

pub use catalog::{Catalog, CatalogEntry};
pub use companion::Companion;
pub use error::{Error, Result};
pub use language::Language;
pub use project::Project;
pub use settings::Settings;
