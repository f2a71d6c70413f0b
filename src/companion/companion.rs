use crate::{
    catalog::{Catalog, CatalogEntry},
    error::{Error, Result},
    judge::Session,
    project::Project,
    settings::Settings,
    workspace,
};
use log::debug;

/// Owner of the per-process platform session and problem catalog. Both are
/// created on first use and then kept for the lifetime of the value.
pub struct Companion {
    settings: Settings,
    session: Option<Session>,
    catalog: Option<Catalog>,
}

impl Companion {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            session: None,
            catalog: None,
        }
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub async fn session(&mut self) -> Result<&mut Session> {
        let session = match self.session.take() {
            Some(v) => v,
            None => {
                debug!("Connecting to {}", self.settings.origin);
                Session::connect(self.settings.clone()).await?
            }
        };
        Ok(self.session.insert(session))
    }

    /// The catalog from the local snapshot, downloading it only when no
    /// snapshot exists.
    pub async fn catalog(&mut self) -> Result<&Catalog> {
        let catalog = match self.catalog.take() {
            Some(v) => v,
            None => {
                let path = self.settings.catalog_path();
                match Catalog::open(&path)? {
                    Some(v) => v,
                    None => {
                        let session = self.session().await.map_err(Error::unavailable)?;
                        Catalog::load(&path, session).await?
                    }
                }
            }
        };
        Ok(self.catalog.insert(catalog))
    }
    pub async fn update(&mut self) -> Result<&Catalog> {
        let path = self.settings.catalog_path();
        let catalog = Catalog::refresh(&path, self.session().await?).await?;
        Ok(self.catalog.insert(catalog))
    }

    pub async fn resolve(&mut self, id: u32) -> Result<CatalogEntry> {
        Ok(self.catalog().await?.resolve(id)?.clone())
    }
    pub async fn project(&mut self, id: u32, language: &str) -> Result<Project> {
        Project::from_names(self.resolve(id).await?, language)
    }
    pub async fn local_project(&mut self, id: u32) -> Result<Project> {
        let root = self.settings.root.clone();
        workspace::find(&root, self.catalog().await?, id)
    }
    pub async fn local_projects(&mut self) -> Result<Vec<Project>> {
        let root = self.settings.root.clone();
        workspace::projects(&root, self.catalog().await?)
    }
}
