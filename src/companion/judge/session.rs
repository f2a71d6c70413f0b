extern crate cookie_store;
extern crate log;
extern crate reqwest;
extern crate reqwest_cookie_store;

use super::LOGIN_PATH;
use crate::{
    config::platform::{CSRF_COOKIE, CSRF_HEADER, SESSION_COOKIE, USER_AGENT},
    error::{Error, Result},
    settings::Settings,
};
use cookie_store::{Cookie, CookieStore};
use log::{debug, info, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, ORIGIN, REFERER},
    Client, RequestBuilder, Url,
};
use reqwest_cookie_store::CookieStoreMutex;
use std::{
    fs::{self, File},
    io::{BufReader, ErrorKind},
    path::Path,
    sync::{Arc, MutexGuard},
};

/// Reads a jar written by [`Session::save_cookies`]. `Ok(None)` when the file is absent.
pub fn read_cookie_file(path: &Path) -> Result<Option<CookieStore>> {
    match File::open(path) {
        Ok(f) => cookie_store::serde::json::load(BufReader::new(f))
            .map(Some)
            .map_err(|e| Error::Cookie(e.to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path)(e)),
    }
}
pub fn write_cookie_file(path: &Path, store: &CookieStore) -> Result<()> {
    let mut buf = Vec::new();
    cookie_store::serde::json::save_incl_expired_and_nonpersistent(store, &mut buf)
        .map_err(|e| Error::Cookie(e.to_string()))?;
    fs::write(path, buf).map_err(Error::io(path))
}

fn restore_cookies(path: &Path) -> CookieStore {
    match read_cookie_file(path) {
        Ok(Some(store)) => {
            debug!("Restored cookies from {}", path.display());
            store
        }
        Ok(None) => CookieStore::default(),
        Err(e) => {
            warn!("Ignoring cookie file: {}", e);
            CookieStore::default()
        }
    }
}

/// An authenticated (or anonymous) connection to the platform.
///
/// The anti-forgery token is always the `csrftoken` cookie currently held by
/// the jar; it is re-read after every request that may rotate it.
pub struct Session {
    client: Client,
    jar: Arc<CookieStoreMutex>,
    origin: Url,
    pub(super) settings: Settings,
    csrf: String,
}

impl Session {
    /// Builds the client, restores persisted cookies and performs the handshake.
    pub async fn connect(settings: Settings) -> Result<Self> {
        let origin =
            Url::parse(&settings.origin).map_err(|_| Error::InvalidOrigin(settings.origin.clone()))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            ORIGIN,
            HeaderValue::from_str(&settings.origin)
                .map_err(|_| Error::InvalidOrigin(settings.origin.clone()))?,
        );
        let jar = Arc::new(CookieStoreMutex::new(restore_cookies(
            &settings.cookie_path(),
        )));
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        let mut ret = Session {
            client,
            jar,
            origin,
            settings,
            csrf: String::new(),
        };
        ret.handshake().await?;
        Ok(ret)
    }

    async fn handshake(&mut self) -> Result<()> {
        let url = self.settings.endpoint("/");
        debug!("Handshake with {}", url);
        let status = self.client.get(&url).send().await?.status();
        self.refresh_token().map_err(|e| {
            warn!("Handshake response {} carried no {}", status, CSRF_COOKIE);
            e
        })?;
        info!("Session ready on {}", self.settings.origin);
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, CookieStore>> {
        self.jar
            .lock()
            .map_err(|_| Error::Cookie(String::from("cookie jar lock poisoned")))
    }
    fn cookie(&self, name: &str) -> Result<Option<String>> {
        let store = self.lock()?;
        let value = store
            .matches(&self.origin)
            .into_iter()
            .find(|c| c.name() == name)
            .map(|c| c.value().to_owned());
        Ok(value)
    }
    fn refresh_token(&mut self) -> Result<()> {
        self.csrf = self
            .cookie(CSRF_COOKIE)?
            .ok_or(Error::HandshakeFailed(CSRF_COOKIE))?;
        Ok(())
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn is_authenticated(&self) -> bool {
        matches!(self.cookie(SESSION_COOKIE), Ok(Some(_)))
    }
    /// Snapshot of every cookie in the jar, expired ones included.
    pub fn cookies(&self) -> Result<Vec<Cookie<'static>>> {
        let store = self.lock()?;
        let cookies = store.iter_any().cloned().collect();
        Ok(cookies)
    }
    pub fn save_cookies(&self, path: &Path) -> Result<()> {
        let store = self.lock()?;
        write_cookie_file(path, &store)
    }

    pub(super) fn get(&self, path: &str, referer: &str) -> RequestBuilder {
        let url = self.settings.endpoint(path);
        debug!("GET {}", url);
        self.client
            .get(url)
            .header(REFERER, referer)
            .header(CSRF_HEADER, self.csrf.as_str())
    }
    pub(super) fn post(&self, path: &str, referer: &str) -> RequestBuilder {
        let url = self.settings.endpoint(path);
        debug!("POST {}", url);
        self.client
            .post(url)
            .header(REFERER, referer)
            .header(CSRF_HEADER, self.csrf.as_str())
    }

    /// Logs in and persists the jar. Bad credentials and network failures are
    /// both reported as `false`.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        match self.try_login(username, password).await {
            Ok(true) => {
                info!("Logged in as {}", username);
                true
            }
            Ok(false) => {
                warn!("Login as {} rejected", username);
                false
            }
            Err(e) => {
                warn!("Login as {} failed: {}", username, e);
                false
            }
        }
    }
    async fn try_login(&mut self, username: &str, password: &str) -> Result<bool> {
        let referer = self.settings.endpoint(LOGIN_PATH);
        self.get(LOGIN_PATH, &referer).send().await?;
        self.refresh_token()?;
        let previous = self.cookie(SESSION_COOKIE)?;
        let status = self
            .post(LOGIN_PATH, &referer)
            .form(&[
                ("csrfmiddlewaretoken", self.csrf.as_str()),
                ("login", username),
                ("password", password),
            ])
            .send()
            .await?
            .status();
        // A session restored from disk doesn't prove these credentials.
        let current = self.cookie(SESSION_COOKIE)?;
        if current.is_none() || current == previous {
            debug!("Login response {} issued no new {}", status, SESSION_COOKIE);
            return Ok(false);
        }
        self.refresh_token()?;
        let path = self.settings.cookie_path();
        if let Err(e) = self.save_cookies(&path) {
            warn!("Logged in but cookies are not persisted: {}", e);
        }
        Ok(true)
    }
}
