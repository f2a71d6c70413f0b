extern crate glob;
extern crate once_cell;
extern crate regex;

use crate::{
    catalog::Catalog,
    error::{Error, Result},
    language::Language,
    project::Project,
};
use glob::{glob, Pattern};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
};

static DIR_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)-(\w+)-([\w-]+)$").expect("dir name regex is valid"));

/// Identity encoded in a project directory name.
#[derive(Debug, PartialEq, Eq)]
pub struct DirName {
    pub id: u32,
    pub language: String,
    pub slug: String,
}

pub fn parse_dir_name(name: &str) -> Option<DirName> {
    let caps = DIR_NAME.captures(name)?;
    Some(DirName {
        id: caps[1].parse().ok()?,
        language: caps[2].to_owned(),
        slug: caps[3].to_owned(),
    })
}

fn list_dirs(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/{}",
        Pattern::escape(&root.to_string_lossy()),
        pattern
    );
    let mut ret = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            Error::io(path)(e.into())
        })?;
        if path.is_dir() {
            ret.push(path);
        }
    }
    ret.sort();
    Ok(ret)
}

fn project_of(catalog: &Catalog, name: &DirName) -> Result<Project> {
    let entry = catalog.resolve(name.id)?;
    if entry.title_slug != name.slug {
        return Err(Error::SlugMismatch {
            id: name.id,
            expect: entry.title_slug.clone(),
            found: name.slug.clone(),
        });
    }
    Project::new(entry.clone(), Language::find(&name.language)?)
}

fn dir_name(path: &Path) -> Option<DirName> {
    path.file_name()
        .and_then(|v| v.to_str())
        .and_then(parse_dir_name)
}

/// Every project directory directly under `root`. Directories that don't
/// match the catalog are skipped with a warning.
pub fn projects(root: &Path, catalog: &Catalog) -> Result<Vec<Project>> {
    let mut ret = Vec::new();
    for path in list_dirs(root, "*-*-*")? {
        let Some(name) = dir_name(&path) else {
            debug!("Skipping {}", path.display());
            continue;
        };
        match project_of(catalog, &name) {
            Ok(v) => ret.push(v),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }
    Ok(ret)
}

/// The local project of problem `id`. With several languages present the
/// first one in name order wins.
pub fn find(root: &Path, catalog: &Catalog, id: u32) -> Result<Project> {
    catalog.resolve(id)?;
    let mut names = list_dirs(root, &format!("{}-*-*", id))?
        .into_iter()
        .filter_map(|path| dir_name(&path))
        .filter(|name| name.id == id);
    let first = names.next().ok_or(Error::NoProject(id))?;
    if names.next().is_some() {
        warn!("Multiple projects for problem {}, using {}", id, first.language);
    }
    project_of(catalog, &first)
}

/// Code between the upload zone marks, or all of `source` without them.
pub fn extract_upload(source: &str, language: &Language) -> String {
    let begin = language.begin_mark();
    let end = language.end_mark();
    let mut lines = source.lines();
    if !lines.any(|l| l.trim() == begin) {
        return source.to_owned();
    }
    let zone: Vec<&str> = lines.take_while(|l| l.trim() != end).collect();
    let mut ret = zone.join("\n");
    ret.push('\n');
    ret
}

/// Creates the project directory and writes `template` inside upload zone
/// marks. An existing source file is left alone. Returns whether the source
/// file was written.
pub fn scaffold(root: &Path, project: &Project, template: &str) -> Result<bool> {
    let test_dir = root.join(project.test_dir());
    fs::create_dir_all(&test_dir).map_err(Error::io(&test_dir))?;
    let source = root.join(project.source_path());
    if source.exists() {
        warn!("{} exists, not overwriting", source.display());
        return Ok(false);
    }
    let lang = project.language;
    let content = format!(
        "{}\n{}\n{}\n",
        lang.begin_mark(),
        template.trim_end(),
        lang.end_mark()
    );
    fs::write(&source, content).map_err(Error::io(&source))?;
    Ok(true)
}

/// Reads the source file, writes the upload file and returns its content.
pub fn prepare_upload(root: &Path, project: &Project) -> Result<String> {
    let source = root.join(project.source_path());
    let code = extract_upload(
        &fs::read_to_string(&source).map_err(Error::io(&source))?,
        project.language,
    );
    let upload = root.join(project.upload_path());
    fs::write(&upload, &code).map_err(Error::io(&upload))?;
    Ok(code)
}
