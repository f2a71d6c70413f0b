use crate::{
    catalog::CatalogEntry,
    config::platform::ORIGIN,
    error::{Error, Result},
    language::Language,
};
use std::{fmt, path::PathBuf};

/// Naming of one local solution directory. Everything is derived from the
/// catalog entry and the language, nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub entry: CatalogEntry,
    pub language: &'static Language,
}

impl Project {
    pub fn new(entry: CatalogEntry, language: &'static Language) -> Result<Self> {
        if language.name.is_empty() || !language.name.chars().all(|c| c.is_ascii_graphic()) {
            return Err(Error::InvalidProjectInput("language name must be printable"));
        }
        if entry.title_slug.is_empty() {
            return Err(Error::InvalidProjectInput("problem entry has no slug"));
        }
        Ok(Self { entry, language })
    }
    pub fn from_names(entry: CatalogEntry, language: &str) -> Result<Self> {
        Self::new(entry, Language::find(language)?)
    }

    pub fn id(&self) -> u32 {
        self.entry.question_id
    }
    pub fn slug(&self) -> &str {
        &self.entry.title_slug
    }
    pub fn title(&self) -> &str {
        &self.entry.title
    }

    pub fn dir(&self) -> PathBuf {
        PathBuf::from(format!("{}-{}-{}", self.id(), self.language, self.slug()))
    }
    pub fn test_dir(&self) -> PathBuf {
        self.dir().join("test")
    }
    pub fn source_path(&self) -> PathBuf {
        self.dir().join(self.language.with_extension("solution"))
    }
    pub fn generated_path(&self) -> PathBuf {
        self.dir().join(self.language.with_extension("solution.gen"))
    }
    pub fn upload_path(&self) -> PathBuf {
        self.dir().join(self.language.with_extension("solution.upload"))
    }
    pub fn executable_path(&self) -> PathBuf {
        self.dir().join("solution")
    }
    pub fn url(&self) -> String {
        problem_url(ORIGIN, self.slug())
    }
}
impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.entry, self.language)
    }
}

pub(crate) fn problem_url(origin: &str, slug: &str) -> String {
    format!("{}/problems/{}/description/", origin.trim_end_matches('/'), slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Status;
    use std::path::Path;

    fn two_sum() -> CatalogEntry {
        CatalogEntry {
            question_id: 1,
            title: String::from("Two Sum"),
            title_slug: String::from("two-sum"),
            status: Status::Untouched,
            paid_only: false,
            difficulty: None,
        }
    }

    #[test]
    fn derives_paths() {
        let p = Project::from_names(two_sum(), "cpp").unwrap();
        assert_eq!(p.dir(), Path::new("1-cpp-two-sum"));
        assert_eq!(p.dir(), p.dir());
        assert_eq!(p.test_dir(), Path::new("1-cpp-two-sum/test"));
        assert_eq!(p.source_path(), Path::new("1-cpp-two-sum/solution.cpp"));
        assert_eq!(p.generated_path(), Path::new("1-cpp-two-sum/solution.gen.cpp"));
        assert_eq!(p.upload_path(), Path::new("1-cpp-two-sum/solution.upload.cpp"));
        assert_eq!(p.executable_path(), Path::new("1-cpp-two-sum/solution"));
        assert_eq!(p.url(), "https://leetcode.com/problems/two-sum/description/");
    }

    #[test]
    fn dir_follows_every_language() {
        for lang in Language::all() {
            let p = Project::new(two_sum(), lang).unwrap();
            assert_eq!(p.dir(), PathBuf::from(format!("1-{}-two-sum", lang.name)));
        }
    }

    #[test]
    fn rejects_bad_input() {
        let mut entry = two_sum();
        entry.title_slug.clear();
        assert!(matches!(
            Project::from_names(entry, "c"),
            Err(Error::InvalidProjectInput(_))
        ));
        assert!(matches!(
            Project::from_names(two_sum(), "cobol"),
            Err(Error::UnknownLanguage(_))
        ));
    }
}
