extern crate once_cell;

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::{collections::HashMap, fmt};

const BEGIN_UPLOAD_ZONE: &str = "BEGIN UPLOAD ZONE";
const END_UPLOAD_ZONE: &str = "END UPLOAD ZONE";

#[derive(Debug, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub extension: &'static str,
    pub comment: &'static str,
}

static LANGUAGES: Lazy<HashMap<&'static str, Language>> = Lazy::new(|| {
    [
        Language::new("c", ".c", "//"),
        Language::new("cpp", ".cpp", "//"),
        Language::new("csharp", ".cs", "//"),
        Language::new("python", ".py", "#"),
    ]
    .into_iter()
    .map(|lang| (lang.name, lang))
    .collect()
});

impl Language {
    const fn new(name: &'static str, extension: &'static str, comment: &'static str) -> Self {
        Self {
            name,
            extension,
            comment,
        }
    }
    pub fn find(name: &str) -> Result<&'static Language> {
        LANGUAGES
            .get(name)
            .ok_or_else(|| Error::UnknownLanguage(name.to_owned()))
    }
    /// All built in languages, sorted by name.
    pub fn all() -> Vec<&'static Language> {
        let mut ret: Vec<_> = LANGUAGES.values().collect();
        ret.sort_by_key(|lang| lang.name);
        ret
    }

    pub fn begin_mark(&self) -> String {
        format!("{} {}", self.comment, BEGIN_UPLOAD_ZONE)
    }
    pub fn end_mark(&self) -> String {
        format!("{} {}", self.comment, END_UPLOAD_ZONE)
    }
    pub fn with_extension(&self, path: &str) -> String {
        format!("{}{}", path, self.extension)
    }
}
impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
