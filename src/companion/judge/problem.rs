extern crate serde;
extern crate serde_json;

use super::{Session, GRAPHQL_PATH, INDEX_PATH, PROBLEMSET_PATH};
use crate::{
    catalog::{CatalogEntry, Index},
    error::{Error, Result},
    language::Language,
};
use serde::Deserialize;
use serde_json::json;

const QUESTION_QUERY: &str = r#"
query getQuestionDetail($titleSlug: String!) {
    question(titleSlug: $titleSlug) {
        questionId
        questionTitleSlug
        content
        stats
        codeDefinition
        sampleTestCase
        enableRunCode
        metaData
        translatedContent
    }
}
"#;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    pub question_id: String,
    pub question_title_slug: Option<String>,
    pub content: Option<String>,
    pub stats: Option<String>,
    pub code_definition: Option<String>,
    pub sample_test_case: Option<String>,
    pub enable_run_code: Option<bool>,
    pub meta_data: Option<String>,
    pub translated_content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CodeDefinition {
    value: String,
    default_code: String,
}

#[derive(Deserialize)]
struct QuestionData {
    question: Option<ProblemDetail>,
}
#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<QuestionData>,
}

impl ProblemDetail {
    /// Default code for `language` taken from `codeDefinition`.
    pub fn code_template(&self, language: &Language) -> Result<Option<String>> {
        let defs: Vec<CodeDefinition> = match &self.code_definition {
            Some(v) => serde_json::from_str(v)?,
            None => return Ok(None),
        };
        Ok(defs
            .into_iter()
            .find(|d| d.value == language.name)
            .map(|d| d.default_code))
    }
}

impl Session {
    pub async fn problem_index(&self) -> Result<Index> {
        let referer = self.settings.endpoint(PROBLEMSET_PATH);
        Ok(self
            .get(INDEX_PATH, &referer)
            .send()
            .await?
            .error_for_status()?
            .json::<Index>()
            .await?)
    }

    pub async fn problem_detail(&self, entry: &CatalogEntry) -> Result<ProblemDetail> {
        let referer = self.settings.problem_url(&entry.title_slug);
        self.post(GRAPHQL_PATH, &referer)
            .json(&json!({
                "query": QUESTION_QUERY,
                "variables": { "titleSlug": entry.title_slug },
                "operationName": "getQuestionDetail",
            }))
            .send()
            .await?
            .error_for_status()?
            .json::<GraphqlResponse>()
            .await?
            .data
            .and_then(|d| d.question)
            .ok_or(Error::UnknownProblem(entry.question_id))
    }
}
