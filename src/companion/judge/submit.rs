extern crate reqwest;
extern crate serde;
extern crate serde_json;

use super::{check_path, submit_path, verdict::Poll, Session};
use crate::{
    catalog::CatalogEntry,
    error::{Error, Result},
    language::Language,
};
use log::{debug, info};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

const MAX_DETAIL: usize = 200;

/// Platform-assigned id of one judging job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(pub u64);
impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize)]
struct SubmitForm<'a> {
    lang: &'a str,
    question_id: u32,
    test_mode: bool,
    typed_code: &'a str,
    judge_type: &'a str,
}

fn short_detail(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_DETAIL) {
        Some((pos, _)) => format!("{}...", &body[..pos]),
        None if body.is_empty() => String::from("empty response"),
        None => body.to_owned(),
    }
}

pub(crate) fn parse_submission(status: StatusCode, body: &str) -> Result<SubmissionId> {
    let value: Option<Value> = serde_json::from_str(body).ok();
    if let Some(id) = value
        .as_ref()
        .and_then(|v| v.get("submission_id"))
        .and_then(Value::as_u64)
    {
        return Ok(SubmissionId(id));
    }
    let detail = value
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| short_detail(body));
    Err(Error::SubmitRejected { status, detail })
}

impl Session {
    pub async fn submit(
        &self,
        entry: &CatalogEntry,
        code: &str,
        language: &Language,
    ) -> Result<SubmissionId> {
        let referer = self.settings.problem_url(&entry.title_slug);
        let response = self
            .post(&submit_path(&entry.title_slug), &referer)
            .json(&SubmitForm {
                lang: language.name,
                question_id: entry.question_id,
                test_mode: false,
                typed_code: code,
                judge_type: "large",
            })
            .send()
            .await?;
        let status = response.status();
        let id = parse_submission(status, &response.text().await?)?;
        info!("Submitted {} as {}", entry, id);
        Ok(id)
    }

    /// Polls the judge once. Never waits and never retries.
    pub async fn check(&self, id: SubmissionId) -> Result<Poll> {
        let referer = self.settings.endpoint("/");
        let value: Value = self
            .get(&check_path(id), &referer)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let state = value
            .get("state")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        if state == "SUCCESS" {
            Ok(Poll::Finished(serde_json::from_value(value)?))
        } else {
            debug!("Submission {} is {:?}", id, state);
            Ok(Poll::Pending(state))
        }
    }
}
