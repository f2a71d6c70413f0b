extern crate serde;
extern crate serde_json;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

const ACCEPTED: u32 = 10;

/// Result of one poll of the check endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Poll {
    /// Judging hasn't finished. Holds the platform's state string, e.g.
    /// `PENDING` or `STARTED`.
    Pending(String),
    Finished(Verdict),
}
impl Poll {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// Terminal payload of a judged submission. Fields not modelled here stay in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub state: String,
    pub status_msg: Option<String>,
    pub status_code: Option<u32>,
    pub run_success: Option<bool>,
    pub status_runtime: Option<String>,
    pub status_memory: Option<String>,
    pub total_correct: Option<u32>,
    pub total_testcases: Option<u32>,
    pub compile_error: Option<String>,
    pub full_compile_error: Option<String>,
    pub runtime_error: Option<String>,
    pub full_runtime_error: Option<String>,
    pub last_testcase: Option<Value>,
    pub expected_output: Option<Value>,
    pub code_output: Option<Value>,
    pub lang: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(v) => v.iter().map(value_text).collect::<Vec<_>>().join("\n"),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Verdict {
    pub fn accepted(&self) -> bool {
        self.status_code == Some(ACCEPTED)
            || self.status_msg.as_deref() == Some("Accepted")
    }
    pub fn message(&self) -> &str {
        self.status_msg.as_deref().unwrap_or("Unknown")
    }
    /// Compile or runtime error text, full version preferred.
    pub fn error(&self) -> Option<&str> {
        self.full_compile_error
            .as_deref()
            .or(self.compile_error.as_deref())
            .or(self.full_runtime_error.as_deref())
            .or(self.runtime_error.as_deref())
    }
    pub fn last_testcase(&self) -> Option<String> {
        self.last_testcase.as_ref().map(value_text)
    }
    pub fn expected_output(&self) -> Option<String> {
        self.expected_output.as_ref().map(value_text)
    }
    pub fn code_output(&self) -> Option<String> {
        self.code_output.as_ref().map(value_text)
    }
}
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        if let (Some(correct), Some(total)) = (self.total_correct, self.total_testcases) {
            write!(f, " ({}/{})", correct, total)?;
        }
        if let Some(runtime) = &self.status_runtime {
            write!(f, " runtime {}", runtime)?;
        }
        if let Some(memory) = &self.status_memory {
            write!(f, " memory {}", memory)?;
        }
        Ok(())
    }
}
