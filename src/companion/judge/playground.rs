use super::{search::extract_template, Session, PLAYGROUND_PATH};
use crate::{error::Result, language::Language};
use log::debug;

impl Session {
    /// Creates an empty playground for the problem and returns the code it was
    /// seeded with. An empty `code` makes the platform fill in its own template.
    pub async fn playground_template(
        &self,
        id: u32,
        language: &Language,
        referer: &str,
        code: &str,
    ) -> Result<String> {
        let question = id.to_string();
        let body = self
            .post(PLAYGROUND_PATH, referer)
            .form(&[
                ("csrfmiddlewaretoken", self.csrf_token()),
                ("code", code),
                ("question", question.as_str()),
                ("testcase", ""),
                ("lang", language.name),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!("Playground page for {} is {} bytes", id, body.len());
        extract_template(&body)
    }
}
